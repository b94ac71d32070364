//! Interactive personal library manager.
//!
//! # Responsibility
//! - Resolve configuration, start file logging and run the menu over
//!   stdin/stdout.

mod config;
mod display;
mod menu;

use bookshelf_core::{init_logging, JsonFileStore};
use config::CliConfig;
use log::{error, info};
use menu::Menu;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::from_env();

    // Console output stays usable without file logs.
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("logging disabled: {err}");
    }

    let store = JsonFileStore::new(&config.library_path);
    info!("event=library_open module=cli path={}", store.path().display());
    let stdin = io::stdin();
    let stdout = io::stdout();

    let result = Menu::start(store, stdin.lock(), stdout.lock()).and_then(|mut menu| menu.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=console_io module=cli status=error error={err}");
            eprintln!("console error: {err}");
            ExitCode::FAILURE
        }
    }
}
