//! Startup configuration resolved from the environment.
//!
//! The binary takes no flags; everything adjustable comes from
//! `BOOKSHELF_*` variables, with blank values treated as unset.

use bookshelf_core::{default_log_level, DEFAULT_LIBRARY_FILE};
use std::path::PathBuf;

pub const LIBRARY_PATH_VAR: &str = "BOOKSHELF_LIBRARY_PATH";
pub const LOG_DIR_VAR: &str = "BOOKSHELF_LOG_DIR";
pub const LOG_LEVEL_VAR: &str = "BOOKSHELF_LOG_LEVEL";

const DEFAULT_LOG_DIR_NAME: &str = "bookshelf-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub library_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            library_path: non_blank(LIBRARY_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY_FILE)),
            log_dir: non_blank(LOG_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)),
            log_level: non_blank(LOG_LEVEL_VAR)
                .unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}
