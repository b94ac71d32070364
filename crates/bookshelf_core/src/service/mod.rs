//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog mutations and store writes into use-case APIs.
//! - Keep the CLI decoupled from persistence details.

pub mod library_service;
