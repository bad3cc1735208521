//! Configuration for the parse-diff command line tool
//!
//! This crate provides:
//! - Config file lookup (working directory, XDG config dir, home directory)
//! - Application configuration (AppConfig)
//! - Line ending name resolution shared with the CLI flags

pub mod app_config;
pub mod config_file;

pub use app_config::{AppConfig, ConfigError, OutputFormat, resolve_line_ending};
pub use config_file::{config_file_candidates, load_config_file, load_first_config};
