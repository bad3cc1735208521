//! Logging setup using env_logger
//!
//! `RUST_LOG` wins when set; otherwise the level configured in
//! `.parse-diff.toml` applies. Output goes to stderr so that stdout stays
//! reserved for the summary.

use env_logger::{Builder, Env};

/// Initialize the global logger.
pub fn init(default_level: &str) {
    let env = Env::default().default_filter_or(default_level);

    Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
