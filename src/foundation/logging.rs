//! Logging setup
//!
//! Thin wrapper around `env_logger`. [`init`] honors the `RUST_LOG`
//! environment variable; [`init_with_level`] seeds the filter from a
//! configuration value instead (see
//! [`EngineConfig::log_level`](crate::config::EngineConfig)), with the
//! environment still able to override it.

pub use log::{debug, error, info, trace, warn};

/// Initialize logging from the `RUST_LOG` environment variable
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default level filter such as `"info"`.
///
/// `RUST_LOG`, when set, takes precedence over `level`.
pub fn init_with_level(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
