//! Logging setup for hosts
//!
//! The crate itself only talks to the `log` facade; binaries call
//! [`init_with_level`] once at startup.

/// Initialize the logging system with a default filter
///
/// `RUST_LOG` still takes precedence when it is set, so a config file's
/// `log_level` only acts as the fallback.
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A host may already have installed a logger; keep theirs.
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized, keeping existing configuration");
    }
}
