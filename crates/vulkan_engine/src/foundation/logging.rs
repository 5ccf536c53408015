//! Logging utilities and structured logging support

/// Initialize the logging system
///
/// `default_level` is the filter applied when `RUST_LOG` is not set, so the
/// environment always wins over the config file. Calling this more than once
/// leaves the first logger in place.
pub fn init(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);

    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized, keeping existing configuration");
    }
}
