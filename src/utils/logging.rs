use tracing_subscriber::EnvFilter;

use crate::models::Config;

/// Install the stderr log subscriber; `RUST_LOG` overrides the `--debug` level
pub fn init_logging(config: &Config) {
    let default_level = if config.debug_mode { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());

    // A subscriber may already be installed when called twice.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
