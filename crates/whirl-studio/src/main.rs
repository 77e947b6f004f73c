mod app;
mod config;
mod scene;

use whirl_engine::logging::{init_logging, LoggingConfig};

use crate::config::StudioConfig;

fn main() -> anyhow::Result<()> {
    // Before the config, so malformed overrides get reported.
    init_logging(LoggingConfig {
        env_filter: std::env::var(config::LOG_VAR).ok(),
        ..Default::default()
    });

    let config = StudioConfig::from_env();
    log::debug!("{config:?}");

    app::run(config)
}
