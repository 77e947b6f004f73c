use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "whirl_engine=debug,whirl_studio=trace") and wins over `level`.
/// With neither set, `RUST_LOG` is consulted, then `Info` is used.
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Option<LevelFilter>,
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }
}

/// Where the effective filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterSource {
    Spec(String),
    Level(LevelFilter),
}

fn resolve(config: &LoggingConfig, rust_log: Option<String>) -> FilterSource {
    if let Some(filter) = &config.env_filter {
        return FilterSource::Spec(filter.clone());
    }
    if let Some(level) = config.level {
        return FilterSource::Level(level);
    }
    match rust_log {
        Some(filter) => FilterSource::Spec(filter),
        None => FilterSource::Level(LevelFilter::Info),
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match resolve(&config, std::env::var("RUST_LOG").ok()) {
            FilterSource::Spec(filter) => builder.parse_filters(&filter),
            FilterSource::Level(level) => builder.filter_level(level),
        };

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_string_wins() {
        let config = LoggingConfig::default()
            .with_level(LevelFilter::Trace)
            .with_filter("warn");
        assert_eq!(
            resolve(&config, Some("debug".into())),
            FilterSource::Spec("warn".into())
        );
    }

    #[test]
    fn level_beats_environment() {
        let config = LoggingConfig::default().with_level(LevelFilter::Error);
        assert_eq!(
            resolve(&config, Some("debug".into())),
            FilterSource::Level(LevelFilter::Error)
        );
    }

    #[test]
    fn falls_back_to_rust_log_then_info() {
        let config = LoggingConfig::default();
        assert_eq!(
            resolve(&config, Some("whirl_engine=trace".into())),
            FilterSource::Spec("whirl_engine=trace".into())
        );
        assert_eq!(resolve(&config, None), FilterSource::Level(LevelFilter::Info));
    }
}
