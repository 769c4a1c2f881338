use std::sync::Once;

/// Project-specific filter variable, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "PLUMB_LOG";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "plumb_geom=trace,winit=warn"). When it is `None` the filter comes from
/// [`LOG_ENV`], then `RUST_LOG`, then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// The filter string that will be applied, if any.
    fn resolve_filter(&self) -> Option<String> {
        [
            self.env_filter.clone(),
            std::env::var(LOG_ENV).ok(),
            std::env::var("RUST_LOG").ok(),
        ]
        .into_iter()
        .flatten()
        .find(|f| !f.trim().is_empty())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; subsequent calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolve_filter() {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder.write_style(config.write_style);

        // A test harness or host app may already own the global logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let cfg = LoggingConfig {
            env_filter: Some("plumb_geom=trace".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(cfg.resolve_filter().as_deref(), Some("plumb_geom=trace"));
    }

    #[test]
    fn blank_explicit_filter_is_ignored() {
        let cfg = LoggingConfig {
            env_filter: Some("   ".into()),
            ..LoggingConfig::default()
        };
        // Falls through to the environment, which may or may not be set;
        // either way the blank string itself is never used.
        assert_ne!(cfg.resolve_filter().as_deref(), Some("   "));
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            env_filter: Some("off".into()),
            ..LoggingConfig::default()
        });
        log::info!("still alive after double init");
    }
}
