use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize tracing from the logging config. Safe to call more than once;
/// only the first call installs a subscriber.
pub fn init_logging(logging_config: &LoggingConfig) {
    // Parse level string -> LevelFilter
    let level_filter = match logging_config.level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            panic!(
                "Invalid logging.level '{}'. Valid values: trace, debug, info, warn, error",
                logging_config.level
            );
        }
    };

    // Route log-crate records (reqwest internals) through tracing as well.
    let _ = tracing_log::LogTracer::init();

    // This can be used to allow env-based overrides, plus the default:
    let filter_layer = EnvFilter::default().add_directive(level_filter.into());

    match logging_config.format.to_lowercase().as_str() {
        "json" => {
            let _ = tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt::layer().json())
                .try_init();
        }
        _ => {
            // Human-readable console output; also the fallback for unknown
            // format values.
            let _ = tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt::layer().pretty())
                .try_init();
        }
    }
}
