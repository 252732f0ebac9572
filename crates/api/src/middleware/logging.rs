//! Tracing subscriber setup.
//!
//! Output format follows [`LoggingConfig`]: `json` for log shipping,
//! anything else gets human-readable pretty output for local runs. A
//! `RUST_LOG` environment variable overrides the configured level filter.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Installs the global tracing subscriber.
///
/// Call once at startup, before the first request is served.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    if wants_json(&config.format) {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_target(true),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_span_events(FmtSpan::CLOSE)
                    .with_target(true),
            )
            .init();
    }
}

fn wants_json(format: &str) -> bool {
    format.eq_ignore_ascii_case("json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_json() {
        assert!(wants_json("json"));
        assert!(wants_json("JSON"));
        assert!(!wants_json("pretty"));
        assert!(!wants_json(""));
    }

    #[test]
    fn test_configured_levels_build_a_filter() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(EnvFilter::try_new(level).is_ok());
        }
    }
}
