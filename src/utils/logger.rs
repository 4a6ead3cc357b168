//! Logging setup for the inspection tool. All output goes to stderr so stdout carries
//! only the inspected record.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Levels accepted by `[logging] level`, quietest last.
pub const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Directive used when `RUST_LOG` is unset.
///
/// The configured level applies to this crate, defaulting to info. `--verbose` raises
/// it to at least debug.
pub fn default_directive(level: Option<&str>, verbose: bool) -> String {
    let level = level.filter(|l| LEVELS.contains(l)).unwrap_or("info");
    let level = if verbose && level != "trace" { "debug" } else { level };
    format!("connect_model={}", level)
}

fn filter(level: Option<&str>, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level, verbose)))
}

pub fn init_cli_logger(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Structured variant for when the tool runs under a log collector.
pub fn init_json_logger(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_follows_configured_level() {
        assert_eq!(default_directive(None, false), "connect_model=info");
        assert_eq!(default_directive(Some("error"), false), "connect_model=error");
        assert_eq!(default_directive(Some("trace"), false), "connect_model=trace");
    }

    #[test]
    fn test_verbose_raises_to_debug() {
        assert_eq!(default_directive(None, true), "connect_model=debug");
        assert_eq!(default_directive(Some("warn"), true), "connect_model=debug");
        assert_eq!(default_directive(Some("trace"), true), "connect_model=trace");
    }

    #[test]
    fn test_unrecognized_level_falls_back_to_info() {
        assert_eq!(default_directive(Some("loud"), false), "connect_model=info");
    }
}
