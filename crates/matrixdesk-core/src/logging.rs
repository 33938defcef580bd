//! Tracing setup.
//!
//! Logs go to stderr so that command output on stdout stays machine-readable.
//! `RUST_LOG` takes precedence over the configured level.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

/// Build the filter from `RUST_LOG`, falling back to `default_level`.
///
/// An unparsable `default_level` falls back to `warn`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(from_env.as_deref(), default_level)
}

fn build_filter(from_env: Option<&str>, default_level: &str) -> EnvFilter {
    from_env
        .ok_or(())
        .and_then(|dirs| EnvFilter::try_new(dirs).map_err(|_| ()))
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(default_level: &str) {
    INIT.get_or_init(|| {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        let result = tracing_subscriber::registry()
            .with(env_filter(default_level))
            .with(stderr_layer)
            .try_init();

        if let Err(err) = result {
            eprintln!("logging already initialised: {err}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging("debug");
        init_logging("info");
        tracing::debug!("still fine");
    }

    #[test]
    fn bad_level_falls_back_to_warn() {
        let filter = build_filter(None, "matrixdesk=loud");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn configured_level_used_without_env() {
        assert_eq!(build_filter(None, "debug").to_string(), "debug");
    }

    #[test]
    fn env_directive_overrides_configured_level() {
        assert_eq!(build_filter(Some("trace"), "info").to_string(), "trace");
        assert_eq!(build_filter(Some("matrixdesk=loud"), "info").to_string(), "info");
    }
}
