//! Tracing subscriber setup for the CLI.
//!
//! Logs go to stderr so stdout stays clean for JSON responses. `RUST_LOG`
//! takes precedence over the configured filter; `--verbose` overrides both.

use tracing_subscriber::EnvFilter;

/// Filter directive used by `--verbose`.
pub const VERBOSE_FILTER: &str = "invoicegen=debug";

/// Choose the effective filter directive.
pub fn filter_directive(verbose: bool, env: Option<&str>, configured: &str) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    match env {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => configured.to_string(),
    }
}

/// Install the global fmt subscriber. Safe to call more than once.
///
/// The configured filter is checked when the config loads; a malformed
/// `RUST_LOG` falls back to `warn`.
pub fn init(verbose: bool, configured: &str) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(verbose, env.as_deref(), configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
