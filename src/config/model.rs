//! Config struct definition and default implementation.

use crate::profile::ProfileKind;
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "invoicegen.yaml";

/// Configuration for the invoicegen CLI.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Profile used when a command does not pass `--profile`.
    #[serde(default)]
    pub default_profile: ProfileKind,

    /// Whether JSON responses are pretty-printed.
    #[serde(default = "default_true")]
    pub pretty_json: bool,

    /// Tracing filter directive used when `RUST_LOG` is unset (e.g. `warn`, `invoicegen=debug`).
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: ProfileKind::default(),
            pretty_json: default_true(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}
