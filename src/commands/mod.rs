//! Command implementations for invoicegen.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the input/output helpers they share. Each command
//! renders its JSON response to a string so it can be tested without
//! capturing stdout.

mod construct;
mod describe;
mod schema;

use crate::cli::{Command, ProfileArgs};
use crate::config::Config;
use crate::error::{GenError, Result};
use crate::profile::ProfileKind;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Version(args) => schema::cmd_version(args, config),
        Command::Schema(args) => schema::cmd_schema(args, config),
        Command::Construct(args) => construct::cmd_construct(args, config),
        Command::Describe(args) => describe::cmd_describe(args, config),
    }
}

/// Profile from the command line, falling back to the configured default.
fn selected_profile(args: &ProfileArgs, config: &Config) -> ProfileKind {
    args.profile.unwrap_or(config.default_profile)
}

/// Serialize a response according to the `pretty_json` setting.
fn render_json<T: Serialize>(value: &T, config: &Config) -> Result<String> {
    let rendered = if config.pretty_json {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| GenError::UserError(format!("failed to serialize response: {}", e)))
}

/// Read an input file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| GenError::UserError(format!("failed to read stdin: {}", e)))?;
        return Ok(content);
    }

    std::fs::read_to_string(path).map_err(|e| {
        GenError::UserError(format!(
            "failed to read input file '{}': {}",
            path.display(),
            e
        ))
    })
}
