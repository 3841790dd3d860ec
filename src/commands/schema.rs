//! Implementation of the `version` and `schema` commands.

use super::{render_json, selected_profile};
use crate::cli::ProfileArgs;
use crate::config::Config;
use crate::engine;
use crate::error::Result;

/// Execute the `invoicegen version` command.
pub fn cmd_version(args: ProfileArgs, config: &Config) -> Result<()> {
    println!("{}", version_output(&args, config)?);
    Ok(())
}

/// Execute the `invoicegen schema` command.
pub fn cmd_schema(args: ProfileArgs, config: &Config) -> Result<()> {
    println!("{}", schema_output(&args, config)?);
    Ok(())
}

fn version_output(args: &ProfileArgs, config: &Config) -> Result<String> {
    render_json(&engine::get_version(selected_profile(args, config)), config)
}

fn schema_output(args: &ProfileArgs, config: &Config) -> Result<String> {
    render_json(&engine::get_params(selected_profile(args, config)), config)
}
