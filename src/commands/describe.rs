//! Implementation of the `invoicegen describe` command.

use super::{read_input, render_json, selected_profile};
use crate::cli::DescribeArgs;
use crate::config::Config;
use crate::engine;
use crate::error::{GenError, Result};
use crate::fields::RawFieldSet;
use crate::metadata::CompiledInterface;

/// Execute the `invoicegen describe` command.
pub fn cmd_describe(args: DescribeArgs, config: &Config) -> Result<()> {
    println!("{}", describe_output(&args, config)?);
    Ok(())
}

fn describe_output(args: &DescribeArgs, config: &Config) -> Result<String> {
    // Both inputs are parsed so malformed files are reported, though neither
    // affects the metadata.
    let raw = match &args.input {
        Some(path) => RawFieldSet::from_json(&read_input(path)?).map_err(|e| {
            GenError::UserError(format!("invalid field set '{}': {}", path.display(), e))
        })?,
        None => RawFieldSet::new(),
    };
    let interface = match &args.abi {
        Some(path) => CompiledInterface::from_json(&read_input(path)?).map_err(|e| {
            GenError::UserError(format!("invalid ABI '{}': {}", path.display(), e))
        })?,
        None => CompiledInterface::default(),
    };

    let kind = selected_profile(&args.profile, config);
    render_json(&engine::post_construct(kind, &raw, &interface), config)
}
