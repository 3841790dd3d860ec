//! CLI argument parsing for invoicegen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::profile::ProfileKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Invoicegen: generate invoice payment contracts from a parameter set.
///
/// Each subcommand mirrors one constructor-host operation and prints its
/// JSON response on stdout.
#[derive(Parser, Debug)]
#[command(name = "invoicegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file (default: ./invoicegen.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for invoicegen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the constructor protocol version.
    Version(ProfileArgs),

    /// Print the input JSON-schema and UI-schema.
    Schema(ProfileArgs),

    /// Generate contract source from a JSON field set.
    ///
    /// Exits with code 2 when the field set is rejected.
    Construct(ConstructArgs),

    /// Print display metadata for the generated contract's members.
    Describe(DescribeArgs),
}

/// Profile selection shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Generator profile (default: from config, else `current`).
    #[arg(short, long, value_enum)]
    pub profile: Option<ProfileKind>,
}

/// Arguments for the `construct` command.
#[derive(Args, Debug, Clone)]
pub struct ConstructArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// JSON object of raw field values (`-` reads stdin).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the generated source to this file instead of embedding it in the response.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `describe` command.
#[derive(Args, Debug, Clone, Default)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Compiled contract ABI (JSON array).
    #[arg(long)]
    pub abi: Option<PathBuf>,

    /// JSON object of the raw field values used for generation.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
