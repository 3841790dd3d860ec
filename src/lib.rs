//! Invoicegen: parameterized generator for invoice payment contracts.
//!
//! Given a set of invoice parameters, a generator profile resolves them into
//! template values and instantiates a Solidity contract template. The
//! `engine` module exposes the operations a constructor host calls:
//! `get_version`, `get_params`, `construct` and `post_construct`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod fields;
pub mod fs;
pub mod logging;
pub mod metadata;
pub mod profile;
pub mod schema;
pub mod template;
