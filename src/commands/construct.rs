//! Implementation of the `invoicegen construct` command.
//!
//! Reads a raw field set, runs the selected profile, and prints the host
//! response. With `--out`, the source is written to a file and the printed
//! response carries the output path instead of the source text.

use super::{read_input, render_json, selected_profile};
use crate::cli::ConstructArgs;
use crate::config::Config;
use crate::engine::{self, ConstructResponse};
use crate::error::{GenError, Result};
use crate::fields::RawFieldSet;
use crate::fs::write_output;
use serde::Serialize;
use tracing::info;

/// Response printed when the source went to a file.
#[derive(Debug, Serialize)]
struct WrittenResponse<'a> {
    result: &'static str,
    contract_name: &'a str,
    output: String,
}

/// Execute the `invoicegen construct` command.
///
/// The response is printed even when the field set is rejected; the
/// rejection is then reported through the exit code.
pub fn cmd_construct(args: ConstructArgs, config: &Config) -> Result<()> {
    let (rendered, response) = construct_output(&args, config)?;
    println!("{}", rendered);

    match response {
        ConstructResponse::Success { .. } => Ok(()),
        ConstructResponse::Error { error_descr } => Err(GenError::Rejected(error_descr)),
    }
}

fn construct_output(args: &ConstructArgs, config: &Config) -> Result<(String, ConstructResponse)> {
    let content = read_input(&args.input)?;
    let raw = RawFieldSet::from_json(&content).map_err(|e| {
        GenError::UserError(format!(
            "input '{}' is not a JSON object of field values: {}",
            args.input.display(),
            e
        ))
    })?;

    let kind = selected_profile(&args.profile, config);
    let response = engine::construct(kind, &raw);

    let rendered = match (&response, &args.out) {
        (
            ConstructResponse::Success {
                source,
                contract_name,
            },
            Some(out),
        ) => {
            write_output(out, source)?;
            info!(path = %out.display(), "wrote generated source");
            render_json(
                &WrittenResponse {
                    result: "success",
                    contract_name,
                    output: out.display().to_string(),
                },
                config,
            )?
        }
        _ => render_json(&response, config)?,
    };

    Ok((rendered, response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ProfileArgs;
    use crate::profile::ProfileKind;
    use serde_json::Value;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn compact() -> Config {
        Config {
            pretty_json: false,
            ..Default::default()
        }
    }

    fn write_fields(dir: &TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("fields.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    fn args(input: PathBuf, out: Option<PathBuf>, profile: ProfileKind) -> ConstructArgs {
        ConstructArgs {
            profile: ProfileArgs {
                profile: Some(profile),
            },
            input,
            out,
        }
    }

    #[test]
    fn test_construct_prints_source() {
        let dir = TempDir::new().unwrap();
        let input = write_fields(
            &dir,
            r#"{"invoiceAmount": "1000", "beneficiary": "0xBEEF", "memo": "rent"}"#,
        );

        let (rendered, response) =
            construct_output(&args(input, None, ProfileKind::Legacy), &compact()).unwrap();
        assert!(response.is_success());

        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["result"], "success");
        assert_eq!(value["contract_name"], "InvoiceWrapper");
        assert!(
            value["source"]
                .as_str()
                .unwrap()
                .contains("address internal Payer;")
        );
    }

    #[test]
    fn test_construct_writes_out_file() {
        let dir = TempDir::new().unwrap();
        let input = write_fields(
            &dir,
            r#"{"invoiceAmount": 500, "beneficiary": "0xAAA", "memo": "x", "payer": "0xBBB", "partialReceiver": "Payer", "autoWithdrawOnPaid": false}"#,
        );
        let out = dir.path().join("build").join("Invoice.sol");

        let (rendered, _) = construct_output(
            &args(input, Some(out.clone()), ProfileKind::Current),
            &compact(),
        )
        .unwrap();

        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert!(value.get("source").is_none());
        assert_eq!(value["output"], out.display().to_string());

        let source = std::fs::read_to_string(&out).unwrap();
        assert!(source.contains("address public payer;"));
        assert!(source.contains("    0xBBB,\n    0,\n    0xBBB\n"));
    }

    #[test]
    fn test_construct_rejection_is_reported() {
        let dir = TempDir::new().unwrap();
        let input = write_fields(
            &dir,
            r#"{"invoiceAmount": "1", "beneficiary": "0x1", "memo": "m", "partialReceiver": "Owner"}"#,
        );
        let out = dir.path().join("Invoice.sol");

        let (rendered, response) = construct_output(
            &args(input, Some(out.clone()), ProfileKind::Legacy),
            &compact(),
        )
        .unwrap();

        assert!(!response.is_success());
        assert!(rendered.contains(r#""result":"error""#));
        assert!(!out.exists());
    }

    #[test]
    fn test_construct_malformed_input() {
        let dir = TempDir::new().unwrap();
        let input = write_fields(&dir, "[1, 2, 3]");

        let err = construct_output(&args(input, None, ProfileKind::Legacy), &compact())
            .unwrap_err();
        assert!(matches!(err, GenError::UserError(_)));
    }

    #[test]
    fn test_construct_missing_input_file() {
        let dir = TempDir::new().unwrap();
        let err = construct_output(
            &args(dir.path().join("absent.json"), None, ProfileKind::Current),
            &compact(),
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    }
}
