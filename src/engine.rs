//! Host-facing constructor operations.
//!
//! These are the entry points a constructor host calls, returning responses
//! in the host's JSON shape (`{"result": "success", ...}` or
//! `{"result": "error", "error_descr": ...}`). Every operation is a pure
//! function of its arguments.
//!
//! ```
//! use invoicegen::engine::{ConstructResponse, construct};
//! use invoicegen::fields::RawFieldSet;
//! use invoicegen::profile::ProfileKind;
//!
//! let raw = RawFieldSet::new()
//!     .with("invoiceAmount", "1000")
//!     .with("beneficiary", "0xBEEF")
//!     .with("memo", "rent");
//!
//! match construct(ProfileKind::Legacy, &raw) {
//!     ConstructResponse::Success { source, contract_name } => {
//!         assert_eq!(contract_name, "InvoiceWrapper");
//!         assert!(source.contains("address internal Payer;"));
//!     }
//!     ConstructResponse::Error { error_descr } => panic!("{}", error_descr),
//! }
//! ```

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::GenError;
use crate::fields::RawFieldSet;
use crate::metadata::CompiledInterface;
use crate::profile::{CONTRACT_NAME, ProfileKind};

/// Constructor protocol version reported to the host.
pub const PROTOCOL_VERSION: u32 = 2;

/// Target chain of the generated contracts.
pub const BLOCKCHAIN: &str = "ethereum";

/// Response to `get_version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum VersionResponse {
    Success {
        version: u32,
        blockchain: &'static str,
    },
}

/// Response to `get_params`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ParamsResponse {
    Success { schema: Value, ui_schema: Value },
}

/// Response to `construct`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ConstructResponse {
    Success {
        source: String,
        contract_name: String,
    },
    Error {
        error_descr: String,
    },
}

impl ConstructResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ConstructResponse::Success { .. })
    }
}

/// Response to `post_construct`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PostConstructResponse {
    Success {
        function_specs: Value,
        dashboard_functions: Vec<&'static str>,
    },
}

/// Report the constructor protocol version and target chain.
pub fn get_version(_kind: ProfileKind) -> VersionResponse {
    VersionResponse::Success {
        version: PROTOCOL_VERSION,
        blockchain: BLOCKCHAIN,
    }
}

/// Describe the accepted input fields and how to render them.
pub fn get_params(kind: ProfileKind) -> ParamsResponse {
    let schema = kind.profile().input_schema();
    ParamsResponse::Success {
        schema: schema.json_schema(),
        ui_schema: schema.ui_schema(),
    }
}

/// Generate contract source from raw field values.
///
/// An invalid `partialReceiver` (or a template that cannot be completed)
/// yields an error response; no source text is returned in that case.
pub fn construct(kind: ProfileKind, raw: &RawFieldSet) -> ConstructResponse {
    match kind.profile().generate(raw) {
        Ok(source) => {
            info!(profile = %kind, bytes = source.as_str().len(), "constructed contract source");
            ConstructResponse::Success {
                source: source.into_string(),
                contract_name: CONTRACT_NAME.to_string(),
            }
        }
        Err(err) => {
            warn!(profile = %kind, error = %err, "construct rejected input");
            let error_descr = match err {
                GenError::Field(field) => field.to_string(),
                other => other.to_string(),
            };
            ConstructResponse::Error { error_descr }
        }
    }
}

/// Display metadata for the compiled contract.
///
/// Neither the raw fields nor the compiled interface influence the result.
pub fn post_construct(
    kind: ProfileKind,
    _raw: &RawFieldSet,
    _interface: &CompiledInterface,
) -> PostConstructResponse {
    let metadata = kind.profile().display_metadata();
    PostConstructResponse::Success {
        function_specs: metadata.function_specs(),
        dashboard_functions: metadata.dashboard_members().to_vec(),
    }
}
