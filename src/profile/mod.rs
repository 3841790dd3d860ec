//! Generator profiles.
//!
//! A profile bundles everything needed to turn raw invoice parameters into a
//! contract: its input schema, its field resolver, its contract template and
//! the display metadata for the compiled contract. Two profiles exist:
//!
//! - **legacy**: first-generation invoice contract with capitalised members
//! - **current**: camel-case members, payable fallback, optional auto-withdraw

mod current;
mod descriptions;
mod legacy;


pub use current::{AUTO_WITHDRAW_SNIPPET, CurrentProfile};
pub use legacy::LegacyProfile;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::Result;
use crate::fields::{CanonicalFieldSet, FieldError, RawFieldSet, VisibilityModes};
use crate::metadata::DisplayMetadata;
use crate::schema::InputSchema;
use crate::template::{ContractTemplate, GeneratedSource};

/// Name of the deployable contract every profile generates.
pub const CONTRACT_NAME: &str = "InvoiceWrapper";

/// Visibility token names used by the templates.
pub mod tokens {
    pub const PAYER_VISIBILITY: &str = "payerVisibility";
    pub const VALIDITY_PERIOD_VISIBILITY: &str = "validityPeriodVisibility";
    pub const PARTIAL_RECEIVER_VISIBILITY: &str = "partialReceiverVisibility";
    pub const AUTO_WITHDRAW_ON_PAID_CODE: &str = "autoWithdrawOnPaidCode";
}

/// Selects one of the generator profiles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    /// First-generation invoice contract.
    Legacy,
    /// Current invoice contract with auto-withdraw support.
    #[default]
    Current,
}

impl ProfileKind {
    /// Parse a profile name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "legacy" => Some(Self::Legacy),
            "current" => Some(Self::Current),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKind::Legacy => "legacy",
            ProfileKind::Current => "current",
        }
    }

    /// The profile implementation for this kind.
    pub fn profile(self) -> &'static dyn Profile {
        match self {
            ProfileKind::Legacy => &LegacyProfile,
            ProfileKind::Current => &CurrentProfile,
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generator profile.
///
/// Implementations are stateless; every method is a pure function of its
/// arguments.
pub trait Profile: Send + Sync {
    fn kind(&self) -> ProfileKind;

    /// Accepted input fields and UI hints.
    fn input_schema(&self) -> InputSchema;

    /// The contract template this profile instantiates.
    fn template(&self) -> &ContractTemplate;

    /// Validate and normalize raw input into template values.
    fn resolve(
        &self,
        raw: &RawFieldSet,
    ) -> std::result::Result<(CanonicalFieldSet, VisibilityModes), FieldError>;

    /// Display metadata for the generated contract's members.
    fn display_metadata(&self) -> DisplayMetadata;

    /// Resolve `raw` and instantiate the template with the result.
    ///
    /// Resolution failures return before any substitution happens.
    fn generate(&self, raw: &RawFieldSet) -> Result<GeneratedSource> {
        let (fields, visibility) = self.resolve(raw)?;
        debug!(
            profile = %self.kind(),
            values = fields.len(),
            "resolved field set"
        );
        Ok(self.template().instantiate(&fields, &visibility)?)
    }
}
