//! Value types shared by both generator profiles.

use std::fmt;
use thiserror::Error;

/// Textual form of the zero-address sentinel inserted for unset parties.
pub const ZERO_ADDRESS: &str = "0x00";

/// Deadline sentinel meaning "no validity period".
pub const NO_DEADLINE: &str = "0";

/// Field name of the symbolic partial receiver reference.
pub const PARTIAL_RECEIVER_FIELD: &str = "partialReceiver";

/// Error raised while resolving a raw field set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A symbolic enum field carried a value outside its accepted set.
    #[error("incorrect `{field}`: unexpected value {value:?}")]
    InvalidEnum {
        /// Name of the offending field.
        field: String,
        /// The rejected value as submitted.
        value: String,
    },
}

/// A contract address as submitted by the caller.
///
/// The text is inserted verbatim into the generated source; no checksum or
/// length validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The zero-address sentinel used for an unset party.
    pub fn zero() -> Self {
        Self(ZERO_ADDRESS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Access level keyword substituted for a visibility token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityMode {
    Public,
    Internal,
}

impl VisibilityMode {
    /// Public when the controlling raw field was supplied, internal otherwise.
    pub fn for_presence(present: bool) -> Self {
        if present { Self::Public } else { Self::Internal }
    }

    /// Solidity keyword for this mode.
    pub fn keyword(self) -> &'static str {
        match self {
            VisibilityMode::Public => "public",
            VisibilityMode::Internal => "internal",
        }
    }
}

impl fmt::Display for VisibilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Which party may withdraw partial funds once the deadline has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartialReceiverReference {
    Beneficiary,
    Payer,
}

impl PartialReceiverReference {
    /// Every accepted symbolic value, in schema order.
    pub const ALL: [PartialReceiverReference; 2] = [Self::Beneficiary, Self::Payer];

    /// Parse the symbolic value. Matching is exact and case-sensitive.
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        match value {
            "Beneficiary" => Ok(Self::Beneficiary),
            "Payer" => Ok(Self::Payer),
            other => Err(FieldError::InvalidEnum {
                field: PARTIAL_RECEIVER_FIELD.to_string(),
                value: other.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PartialReceiverReference::Beneficiary => "Beneficiary",
            PartialReceiverReference::Payer => "Payer",
        }
    }
}
