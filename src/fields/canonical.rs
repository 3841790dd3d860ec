//! Typed invoice fields and their canonical (template-ready) encoding.
//!
//! Resolution happens in two steps. `InvoiceFields::from_raw` turns the raw
//! mapping into typed values where optional parties and deadlines stay
//! `Option`s. Sentinel encoding (`0x00`, `0`) only happens when the fields are
//! flattened into a `CanonicalFieldSet` right before substitution.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::raw::RawFieldSet;
use super::types::{
    Address, FieldError, NO_DEADLINE, PARTIAL_RECEIVER_FIELD, PartialReceiverReference,
    VisibilityMode,
};

/// Raw field names shared by both profiles.
pub mod names {
    pub const INVOICE_AMOUNT: &str = "invoiceAmount";
    pub const BENEFICIARY: &str = "beneficiary";
    pub const MEMO: &str = "memo";
    pub const PAYER: &str = "payer";
    pub const VALIDITY_PERIOD: &str = "validityPeriod";
    pub const PARTIAL_RECEIVER: &str = super::PARTIAL_RECEIVER_FIELD;
    pub const AUTO_WITHDRAW_ON_PAID: &str = "autoWithdrawOnPaid";
}

/// Resolved template values keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalFieldSet(BTreeMap<String, String>);

impl CanonicalFieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Visibility decision per visibility token (e.g. `payerVisibility`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityModes(BTreeMap<String, VisibilityMode>);

impl VisibilityModes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, token: impl Into<String>, mode: VisibilityMode) {
        self.0.insert(token.into(), mode);
    }

    pub fn get(&self, token: &str) -> Option<VisibilityMode> {
        self.0.get(token).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, VisibilityMode)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Invoice parameters after validation, before sentinel encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceFields {
    pub invoice_amount: String,
    pub beneficiary: Address,
    pub memo: String,
    pub payer: Option<Address>,
    /// Unix timestamp as submitted, in decimal text.
    pub validity_period: Option<String>,
    pub partial_receiver: Option<PartialReceiverReference>,
}

impl InvoiceFields {
    /// Validate and type the fields common to both profiles.
    ///
    /// Only `partialReceiver` is checked; everything else is trusted to have
    /// passed the host's schema validation.
    pub fn from_raw(raw: &RawFieldSet) -> Result<Self, FieldError> {
        let partial_receiver = raw
            .text(names::PARTIAL_RECEIVER)
            .map(|value| PartialReceiverReference::parse(&value))
            .transpose()?;

        Ok(Self {
            invoice_amount: required_text(raw, names::INVOICE_AMOUNT),
            beneficiary: Address::new(required_text(raw, names::BENEFICIARY)),
            memo: required_text(raw, names::MEMO),
            payer: raw.text(names::PAYER).map(Address::new),
            validity_period: raw.text(names::VALIDITY_PERIOD),
            partial_receiver,
        })
    }

    /// Concrete address the partial receiver reference points at.
    ///
    /// `None` when no reference was given, or when it names a payer that was
    /// never supplied.
    pub fn partial_receiver_address(&self) -> Option<&Address> {
        match self.partial_receiver? {
            PartialReceiverReference::Beneficiary => Some(&self.beneficiary),
            PartialReceiverReference::Payer => self.payer.as_ref(),
        }
    }

    /// Flatten into template values, encoding unset optionals as sentinels.
    pub fn encode(&self) -> CanonicalFieldSet {
        let mut fields = CanonicalFieldSet::new();
        fields.insert(names::INVOICE_AMOUNT, self.invoice_amount.as_str());
        fields.insert(names::BENEFICIARY, self.beneficiary.as_str());
        fields.insert(names::MEMO, self.memo.as_str());
        fields.insert(names::PAYER, address_or_zero(self.payer.as_ref()));
        fields.insert(
            names::VALIDITY_PERIOD,
            self.validity_period.as_deref().unwrap_or(NO_DEADLINE),
        );
        fields.insert(
            names::PARTIAL_RECEIVER,
            address_or_zero(self.partial_receiver_address()),
        );
        debug!(
            payer_set = self.payer.is_some(),
            deadline_set = self.validity_period.is_some(),
            partial_receiver = ?self.partial_receiver,
            "encoded invoice fields"
        );
        fields
    }
}

fn address_or_zero(address: Option<&Address>) -> String {
    address
        .map(|a| a.as_str().to_string())
        .unwrap_or_else(|| Address::zero().as_str().to_string())
}

// Missing required fields are a host precondition violation; they are
// substituted as empty text rather than treated as a handled error.
fn required_text(raw: &RawFieldSet, name: &str) -> String {
    raw.text(name).unwrap_or_else(|| {
        warn!(field = name, "required field missing from raw input");
        String::new()
    })
}
