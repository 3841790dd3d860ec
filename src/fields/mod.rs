//! Field model for invoice generation.
//!
//! - `RawFieldSet`: what the host submitted, untyped
//! - `InvoiceFields`: validated typed view with explicit optionals
//! - `CanonicalFieldSet` + `VisibilityModes`: what the template consumes
//!
//! The only handled failure is an unknown `partialReceiver` value.

mod canonical;
mod raw;
mod types;

#[cfg(test)]
mod tests;

pub use canonical::{CanonicalFieldSet, InvoiceFields, VisibilityModes, names};
pub use raw::RawFieldSet;
pub use types::{
    Address, FieldError, NO_DEADLINE, PARTIAL_RECEIVER_FIELD, PartialReceiverReference,
    VisibilityMode, ZERO_ADDRESS,
};
