//! Tests for field typing and canonical encoding.

use super::*;
use serde_json::json;

// =========================================================================
// Helper functions
// =========================================================================

fn base_raw() -> RawFieldSet {
    RawFieldSet::new()
        .with("invoiceAmount", "1000")
        .with("beneficiary", "0xBEEF")
        .with("memo", "rent")
}

// =========================================================================
// RawFieldSet
// =========================================================================

#[test]
fn test_raw_text_keeps_strings_verbatim() {
    let raw = base_raw();
    assert_eq!(raw.text("beneficiary").as_deref(), Some("0xBEEF"));
    assert_eq!(raw.text("memo").as_deref(), Some("rent"));
    assert_eq!(raw.text("payer"), None);
}

#[test]
fn test_raw_text_renders_numbers_as_decimal() {
    let raw = RawFieldSet::new()
        .with("invoiceAmount", json!(1000))
        .with("validityPeriod", json!(1735689600u64));
    assert_eq!(raw.text("invoiceAmount").as_deref(), Some("1000"));
    assert_eq!(raw.text("validityPeriod").as_deref(), Some("1735689600"));
}

#[test]
fn test_raw_text_keeps_wei_amounts_beyond_u64() {
    let raw = RawFieldSet::from_json(
        r#"{"invoiceAmount": 123456789012345678901234, "validityPeriod": 18446744073709551616}"#,
    )
    .unwrap();
    assert_eq!(
        raw.text("invoiceAmount").as_deref(),
        Some("123456789012345678901234")
    );
    assert_eq!(
        raw.text("validityPeriod").as_deref(),
        Some("18446744073709551616")
    );
}

#[test]
fn test_raw_flag() {
    let raw = RawFieldSet::new()
        .with("autoWithdrawOnPaid", false)
        .with("other", "yes");
    assert_eq!(raw.flag("autoWithdrawOnPaid"), Some(false));
    assert_eq!(raw.flag("other"), None);
    assert_eq!(raw.flag("missing"), None);
}

#[test]
fn test_raw_from_json() {
    let raw = RawFieldSet::from_json(r#"{"invoiceAmount": 5, "memo": "x"}"#).unwrap();
    assert_eq!(raw.text("invoiceAmount").as_deref(), Some("5"));
    assert_eq!(raw.text("memo").as_deref(), Some("x"));
    assert!(raw.get("payer").is_none());
}

// =========================================================================
// PartialReceiverReference
// =========================================================================

#[test]
fn test_partial_receiver_parse_is_case_sensitive() {
    assert_eq!(
        PartialReceiverReference::parse("Beneficiary").unwrap(),
        PartialReceiverReference::Beneficiary
    );
    assert_eq!(
        PartialReceiverReference::parse("Payer").unwrap(),
        PartialReceiverReference::Payer
    );

    let err = PartialReceiverReference::parse("payer").unwrap_err();
    assert_eq!(
        err,
        FieldError::InvalidEnum {
            field: "partialReceiver".to_string(),
            value: "payer".to_string(),
        }
    );
}

#[test]
fn test_field_error_display() {
    let err = PartialReceiverReference::parse("Owner").unwrap_err();
    assert_eq!(
        err.to_string(),
        "incorrect `partialReceiver`: unexpected value \"Owner\""
    );
}

// =========================================================================
// InvoiceFields
// =========================================================================

#[test]
fn test_from_raw_keeps_optionals_unset() {
    let fields = InvoiceFields::from_raw(&base_raw()).unwrap();
    assert_eq!(fields.payer, None);
    assert_eq!(fields.validity_period, None);
    assert_eq!(fields.partial_receiver, None);
    assert_eq!(fields.partial_receiver_address(), None);
}

#[test]
fn test_from_raw_rejects_unknown_partial_receiver() {
    let raw = base_raw().with("partialReceiver", "Anyone");
    assert!(matches!(
        InvoiceFields::from_raw(&raw),
        Err(FieldError::InvalidEnum { .. })
    ));
}

#[test]
fn test_beneficiary_reference_ignores_payer() {
    let without_payer = base_raw().with("partialReceiver", "Beneficiary");
    let with_payer = without_payer.clone().with("payer", "0xCAFE");

    for raw in [without_payer, with_payer] {
        let fields = InvoiceFields::from_raw(&raw).unwrap();
        assert_eq!(
            fields.partial_receiver_address(),
            Some(&Address::new("0xBEEF"))
        );
    }
}

#[test]
fn test_payer_reference_without_payer_encodes_zero_address() {
    let raw = base_raw().with("partialReceiver", "Payer");
    let fields = InvoiceFields::from_raw(&raw).unwrap();
    assert_eq!(fields.partial_receiver_address(), None);

    let encoded = fields.encode();
    assert_eq!(encoded.get("partialReceiver"), Some(ZERO_ADDRESS));
    assert_eq!(encoded.get("payer"), Some(ZERO_ADDRESS));
}

#[test]
fn test_encode_sentinels_for_unset_optionals() {
    let encoded = InvoiceFields::from_raw(&base_raw()).unwrap().encode();

    assert_eq!(encoded.get("invoiceAmount"), Some("1000"));
    assert_eq!(encoded.get("beneficiary"), Some("0xBEEF"));
    assert_eq!(encoded.get("memo"), Some("rent"));
    assert_eq!(encoded.get("payer"), Some("0x00"));
    assert_eq!(encoded.get("validityPeriod"), Some("0"));
    assert_eq!(encoded.get("partialReceiver"), Some("0x00"));
    assert_eq!(encoded.len(), 6);
}

#[test]
fn test_encode_supplied_values() {
    let raw = base_raw()
        .with("payer", "0xCAFE")
        .with("validityPeriod", json!(1700000000))
        .with("partialReceiver", "Payer");
    let encoded = InvoiceFields::from_raw(&raw).unwrap().encode();

    assert_eq!(encoded.get("payer"), Some("0xCAFE"));
    assert_eq!(encoded.get("validityPeriod"), Some("1700000000"));
    assert_eq!(encoded.get("partialReceiver"), Some("0xCAFE"));
}

#[test]
fn test_missing_required_field_encodes_empty() {
    let raw = RawFieldSet::new().with("beneficiary", "0x1");
    let encoded = InvoiceFields::from_raw(&raw).unwrap().encode();
    assert_eq!(encoded.get("invoiceAmount"), Some(""));
    assert_eq!(encoded.get("memo"), Some(""));
}

// =========================================================================
// VisibilityMode
// =========================================================================

#[test]
fn test_visibility_for_presence() {
    assert_eq!(VisibilityMode::for_presence(true), VisibilityMode::Public);
    assert_eq!(VisibilityMode::for_presence(false), VisibilityMode::Internal);
    assert_eq!(VisibilityMode::Public.keyword(), "public");
    assert_eq!(VisibilityMode::Internal.to_string(), "internal");
}

#[test]
fn test_visibility_modes_lookup() {
    let mut modes = VisibilityModes::new();
    modes.set("payerVisibility", VisibilityMode::Internal);
    assert_eq!(modes.get("payerVisibility"), Some(VisibilityMode::Internal));
    assert_eq!(modes.get("memoVisibility"), None);
}
