//! Legacy invoice profile.
//!
//! Members are capitalised (`Payer`, `ValidityPeriod`, ...). When no validity
//! period is given, both the deadline and the partial receiver are hidden
//! since neither carries any meaning without a deadline.

use std::sync::LazyLock;

use super::descriptions as text;
use super::tokens::{PARTIAL_RECEIVER_VISIBILITY, PAYER_VISIBILITY, VALIDITY_PERIOD_VISIBILITY};
use super::{Profile, ProfileKind};
use crate::fields::{
    CanonicalFieldSet, FieldError, InvoiceFields, PartialReceiverReference, RawFieldSet,
    VisibilityMode, VisibilityModes, names,
};
use crate::metadata::{DisplayMetadata, InputDisplay, MemberDisplay, WidgetOptions};
use crate::schema::{FieldDependency, FieldKind, FieldSpec, InputSchema, MEMO_MAX_LENGTH};
use crate::template::ContractTemplate;

static TEMPLATE: LazyLock<ContractTemplate> =
    LazyLock::new(|| ContractTemplate::new("legacy", include_str!("invoice.sol")));

/// The first-generation invoice generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyProfile;

impl Profile for LegacyProfile {
    fn kind(&self) -> ProfileKind {
        ProfileKind::Legacy
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema {
            fields: vec![
                FieldSpec::new(
                    names::INVOICE_AMOUNT,
                    text::INVOICE_AMOUNT_TITLE,
                    text::INVOICE_AMOUNT,
                    FieldKind::EtherAmount,
                )
                .required()
                .widget("ethCount"),
                FieldSpec::new(
                    names::BENEFICIARY,
                    "Beneficiary address",
                    text::BENEFICIARY,
                    FieldKind::Address,
                )
                .required(),
                FieldSpec::new(
                    names::MEMO,
                    "Short message",
                    text::MEMO,
                    FieldKind::Text {
                        min_length: 0,
                        max_length: MEMO_MAX_LENGTH,
                    },
                )
                .required(),
                FieldSpec::new(names::PAYER, "Payer address", text::PAYER, FieldKind::Address),
                FieldSpec::new(
                    names::VALIDITY_PERIOD,
                    text::VALIDITY_PERIOD_TITLE,
                    text::VALIDITY_PERIOD,
                    FieldKind::UnixTime,
                )
                .widget("unixTime"),
                FieldSpec::new(
                    names::PARTIAL_RECEIVER,
                    text::PARTIAL_RECEIVER_TITLE,
                    text::PARTIAL_RECEIVER,
                    FieldKind::Enum {
                        values: PartialReceiverReference::ALL
                            .iter()
                            .map(|r| r.as_str())
                            .collect(),
                        default: None,
                    },
                )
                .widget("radio"),
            ],
            dependencies: vec![FieldDependency::Requires {
                field: names::VALIDITY_PERIOD,
                requires: vec![names::PARTIAL_RECEIVER],
            }],
        }
    }

    fn template(&self) -> &ContractTemplate {
        &TEMPLATE
    }

    fn resolve(
        &self,
        raw: &RawFieldSet,
    ) -> Result<(CanonicalFieldSet, VisibilityModes), FieldError> {
        let fields = InvoiceFields::from_raw(raw)?;

        let mut visibility = VisibilityModes::new();
        visibility.set(
            PAYER_VISIBILITY,
            VisibilityMode::for_presence(fields.payer.is_some()),
        );

        let deadline = VisibilityMode::for_presence(fields.validity_period.is_some());
        visibility.set(VALIDITY_PERIOD_VISIBILITY, deadline);
        visibility.set(PARTIAL_RECEIVER_VISIBILITY, deadline);

        Ok((fields.encode(), visibility))
    }

    fn display_metadata(&self) -> DisplayMetadata {
        DisplayMetadata::new()
            .member(
                "InvoiceAmount",
                MemberDisplay::new(text::INVOICE_AMOUNT_TITLE, text::INVOICE_AMOUNT, 5)
                    .widget("ethCount"),
            )
            .member(
                "CurrentAmount",
                MemberDisplay::new(text::CURRENT_AMOUNT_TITLE, text::CURRENT_AMOUNT, 10)
                    .widget("ethCount"),
            )
            .member(
                "Beneficiary",
                MemberDisplay::new("Beneficiary", text::BENEFICIARY, 10),
            )
            .member("Memo", MemberDisplay::new("Short Message", text::MEMO, 15))
            .member(
                "ValidityPeriod",
                MemberDisplay::new(text::VALIDITY_PERIOD_TITLE, text::VALIDITY_PERIOD, 20)
                    .widget("unixTime")
                    .widget_options(WidgetOptions::Format {
                        format: text::DATE_FORMAT,
                    }),
            )
            .member("Payer", MemberDisplay::new("Payer", text::PAYER, 25))
            .member(
                "PartialReceiver",
                MemberDisplay::new(text::PARTIAL_RECEIVER_TITLE, text::PARTIAL_RECEIVER, 30),
            )
            .member("Owner", MemberDisplay::new("Contract Owner", text::OWNER, 35))
            .member(
                "getStatus",
                MemberDisplay::new("Status", "Current invoice status", 40)
                    .widget("enum")
                    .widget_options(WidgetOptions::Enum {
                        r#enum: text::STATUS_VALUES.to_vec(),
                    }),
            )
            .member(
                "pay",
                MemberDisplay::new("Pay invoice", "Pay the invoice", 45).payable(
                    "Ether amount",
                    "This ether amount will be sent with the function call.",
                ),
            )
            .member(
                "withdraw",
                MemberDisplay::new(
                    "Withdraw",
                    "Withdraw funds from invoice contract after it validity period ends if partial funds accumulated but invoice amount is not collected.",
                    50,
                )
                .input(InputDisplay::new("Receiver Address", "Who will receive funds"))
                .input(
                    InputDisplay::new("Ether Amount", "This ether amount will be sent.")
                        .widget("ethCount"),
                ),
            )
            .dashboard(&["InvoiceAmount", "CurrentAmount", "getStatus"])
    }
}
