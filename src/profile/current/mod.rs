//! Current invoice profile.
//!
//! Members are camel-case and always readable except the payer and the
//! deadline, which follow the presence of their raw fields. The partial
//! receiver stays public. Payment goes through a payable fallback, and the
//! collected amount can be forwarded to the beneficiary automatically.

use std::sync::LazyLock;

use tracing::debug;

use super::descriptions as text;
use super::tokens::{AUTO_WITHDRAW_ON_PAID_CODE, PAYER_VISIBILITY, VALIDITY_PERIOD_VISIBILITY};
use super::{Profile, ProfileKind};
use crate::fields::{
    CanonicalFieldSet, FieldError, InvoiceFields, PartialReceiverReference, RawFieldSet,
    VisibilityMode, VisibilityModes, names,
};
use crate::metadata::{DisplayMetadata, InputDisplay, MemberDisplay, WidgetOptions};
use crate::schema::{FieldDependency, FieldKind, FieldSpec, InputSchema, MEMO_MAX_LENGTH};
use crate::template::ContractTemplate;

static TEMPLATE: LazyLock<ContractTemplate> =
    LazyLock::new(|| ContractTemplate::new("current", include_str!("invoice.sol")));

/// Forwards the full amount to the beneficiary right after the invoice is paid.
pub const AUTO_WITHDRAW_SNIPPET: &str = "        if (wasPaid) {
            doWithdraw(beneficiary, currentAmount);
            currentAmount = 0;
        }
";

/// Default of the `autoWithdrawOnPaid` flag when the host omits it.
pub const AUTO_WITHDRAW_DEFAULT: bool = true;

/// Code fragment inserted at the end of `pay`, if any.
fn auto_withdraw_fragment(raw: &RawFieldSet) -> Option<&'static str> {
    let enabled = raw
        .flag(names::AUTO_WITHDRAW_ON_PAID)
        .unwrap_or(AUTO_WITHDRAW_DEFAULT);
    enabled.then_some(AUTO_WITHDRAW_SNIPPET)
}

/// The current invoice generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentProfile;

impl Profile for CurrentProfile {
    fn kind(&self) -> ProfileKind {
        ProfileKind::Current
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
                        default: Some(PartialReceiverReference::Beneficiary.as_str()),
                    },
                )
                .widget("radio"),
                FieldSpec::new(
                    names::AUTO_WITHDRAW_ON_PAID,
                    text::AUTO_WITHDRAW_TITLE,
                    text::AUTO_WITHDRAW,
                    FieldKind::Boolean {
                        default: AUTO_WITHDRAW_DEFAULT,
                    },
                ),
            ],
            dependencies: vec![FieldDependency::RequiresWhen {
                field: names::PARTIAL_RECEIVER,
                equals: PartialReceiverReference::Payer.as_str(),
                requires: vec![names::PAYER],
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
        visibility.set(
            VALIDITY_PERIOD_VISIBILITY,
            VisibilityMode::for_presence(fields.validity_period.is_some()),
        );

        let fragment = auto_withdraw_fragment(raw);
        debug!(auto_withdraw = fragment.is_some(), "resolved auto-withdraw");

        let mut canonical = fields.encode();
        canonical.insert(AUTO_WITHDRAW_ON_PAID_CODE, fragment.unwrap_or_default());

        Ok((canonical, visibility))
    }

    fn display_metadata(&self) -> DisplayMetadata {
        DisplayMetadata::new()
            .member(
                "invoiceAmount",
                MemberDisplay::new(text::INVOICE_AMOUNT_TITLE, text::INVOICE_AMOUNT, 5)
                    .widget("ethCount"),
            )
            .member(
                "currentAmount",
                MemberDisplay::new(text::CURRENT_AMOUNT_TITLE, text::CURRENT_AMOUNT, 10)
                    .widget("ethCount"),
            )
            .member(
                "beneficiary",
                MemberDisplay::new("Beneficiary", text::BENEFICIARY, 10),
            )
            .member("memo", MemberDisplay::new("Short Message", text::MEMO, 15))
            .member(
                "validityPeriod",
                MemberDisplay::new(text::VALIDITY_PERIOD_TITLE, text::VALIDITY_PERIOD, 20)
                    .widget("unixTime")
                    .widget_options(WidgetOptions::Format {
                        format: text::DATE_FORMAT,
                    }),
            )
            .member("payer", MemberDisplay::new("Payer", text::PAYER, 25))
            .member(
                "partialReceiver",
                MemberDisplay::new(text::PARTIAL_RECEIVER_TITLE, text::PARTIAL_RECEIVER, 30),
            )
            .member("owner", MemberDisplay::new("Contract Owner", text::OWNER, 35))
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
                    "Withdraw collected funds: the beneficiary once the invoice is paid, the partial receiver once it is overdue.",
                    50,
                )
                .input(InputDisplay::new("Receiver Address", "Who will receive funds"))
                .input(
                    InputDisplay::new("Ether Amount", "This ether amount will be sent.")
                        .widget("ethCount"),
                ),
            )
            .dashboard(&[
                "invoiceAmount",
                "currentAmount",
                "getStatus",
                "validityPeriod",
            ])
    }
}
