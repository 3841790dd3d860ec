//! Titles and descriptions shared by both profiles' schema and display tables.

pub const INVOICE_AMOUNT_TITLE: &str = "Invoice Amount";
pub const INVOICE_AMOUNT: &str = "Ether amount which should be paid.";

pub const CURRENT_AMOUNT_TITLE: &str = "Current Amount";
pub const CURRENT_AMOUNT: &str = "Ether amount currently accumulated in invoice.";

pub const BENEFICIARY: &str = "Who will get money when the invoice is paid.";

pub const MEMO: &str = "What is the invoice for.";

pub const PAYER: &str = "If this address is set, invoice can be paid only from it. All other receipts will be returned.";

pub const VALIDITY_PERIOD_TITLE: &str = "Valid Until";
pub const VALIDITY_PERIOD: &str =
    "After this date invoice contract will not accept incoming Ether and will send it back.";

pub const PARTIAL_RECEIVER_TITLE: &str = "Partial Receiver";
pub const PARTIAL_RECEIVER: &str = "Who will be able to withdraw funds from invoice contract after it validity period ends if partial funds accumulated but invoice amount is not collected.";

pub const AUTO_WITHDRAW_TITLE: &str = "Auto Withdraw";
pub const AUTO_WITHDRAW: &str =
    "Send collected Ether to the beneficiary as soon as the invoice amount is paid.";

pub const OWNER: &str = "Contract owner address.";

pub const STATUS_VALUES: [&str; 3] = ["Active", "Overdue", "Paid"];

pub const DATE_FORMAT: &str = "yyyy.mm.dd HH:MM:ss (o)";
