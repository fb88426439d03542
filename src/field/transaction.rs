//! Transaction types and user data.

use alloc::string::{String, ToString};
use core::fmt;

use super::hex::to_hex;

/// The kind of a logged transaction.
///
/// Codes missing from the card family's table are kept verbatim in
/// [`TransactionType::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionType {
    RetailPayment,
    Miscellaneous,
    BusRefundWithAutoloadDisable,
    BusPaymentWithAutoloadDisable,
    RailPaymentWithAutoloadDisable,
    PurseAndAutoloadDisable,
    AutoloadDisable,
    BusRefund,
    AddValue,
    CashBack,
    VepPayment,
    EzlDebit,
    BusPayment,
    RailPayment,
    PurseDisable,
    /// Electronic parking, time based charging.
    EpsTbc,
    /// Electronic road pricing, distance based charging.
    ErpDbc,
    /// Electronic road pricing, congestion based charging.
    ErpCbc,
    /// An unrecognised type, holding its hex digits.
    Unknown(String),
}

/// Known type codes, in matching order.
static TYPE_TABLE: [(&str, TransactionType); 18] = [
    ("A0", TransactionType::RetailPayment),
    ("F0", TransactionType::Miscellaneous),
    ("87", TransactionType::BusRefundWithAutoloadDisable),
    ("86", TransactionType::BusPaymentWithAutoloadDisable),
    ("85", TransactionType::RailPaymentWithAutoloadDisable),
    ("84", TransactionType::PurseAndAutoloadDisable),
    ("83", TransactionType::AutoloadDisable),
    ("76", TransactionType::BusRefund),
    ("75", TransactionType::AddValue),
    ("66", TransactionType::CashBack),
    ("3B", TransactionType::VepPayment),
    ("32", TransactionType::EzlDebit),
    ("31", TransactionType::BusPayment),
    ("30", TransactionType::RailPayment),
    ("11", TransactionType::PurseDisable),
    ("09", TransactionType::EpsTbc),
    ("08", TransactionType::ErpDbc),
    ("07", TransactionType::ErpCbc),
];

impl TransactionType {
    /// The one-byte type code as hex digits, or the raw digits if unknown.
    pub fn code(&self) -> &str {
        match self {
            Self::Unknown(code) => code,
            known => TYPE_TABLE
                .iter()
                .find(|(_, t)| t == known)
                .map(|(code, _)| *code)
                .unwrap_or_default(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::RetailPayment => "Retail Payment",
            Self::Miscellaneous => "Miscellaneous",
            Self::BusRefundWithAutoloadDisable => "Bus Refund with AL Disable",
            Self::BusPaymentWithAutoloadDisable => "Bus Payment with AL Disable",
            Self::RailPaymentWithAutoloadDisable => "Rail Payment with AL Disable",
            Self::PurseAndAutoloadDisable => "Purse and AL Disable",
            Self::AutoloadDisable => "AL Disable",
            Self::BusRefund => "Bus Refund",
            Self::AddValue => "Add Value",
            Self::CashBack => "Cash back",
            Self::VepPayment => "VEP Payment",
            Self::EzlDebit => "EZL Debit",
            Self::BusPayment => "Bus Payment",
            Self::RailPayment => "Rail Payment",
            Self::PurseDisable => "Purse Disable",
            Self::EpsTbc => "EPS TBC (Time Based Charging)",
            Self::ErpDbc => "ERP DBC (Distance Based Charging)",
            Self::ErpCbc => "ERP CBC (Congestion Based Charging)",
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TransactionType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Classify a transaction by the last two hex digits of its type code.
pub fn classify_transaction_type(type_code: &str) -> TransactionType {
    TYPE_TABLE
        .iter()
        .find(|(code, _)| type_code.ends_with(code))
        .map(|(_, t)| t.clone())
        .unwrap_or_else(|| TransactionType::Unknown(type_code.to_string()))
}

/// Interpret the eight bytes of user data attached to a transaction.
///
/// Road pricing (`07`) records keep a location code in bytes 4 and 5, and
/// parking (`09`) records in bytes 3 and 4; these are returned as hex.
/// Everything else, including distance based charging (`08`), is ASCII text.
pub fn decode_user_data(type_code: &str, user_data: &[u8; 8]) -> String {
    if type_code.ends_with("07") {
        to_hex(&user_data[4..6])
    } else if type_code.ends_with("09") {
        to_hex(&user_data[3..5])
    } else {
        decode_ascii(user_data)
    }
}

/// Decode bytes as ASCII, or return an empty string if any byte is not.
fn decode_ascii(bytes: &[u8]) -> String {
    if bytes.is_ascii() {
        bytes.iter().map(|&b| char::from(b)).collect()
    } else {
        String::new()
    }
}
