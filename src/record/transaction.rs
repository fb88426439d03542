//! Decoded transactions.

use alloc::string::String;

use chrono::NaiveDateTime;

use crate::field::{
    amount::{Amount, decode_amount},
    date::decode_date_time,
    hex::to_hex,
    transaction::{TransactionType, classify_transaction_type, decode_user_data},
};

use super::layout::TransactionLogEntry;

/// A single transaction from the card's log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TransactionRecord {
    #[cfg_attr(feature = "serde", serde(rename = "txn_type"))]
    pub kind: TransactionType,
    /// Not applicable for miscellaneous and disabling transactions.
    #[cfg_attr(feature = "serde", serde(rename = "txn_amt"))]
    pub amount: Amount,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "txn_datetime", serialize_with = "crate::ser::date_time")
    )]
    pub date_time: Option<NaiveDateTime>,
    /// Location code for road pricing and parking, otherwise ASCII text.
    #[cfg_attr(feature = "serde", serde(rename = "txn_user_data"))]
    pub user_data: String,
    /// The card's autoload amount if this transaction triggered an autoload,
    /// otherwise zero.
    #[cfg_attr(feature = "serde", serde(rename = "txn_a_l_amt"))]
    pub autoload_amount: Amount,
}

/// Decode a transaction log entry.
///
/// Returns `None` for an unused slot (see [`TransactionLogEntry::is_empty`]).
/// The card's autoload amount is passed in, since the entry only records
/// whether an autoload took place (bit 0 of the last user data byte).
pub fn decode_transaction(
    entry: &TransactionLogEntry,
    autoload_amount: Amount,
) -> Option<TransactionRecord> {
    if entry.is_empty() {
        return None;
    }

    let type_code = to_hex(&[entry.kind]);

    let autoload_amount = if entry.user_data[7] & 0x01 == 1 {
        autoload_amount
    } else {
        Amount::ZERO
    };

    Some(TransactionRecord {
        kind: classify_transaction_type(&type_code),
        amount: decode_amount(&to_hex(&entry.amount), &type_code),
        date_time: decode_date_time(&to_hex(&entry.timestamp)),
        user_data: decode_user_data(&type_code, &entry.user_data),
        autoload_amount,
    })
}
