//! Decoded card records.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::field::{
    amount::{Amount, decode_amount},
    date::decode_date,
    hex::{field, to_hex},
    status::{
        AutoloadStatus, PurseStatus, decode_autoload_amount, decode_autoload_status,
        decode_card_profile, decode_purse_status,
    },
};

use super::{
    layout::{
        AUTOLOAD_AMOUNT, CAN, CARD_PROFILE, CARD_STATE, DETAIL_LEN, EXPIRY_DATE,
        HISTORY_RECORD_COUNT, LAST_TRANSACTION, NO_LAST_TRANSACTION, PURSE_BALANCE, PURSE_STATUS,
        TransactionLogEntry,
    },
    transaction::{TransactionRecord, decode_transaction},
};

/// Balances below this many cents are [`BalanceStatus::Limited`].
pub const LIMITED_BALANCE_CENTS: i64 = 300;

/// Everything decoded from a card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardRecord {
    /// Card account number, as hex digits.
    pub can: String,
    pub purse_balance: Amount,
    /// Magnitude of the purse balance in cents.
    #[cfg_attr(feature = "serde", serde(rename = "int_purse_balance"))]
    pub purse_balance_cents: u32,
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::ser::date"))]
    pub expiry_date: Option<NaiveDate>,
    pub autoload_status: AutoloadStatus,
    #[cfg_attr(feature = "serde", serde(rename = "status"))]
    pub purse_status: Option<PurseStatus>,
    pub autoload_amount: Amount,
    pub card_profile: Option<u8>,
    /// Number of entries the card declares in its transaction log.
    #[cfg_attr(feature = "serde", serde(rename = "history_record_num"))]
    pub history_record_count: u8,
    #[cfg_attr(feature = "serde", serde(rename = "last_txn"))]
    pub last_transaction: Option<TransactionRecord>,
    #[cfg_attr(feature = "serde", serde(rename = "txn_history"))]
    pub transaction_history: Vec<TransactionRecord>,
}

impl CardRecord {
    pub(super) fn decode<L: AsRef<[u8]>>(detail: &[u8], transaction_logs: &[L]) -> Self {
        if detail.len() < DETAIL_LEN {
            debug!(len = detail.len(), "card detail response is truncated");
        }

        let hex = to_hex(detail);

        let status = field(&hex, PURSE_STATUS);
        let purse_balance = decode_amount(field(&hex, PURSE_BALANCE), "");
        let autoload_amount = decode_autoload_amount(status, field(&hex, AUTOLOAD_AMOUNT));

        let history_record_count = detail.get(HISTORY_RECORD_COUNT).copied().unwrap_or(0);

        let last_transaction = if field(&hex, CARD_STATE) != NO_LAST_TRANSACTION {
            detail
                .get(LAST_TRANSACTION)
                .and_then(TransactionLogEntry::from_prefix)
                .and_then(|entry| decode_transaction(&entry, autoload_amount))
        } else {
            None
        };

        if transaction_logs.len() != usize::from(history_record_count) {
            debug!(
                declared = history_record_count,
                supplied = transaction_logs.len(),
                "transaction log count differs from the card's history record count"
            );
        }

        let transaction_history = transaction_logs
            .iter()
            .enumerate()
            .filter_map(|(index, log)| {
                let log = log.as_ref();

                let Some(entry) = TransactionLogEntry::from_prefix(log) else {
                    debug!(index, len = log.len(), "skipping truncated transaction log");
                    return None;
                };

                let transaction = decode_transaction(&entry, autoload_amount);
                if transaction.is_none() {
                    debug!(index, "skipping unused transaction log slot");
                }

                transaction
            })
            .collect();

        Self {
            can: field(&hex, CAN).to_string(),
            purse_balance,
            purse_balance_cents: purse_balance.cents(),
            expiry_date: decode_date(field(&hex, EXPIRY_DATE)),
            autoload_status: decode_autoload_status(status),
            purse_status: decode_purse_status(status),
            autoload_amount,
            card_profile: decode_card_profile(field(&hex, CARD_PROFILE)),
            history_record_count,
            last_transaction,
            transaction_history,
        }
    }

    /// The card account number in groups of four digits (`1009 6012 3456 7890`).
    pub fn formatted_can(&self) -> String {
        let mut formatted = String::with_capacity(self.can.len() + 3);

        for (i, c) in self.can.chars().enumerate() {
            if i != 0 && i % 4 == 0 && i <= 12 {
                formatted.push(' ');
            }
            formatted.push(c);
        }

        formatted
    }

    /// Whether the card is a concession card, issued with account numbers
    /// starting `8000` to `8009`.
    pub fn is_concession_card(&self) -> bool {
        self.can
            .get(..4)
            .and_then(|prefix| prefix.parse::<u16>().ok())
            .is_some_and(|prefix| (8000..=8009).contains(&prefix))
    }

    pub fn balance_status(&self) -> BalanceStatus {
        match self.purse_balance.signed_cents() {
            Some(cents) if cents >= LIMITED_BALANCE_CENTS => BalanceStatus::Sufficient,
            Some(cents) if cents > 0 => BalanceStatus::Limited,
            _ => BalanceStatus::Overdue,
        }
    }

    /// The card's status, preferring one reported by the issuer's servers.
    ///
    /// Without a reported status, a card is [`CardStatus::Normal`] if its purse
    /// is enabled and [`CardStatus::Blocked`] otherwise.
    pub fn status(&self, reported: Option<CardStatus>) -> CardStatus {
        reported.unwrap_or(match self.purse_status {
            Some(PurseStatus::Enabled) => CardStatus::Normal,
            Some(PurseStatus::NotEnabled) | None => CardStatus::Blocked,
        })
    }

    /// Whether the card has expired by `today`, counting the expiry date
    /// itself. A card without a readable expiry date has not expired.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry <= today)
    }

    /// Whether the card has expired by today's date in the local time zone.
    ///
    /// _Requires Cargo feature `std`._
    #[cfg(feature = "std")]
    pub fn is_expired_now(&self) -> bool {
        self.is_expired(chrono::Local::now().date_naive())
    }
}

/// How much of the purse remains for travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceStatus {
    /// Zero, negative or unknown.
    Overdue,
    /// Positive, but below [`LIMITED_BALANCE_CENTS`].
    Limited,
    Sufficient,
}

/// Status of a card account, as reported by the issuer or derived from the
/// purse status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardStatus {
    Normal,
    Blocked,
    PendingBlock,
}

impl CardStatus {
    /// Whether the status warrants a warning to the cardholder.
    pub fn should_show_banner(self) -> bool {
        match self {
            Self::Blocked | Self::PendingBlock => true,
            Self::Normal => false,
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Blocked => "blocked",
            Self::PendingBlock => "pending block",
        })
    }
}
