//! Assembly of card records from raw responses.
//!
//! A tag reader collects two kinds of buffers from a card: the response body
//! of the card detail command (see [`crate::apdu::CARD_DETAIL_COMMAND`]), and
//! one 16-byte entry per transaction in the card's log. [`decode_card_record`]
//! folds these into a single [`CardRecord`].
//!
//! The detail response declares how many log entries the card holds, in
//! [`CardRecord::history_record_count`]. Permissive decoding trusts the
//! buffers it is given rather than this count: readers commonly fail to
//! fetch some entries, and a partial history is more useful than none. Use
//! [`decode_card_record_strict`] to reject input where the two disagree.

pub mod card;
pub mod layout;
pub mod transaction;

use thiserror::Error;

use card::CardRecord;
use layout::{DETAIL_LEN, HISTORY_RECORD_COUNT, LOG_ENTRY_LEN};

/// Errors rejecting input to [`decode_card_record_strict`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The detail response is too short to hold every field.
    #[error("Card detail response holds {len} bytes, expected at least 67.")]
    TruncatedDetail { len: usize },
    /// A different number of log buffers was supplied than the card declares.
    #[error("Card declares {declared} transaction log entries, but {supplied} were supplied.")]
    HistoryCountMismatch { declared: u8, supplied: usize },
    /// A log buffer is too short to hold an entry.
    #[error("Transaction log {index} holds {len} bytes, expected at least 16.")]
    TruncatedLog { index: usize, len: usize },
}

/// Decode a card record from a card detail response and the card's
/// transaction log entries.
///
/// The last transaction is read from the detail response unless the card
/// reports none (see [`layout::NO_LAST_TRANSACTION`]). The history holds one
/// transaction per log buffer, in order, leaving out buffers shorter than
/// [`LOG_ENTRY_LEN`] and unused slots.
///
/// This method is also re-exported as `cepas::decode_card_record`.
pub fn decode_card_record<L: AsRef<[u8]>>(detail: &[u8], transaction_logs: &[L]) -> CardRecord {
    CardRecord::decode(detail, transaction_logs)
}

/// Decode a card record, rejecting incomplete or inconsistent input.
///
/// Succeeds only if the detail response is complete, exactly as many log
/// buffers are supplied as the card declares, and each holds a full entry.
/// Unused slots are still left out of the history.
pub fn decode_card_record_strict<L: AsRef<[u8]>>(
    detail: &[u8],
    transaction_logs: &[L],
) -> Result<CardRecord, Error> {
    if detail.len() < DETAIL_LEN {
        Err(Error::TruncatedDetail { len: detail.len() })?;
    }

    let declared = detail[HISTORY_RECORD_COUNT];
    if usize::from(declared) != transaction_logs.len() {
        Err(Error::HistoryCountMismatch {
            declared,
            supplied: transaction_logs.len(),
        })?;
    }

    for (index, log) in transaction_logs.iter().enumerate() {
        let len = log.as_ref().len();
        if len < LOG_ENTRY_LEN {
            Err(Error::TruncatedLog { index, len })?;
        }
    }

    Ok(CardRecord::decode(detail, transaction_logs))
}
