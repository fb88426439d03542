//! Byte layout of the card's responses.
//!
//! The card detail response is read by hex-encoding it and slicing fields at
//! the fixed byte ranges below (see [`crate::field::hex::field`]). Transaction
//! log entries share a single 16-byte layout, used both for the log buffers
//! and for the last transaction embedded in the detail response.

use core::ops::Range;

use zerocopy::FromBytes;

/// Minimum length of a complete card detail response.
pub const DETAIL_LEN: usize = 67;

/// Length of a transaction log entry.
pub const LOG_ENTRY_LEN: usize = 16;

/// Value of the first detail byte for which the card reports no last
/// transaction.
///
/// This marks one particular card state. It is not a general "empty slot"
/// marker, and other values of the byte are not known to have any meaning.
pub const NO_LAST_TRANSACTION: &str = "03";

pub const CARD_STATE: Range<usize> = 0..1;
/// Bit 0 enables the purse, bit 1 enables autoload.
pub const PURSE_STATUS: Range<usize> = 1..2;
pub const PURSE_BALANCE: Range<usize> = 2..5;
pub const AUTOLOAD_AMOUNT: Range<usize> = 5..8;
/// Card account number.
pub const CAN: Range<usize> = 8..16;
pub const EXPIRY_DATE: Range<usize> = 24..26;
/// Number of entries in the card's transaction log.
pub const HISTORY_RECORD_COUNT: usize = 40;
pub const LAST_TRANSACTION: Range<usize> = 46..62;
pub const CARD_PROFILE: Range<usize> = 66..67;

/// A transaction log entry.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes)]
pub struct TransactionLogEntry {
    pub kind: u8,
    pub amount: [u8; 3],
    /// Seconds since the card epoch, local time.
    pub timestamp: [u8; 4],
    pub user_data: [u8; 8],
}

impl TransactionLogEntry {
    /// Read an entry from the start of a buffer, if it is long enough.
    ///
    /// Bytes past the first [`LOG_ENTRY_LEN`] are ignored.
    pub fn from_prefix(r: &[u8]) -> Option<Self> {
        let r: [u8; LOG_ENTRY_LEN] = r.get(..LOG_ENTRY_LEN)?.try_into().ok()?;

        Some(zerocopy::transmute!(r))
    }

    /// Whether the type and amount are all zero, marking an unused slot.
    pub fn is_empty(&self) -> bool {
        self.kind == 0 && self.amount == [0; 3]
    }
}
