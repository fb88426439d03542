//! Pure decoders for the fixed-offset fields of card responses.
//!
//! Every decoder takes a field as a run of uppercase hex digits, two per
//! byte, exactly as sliced out of a hex-encoded response by
//! [`hex::field`]. Decoders are total: a field that is empty, truncated or
//! not valid hex decodes to a defined sentinel (a not-applicable amount or
//! status, or `None` for dates and numbers) rather than an error.
//!
//! The decoders carry the card family's conventions and are easy to get
//! subtly wrong:
//!
//! - Amounts are signed by their leading nibble, not by two's complement over
//! the whole field. See [`amount::decode_amount`].
//!
//! - Dates count days from 1995-01-01, and transaction timestamps count
//! seconds from the same epoch, shifted back by eight hours. See the [`date`]
//! module.
//!
//! - Transaction types match on the last two hex digits of the type code,
//! while amount exclusions match on the first two. For the single-byte codes
//! found on cards these are the same, but the decoders keep the distinction.

pub mod amount;
pub mod date;
pub mod hex;
pub mod status;
pub mod transaction;

/// Parse a run of hex digits as an unsigned integer.
///
/// Unlike `u32::from_str_radix`, this rejects empty input and a leading sign.
pub(crate) fn parse_hex(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(field, 16).ok()
}
