//! Hex encoding and fixed-offset field slicing.

use alloc::{string::String, vec::Vec};
use core::ops::Range;

/// Encode bytes as uppercase hex, two digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    ::hex::encode_upper(bytes)
}

/// Decode a run of hex digits (of either case) into bytes.
pub fn from_hex(digits: &str) -> Result<Vec<u8>, ::hex::FromHexError> {
    ::hex::decode(digits)
}

/// Slice the hex digits of a byte range out of a hex-encoded response.
///
/// The range is given in bytes and converted to digit positions. A range
/// running past the end of `hex` is cut short, and one starting past the end
/// yields an empty field, so truncated responses decode to sentinels instead
/// of panicking.
pub fn field(hex: &str, bytes: Range<usize>) -> &str {
    let end = (bytes.end * 2).min(hex.len());
    let start = (bytes.start * 2).min(end);

    hex.get(start..end).unwrap_or_default()
}
