//! Purse status, autoload configuration and card profile.

use core::fmt;

use tartan_bitfield::bitfield;

use super::{
    amount::{Amount, decode_amount},
    parse_hex,
};

bitfield! {
    struct PurseStatusByte(u8) {
        [0] purse_enabled,
        [1] autoload_enabled,
    }
}

// The top two bits of the profile byte hold the refund status.
bitfield! {
    struct ProfileByte(u8) {
        [0..6] profile: u8,
    }
}

/// Whether the card tops itself up when its balance runs low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoloadStatus {
    /// The purse is not enabled, or the status byte could not be read.
    NotApplicable,
    NotEnabled,
    Enabled,
}

impl fmt::Display for AutoloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotApplicable => "N.A.",
            Self::NotEnabled => "Not Enabled",
            Self::Enabled => "Enabled",
        })
    }
}

/// Whether the purse can be used for payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurseStatus {
    NotEnabled,
    Enabled,
}

impl fmt::Display for PurseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotEnabled => "Not Enabled",
            Self::Enabled => "Enabled",
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AutoloadStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PurseStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a one-byte field.
fn parse_byte(field: &str) -> Option<u8> {
    parse_hex(field).and_then(|b| u8::try_from(b).ok())
}

/// Decode the autoload status from the purse status byte.
///
/// Autoload applies only to an enabled purse (bit 0), and is enabled by
/// bit 1.
pub fn decode_autoload_status(field: &str) -> AutoloadStatus {
    let Some(status) = parse_byte(field).map(PurseStatusByte) else {
        return AutoloadStatus::NotApplicable;
    };

    match (status.purse_enabled(), status.autoload_enabled()) {
        (false, _) => AutoloadStatus::NotApplicable,
        (true, false) => AutoloadStatus::NotEnabled,
        (true, true) => AutoloadStatus::Enabled,
    }
}

/// Decode the purse status from bit 0 of the purse status byte.
///
/// Returns `None` if the byte could not be read.
pub fn decode_purse_status(field: &str) -> Option<PurseStatus> {
    let status = PurseStatusByte(parse_byte(field)?);

    Some(if status.purse_enabled() {
        PurseStatus::Enabled
    } else {
        PurseStatus::NotEnabled
    })
}

/// Decode the autoload amount, which applies only when autoload is enabled.
pub fn decode_autoload_amount(status_field: &str, amount_field: &str) -> Amount {
    match decode_autoload_status(status_field) {
        AutoloadStatus::Enabled => decode_amount(amount_field, ""),
        AutoloadStatus::NotApplicable | AutoloadStatus::NotEnabled => Amount::NotApplicable,
    }
}

/// Decode the card profile, a number from 0 to 63, from the profile byte.
pub fn decode_card_profile(field: &str) -> Option<u8> {
    parse_byte(field).map(|b| ProfileByte(b).profile())
}
