//! Currency amounts.

use core::fmt;

use rust_decimal::Decimal;

use super::parse_hex;

/// Type codes whose transactions carry no meaningful amount.
///
/// Matched as prefixes of the transaction's own type code: `F0`
/// (miscellaneous), `83` (autoload disable) and `11` (purse disable).
pub const AMOUNT_EXCLUDED_TYPES: [&str; 3] = ["F0", "83", "11"];

/// Largest value of a three-byte amount field.
const FIELD_MAX: u32 = 0xFF_FFFF;

/// A currency amount in cents, as stored on the card.
///
/// The card stores amounts as three-byte fields whose leading nibble selects
/// the sign. [`Amount::Credit`] and [`Amount::Debit`] both hold the unsigned
/// magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Amount {
    /// No amount applies, or the field could not be read.
    NotApplicable,
    /// A non-negative amount.
    Credit(u32),
    /// A negative amount.
    Debit(u32),
}

impl Amount {
    /// The zero amount, displayed as `$0.00`.
    pub const ZERO: Self = Self::Credit(0);

    /// The unsigned magnitude in cents, or zero if not applicable.
    pub fn cents(self) -> u32 {
        match self {
            Self::NotApplicable => 0,
            Self::Credit(cents) | Self::Debit(cents) => cents,
        }
    }

    /// The signed value in cents, if applicable.
    pub fn signed_cents(self) -> Option<i64> {
        match self {
            Self::NotApplicable => None,
            Self::Credit(cents) => Some(i64::from(cents)),
            Self::Debit(cents) => Some(-i64::from(cents)),
        }
    }

    /// The signed value in currency units with two decimal places, if
    /// applicable.
    pub fn to_decimal(self) -> Option<Decimal> {
        self.signed_cents().map(|cents| Decimal::new(cents, 2))
    }

    pub fn is_applicable(self) -> bool {
        self != Self::NotApplicable
    }
}

impl fmt::Display for Amount {
    /// Format as grouped dollars and cents (`$1,234.56`, `-$0.50`), or `N.A.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NotApplicable => f.write_str("N.A."),
            Self::Credit(cents) => write_currency(f, cents),
            Self::Debit(cents) => {
                f.write_str("-")?;
                write_currency(f, cents)
            }
        }
    }
}

fn write_currency(f: &mut fmt::Formatter<'_>, cents: u32) -> fmt::Result {
    f.write_str("$")?;
    write_grouped(f, cents / 100)?;
    write!(f, ".{:02}", cents % 100)
}

fn write_grouped(f: &mut fmt::Formatter<'_>, n: u32) -> fmt::Result {
    if n >= 1000 {
        write_grouped(f, n / 1000)?;
        write!(f, ",{:03}", n % 1000)
    } else {
        write!(f, "{n}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Decode a three-byte amount field.
///
/// Returns [`Amount::NotApplicable`] if `type_code` begins with one of
/// [`AMOUNT_EXCLUDED_TYPES`]. Pass an empty `type_code` for fields that do not
/// belong to a transaction.
///
/// A field whose first hex digit is `0` holds a positive amount, read as an
/// unsigned integer. Any other field holds a negative amount with magnitude
/// `0xFFFFFF - value + 1`. This is not two's complement over the field: a
/// field such as `0FFFFF` is a large credit, not a debit.
pub fn decode_amount(field: &str, type_code: &str) -> Amount {
    if AMOUNT_EXCLUDED_TYPES
        .iter()
        .any(|excluded| type_code.starts_with(excluded))
    {
        return Amount::NotApplicable;
    }

    if field.starts_with('0') {
        // Keep a single digit so an all-zero field still parses.
        let digits = field.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };

        match parse_hex(digits) {
            Some(cents) => Amount::Credit(cents),
            None => Amount::NotApplicable,
        }
    } else {
        match parse_hex(field).filter(|&value| value <= FIELD_MAX) {
            Some(value) => Amount::Debit(FIELD_MAX - value + 1),
            None => Amount::NotApplicable,
        }
    }
}

/// Decode a three-byte amount field as an unsigned count of cents.
///
/// Follows the same rules as [`decode_amount`], returning the magnitude of
/// the amount, or zero where that function returns
/// [`Amount::NotApplicable`].
pub fn decode_amount_as_integer(field: &str, type_code: &str) -> u32 {
    decode_amount(field, type_code).cents()
}
