#![no_std]

//! A decoder for the purse and transaction log records of CEPAS stored-value
//! transit cards.
//!
//! Cepas turns the raw response bodies a tag reader collects from a card into
//! a [`CardRecord`]: the card account number, purse balance, expiry date,
//! autoload configuration and a transaction history. It performs no tag
//! communication itself.
//!
//! Most users need only [`decode_card_record`]. The fixed-offset field
//! decoders it is built from are exposed in the [`field`] module for
//! applications that read individual fields, and the layout of the card's
//! responses is described in [`record::layout`].
//!
//! ```
//! let record = cepas::decode_card_record(&detail, &logs);
//! println!("{} {}", record.formatted_can(), record.purse_balance);
//! ```
//!
//! Decoding never fails. Fields that cannot be read decode to a
//! not-applicable or empty value, and unusable log entries are left out of
//! the history. See [`record::decode_card_record_strict`] for a variant that
//! rejects inconsistent input instead.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `serde`: implement `Serialize` for decoded records (default).
//! - `std`: enable expiry checks against the system clock (default).

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod apdu;
pub mod field;
pub mod record;

#[cfg(feature = "serde")]
mod ser;

pub use field::amount::Amount;
pub use record::{
    card::{BalanceStatus, CardRecord, CardStatus},
    decode_card_record,
    transaction::TransactionRecord,
};
