//! Commands and responses exchanged with the card.
//!
//! Cepas does not talk to cards. This module holds only what a tag reader
//! needs to collect buffers for the decoder: the fixed command bytes, and
//! handling of the status word that ends each response.

use alloc::vec::Vec;

use thiserror::Error;
use tracing::debug;

/// Read the purse. The response body is the card detail decoded by
/// [`crate::decode_card_record`].
pub const CARD_DETAIL_COMMAND: [u8; 5] = [0x90, 0x32, 0x03, 0x00, 0x00];

/// Request an eight-byte card random.
pub const GET_CHALLENGE_COMMAND: [u8; 5] = [0x00, 0x84, 0x00, 0x00, 0x08];

/// Status word ending a successful response.
pub const STATUS_SUCCESS: [u8; 2] = [0x90, 0x00];

/// Minimum length of a secure purse response body.
pub const SECURE_PURSE_LEN: usize = 113;

/// Errors building secure purse data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The challenge response held no card random.
    #[error("Challenge response is empty.")]
    EmptyChallenge,
    /// The secure purse response is too short.
    #[error("Secure purse response holds {len} bytes, expected at least 113.")]
    ShortSecurePurse { len: usize },
}

/// Build the command reading the purse under a terminal random.
pub fn read_secure_purse_command(terminal_random: &[u8; 8]) -> Vec<u8> {
    let mut command = Vec::with_capacity(16);

    command.extend_from_slice(&[0x90, 0x32, 0x03, 0x00]);
    command.push(0x0A); // Command data length.
    command.extend_from_slice(&[0x14, 0x03]);
    command.extend_from_slice(terminal_random);
    command.push(SECURE_PURSE_LEN as u8); // Expected response length.

    command
}

/// Remove a trailing success status word from a response, if present.
pub fn strip_status_word(response: &[u8]) -> &[u8] {
    if response.len() < STATUS_SUCCESS.len() {
        debug!(len = response.len(), "response too short to hold a status word");
    }

    response.strip_suffix(&STATUS_SUCCESS).unwrap_or(response)
}

/// Purse data read under a challenge, for verification by the issuer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SecurePurseData {
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::ser::hex"))]
    pub card_random: Vec<u8>,
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::ser::hex"))]
    pub terminal_random: [u8; 8],
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::ser::hex"))]
    pub purse_data: Vec<u8>,
}

impl SecurePurseData {
    /// Combine the responses to the challenge and secure purse commands.
    ///
    /// Status words are stripped from both responses before checking them.
    pub fn from_response(
        challenge: &[u8],
        terminal_random: [u8; 8],
        response: &[u8],
    ) -> Result<Self, Error> {
        let card_random = strip_status_word(challenge);
        if card_random.is_empty() {
            Err(Error::EmptyChallenge)?;
        }

        let purse_data = strip_status_word(response);
        if purse_data.len() < SECURE_PURSE_LEN {
            Err(Error::ShortSecurePurse {
                len: purse_data.len(),
            })?;
        }

        Ok(Self {
            card_random: card_random.to_vec(),
            terminal_random,
            purse_data: purse_data.to_vec(),
        })
    }
}
