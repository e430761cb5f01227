//! Caesar (shift) cipher strategy
//!
//! Adds a key-derived constant to every byte. The key is a decimal string;
//! the parsed value is reduced modulo [`SHIFT_MODULUS`] and then applied with
//! 8-bit wraparound arithmetic. Encrypt-then-decrypt with the same key is
//! exact for every input, because adding and subtracting the same residue
//! under wrapping u8 arithmetic are inverses.

use super::CipherStrategy;
use crate::error::{Error, Result};

/// Modulus applied to the parsed shift amount.
///
/// Deliberately 255 rather than 256: existing ciphertext was produced with
/// this constant, and changing it would alter output for shifts >= 255.
pub const SHIFT_MODULUS: u64 = 255;

/// Cipher strategy shifting each byte by `key % 255` with wraparound
#[derive(Debug, Default, Clone, Copy)]
pub struct CaesarStrategy;

impl CaesarStrategy {
    /// Parse the key as a base-10 non-negative integer and reduce it to the
    /// effective per-byte shift.
    fn parse_shift(&self, key: &[u8]) -> Result<u8> {
        let key = std::str::from_utf8(key)
            .map_err(|_| Error::InvalidKey("shift key is not valid UTF-8".to_string()))?;

        let shift: u64 = key.parse().map_err(|_| {
            Error::InvalidKey(format!("expected a non-negative integer, got {key:?}"))
        })?;

        Ok((shift % SHIFT_MODULUS) as u8)
    }
}

impl CipherStrategy for CaesarStrategy {
    fn encrypt(&self, text: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let shift = self.parse_shift(key)?;
        Ok(text.iter().map(|&byte| byte.wrapping_add(shift)).collect())
    }

    fn decrypt(&self, text: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let shift = self.parse_shift(key)?;
        Ok(text.iter().map(|&byte| byte.wrapping_sub(shift)).collect())
    }

    fn name(&self) -> &'static str {
        "caesar"
    }
}
