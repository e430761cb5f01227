//! Binary encoding strategy
//!
//! Encodes each input byte as its 8-character MSB-first binary representation
//! in ASCII ('0'/'1'), concatenated without separators. The key is ignored.
//! Decoding is strict: the input length must be a multiple of 8 and every
//! byte must be '0' or '1'.

use super::CipherStrategy;
use crate::error::{Error, Result};

/// Bits emitted per input byte
const BITS_PER_BYTE: usize = 8;

/// Cipher strategy encoding bytes as binary text
#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryStrategy;

impl CipherStrategy for BinaryStrategy {
    fn encrypt(&self, text: &[u8], _key: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(text.len() * BITS_PER_BYTE);

        for &byte in text {
            for bit in (0..BITS_PER_BYTE).rev() {
                output.push(if (byte >> bit) & 1 == 1 { b'1' } else { b'0' });
            }
        }

        Ok(output)
    }

    fn decrypt(&self, text: &[u8], _key: &[u8]) -> Result<Vec<u8>> {
        if text.len() % BITS_PER_BYTE != 0 {
            return Err(Error::MalformedInput(format!(
                "length {} is not a multiple of {BITS_PER_BYTE}",
                text.len()
            )));
        }

        let mut output = Vec::with_capacity(text.len() / BITS_PER_BYTE);

        for chunk in text.chunks_exact(BITS_PER_BYTE) {
            let mut byte = 0u8;
            for &ch in chunk {
                // Not u8::from_str_radix: that would also accept a leading '+'.
                byte = (byte << 1)
                    | match ch {
                        b'0' => 0,
                        b'1' => 1,
                        other => {
                            return Err(Error::MalformedInput(format!(
                                "expected '0' or '1', got {:?}",
                                other as char
                            )))
                        }
                    };
            }
            output.push(byte);
        }

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "binary"
    }
}
