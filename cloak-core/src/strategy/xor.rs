//! XOR cipher strategy
//!
//! Byte-wise XOR against a cyclically repeated key. The operation is its own
//! inverse, so encrypt and decrypt are the same transform. This is an
//! obfuscation tool, not a secure cipher.

use super::CipherStrategy;
use crate::error::Result;

/// Cipher strategy XOR-ing each byte with the key byte at `i % key.len()`
#[derive(Debug, Default, Clone, Copy)]
pub struct XorStrategy;

impl XorStrategy {
    // Shared by encrypt and decrypt; XOR with a repeating key stream is
    // self-inverse.
    fn transform(&self, text: &[u8], key: &[u8]) -> Vec<u8> {
        if key.is_empty() {
            return text.to_vec();
        }

        text.iter()
            .enumerate()
            .map(|(i, &byte)| byte ^ key[i % key.len()])
            .collect()
    }
}

impl CipherStrategy for XorStrategy {
    fn encrypt(&self, text: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        Ok(self.transform(text, key))
    }

    fn decrypt(&self, text: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        Ok(self.transform(text, key))
    }

    fn name(&self) -> &'static str {
        "xor"
    }
}
