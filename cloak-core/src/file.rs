//! File transform driver
//!
//! Reads an entire source file into memory, applies the selected strategy,
//! and writes the result to a destination file. There is no streaming: memory
//! use is proportional to the file size, which is fine for the small text
//! files this targets but is a known scalability limit. Writes truncate an
//! existing destination and are not atomic; a failure mid-write can leave the
//! destination incomplete.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::selector::CipherSelector;
use crate::strategy::{CipherStrategy, StrategyKind};

/// Whole-file encrypt/decrypt driver over a [`CipherSelector`].
///
/// Unlike the selector's in-memory calls, the file operations fail with
/// [`Error::NoStrategySelected`] when no strategy is bound: silently copying
/// a file while claiming to encrypt it would be worse than the in-memory
/// passthrough. The check runs before any I/O, so a failed call writes
/// nothing.
#[derive(Debug, Default)]
pub struct FileCryptor {
    selector: CipherSelector,
}

impl FileCryptor {
    /// Create a driver with no strategy selected
    pub fn new() -> Self {
        Self {
            selector: CipherSelector::new(),
        }
    }

    /// Create a driver with the strategy for `kind` already selected
    pub fn with_strategy(kind: StrategyKind) -> Self {
        let mut cryptor = Self::new();
        cryptor.select(kind);
        cryptor
    }

    /// Build and bind the strategy for `kind`
    pub fn select(&mut self, kind: StrategyKind) {
        self.selector.select(kind);
    }

    /// Replace the binding if `strategy` is `Some`; `None` keeps the current one
    pub fn set_strategy(&mut self, strategy: Option<Box<dyn CipherStrategy>>) {
        self.selector.set_strategy(strategy);
    }

    /// The underlying selector
    pub fn selector(&self) -> &CipherSelector {
        &self.selector
    }

    /// Encrypt the file at `src` and write the ciphertext to `dst`,
    /// creating or truncating it
    pub fn encrypt_file(&self, src: &Path, dst: &Path, key: &[u8]) -> Result<()> {
        self.transform_file(src, dst, key, true)
    }

    /// Decrypt the file at `src` and write the plaintext to `dst`,
    /// creating or truncating it
    pub fn decrypt_file(&self, src: &Path, dst: &Path, key: &[u8]) -> Result<()> {
        self.transform_file(src, dst, key, false)
    }

    fn transform_file(&self, src: &Path, dst: &Path, key: &[u8], encrypt: bool) -> Result<()> {
        if !self.selector.is_bound() {
            return Err(Error::NoStrategySelected);
        }

        let content = fs::read(src).map_err(|source| Error::Io {
            action: "read",
            path: src.to_path_buf(),
            source,
        })?;

        let transformed = if encrypt {
            self.selector.encrypt(&content, key)?
        } else {
            self.selector.decrypt(&content, key)?
        };

        fs::write(dst, transformed).map_err(|source| Error::Io {
            action: "write",
            path: dst.to_path_buf(),
            source,
        })
    }
}
