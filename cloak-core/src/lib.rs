//! Runtime-selectable text transformation strategies
//!
//! This crate implements pluggable "encryption" strategies applied to
//! in-memory byte sequences or whole files. Three strategies are provided:
//! cyclic-key XOR, a Caesar shift over wrapping byte arithmetic, and a
//! reversible binary text encoding. None of them is cryptographically
//! secure; they are reversible obfuscations with a stable on-disk format.
//!
//! # Architecture
//!
//! - **Strategy layer**: [`CipherStrategy`] trait and the three variants,
//!   selectable at runtime via [`StrategyKind`]
//! - **Selection layer**: [`CipherSelector`] holds the active binding and
//!   delegates to it
//! - **Driver layer**: [`FileCryptor`] applies the active strategy to whole
//!   files
//!
//! # Example
//!
//! ```rust
//! use cloak_core::{CipherSelector, StrategyKind};
//!
//! let mut selector = CipherSelector::new();
//! selector.select(StrategyKind::Xor);
//!
//! let ciphertext = selector.encrypt(b"abc", b"4").unwrap();
//! assert_eq!(ciphertext, b"UVW");
//!
//! let plaintext = selector.decrypt(&ciphertext, b"4").unwrap();
//! assert_eq!(plaintext, b"abc");
//! ```

pub mod error;
pub mod file;
pub mod selector;
pub mod strategy;

pub use error::{Error, Result};
pub use file::FileCryptor;
pub use selector::CipherSelector;
pub use strategy::{
    BinaryStrategy, CaesarStrategy, CipherStrategy, StrategyKind, XorStrategy, SHIFT_MODULUS,
};
