//! Core trait and variants for cipher strategies

use crate::error::Result;

mod binary;
mod caesar;
mod xor;

pub use binary::BinaryStrategy;
pub use caesar::{CaesarStrategy, SHIFT_MODULUS};
pub use xor::XorStrategy;

/// Trait for runtime-selectable text transformation strategies
///
/// Strategies are stateless: each call receives the full input and the key,
/// and returns a freshly allocated output. Inputs are raw bytes; no text
/// encoding is assumed or validated.
pub trait CipherStrategy: Send + Sync {
    /// Transform plaintext bytes into ciphertext bytes
    fn encrypt(&self, text: &[u8], key: &[u8]) -> Result<Vec<u8>>;

    /// Invert [`CipherStrategy::encrypt`] for the same key
    fn decrypt(&self, text: &[u8], key: &[u8]) -> Result<Vec<u8>>;

    /// Strategy name for selection listings and diagnostics
    fn name(&self) -> &'static str;
}

/// The available cipher strategy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Byte-wise XOR with a cyclically repeated key
    Xor,
    /// Per-byte additive shift by a key-derived constant
    Caesar,
    /// Each byte encoded as its 8-character binary text representation
    Binary,
}

impl StrategyKind {
    /// Construct a boxed strategy for this variant
    pub fn build(self) -> Box<dyn CipherStrategy> {
        match self {
            StrategyKind::Xor => Box::new(XorStrategy),
            StrategyKind::Caesar => Box::new(CaesarStrategy),
            StrategyKind::Binary => Box::new(BinaryStrategy),
        }
    }

    /// Stable lowercase name of this variant
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Xor => "xor",
            StrategyKind::Caesar => "caesar",
            StrategyKind::Binary => "binary",
        }
    }

    /// All variants, in listing order
    pub fn all() -> &'static [StrategyKind] {
        &[StrategyKind::Xor, StrategyKind::Caesar, StrategyKind::Binary]
    }
}
