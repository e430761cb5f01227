//! Active-strategy binding and delegation

use crate::error::Result;
use crate::strategy::{CipherStrategy, StrategyKind};

/// Holds the currently selected cipher strategy and delegates to it.
///
/// At most one strategy is bound at a time. While no strategy is bound,
/// [`CipherSelector::encrypt`] and [`CipherSelector::decrypt`] return the
/// input unchanged rather than failing; callers that need a hard failure on
/// a missing strategy should go through [`crate::FileCryptor`], which does
/// fail. This passthrough default is part of the documented contract, even
/// though an error would arguably be the safer choice.
///
/// A selector is single-owner state: it is not meant to be shared across
/// threads for concurrent re-selection. Callers that reuse one selector from
/// multiple threads must synchronize externally.
#[derive(Default)]
pub struct CipherSelector {
    strategy: Option<Box<dyn CipherStrategy>>,
}

impl CipherSelector {
    /// Create a selector with no strategy bound
    pub fn new() -> Self {
        Self { strategy: None }
    }

    /// Build and bind the strategy for `kind`, replacing any current binding
    pub fn select(&mut self, kind: StrategyKind) {
        self.strategy = Some(kind.build());
    }

    /// Replace the binding with `strategy` if it is `Some`.
    ///
    /// Passing `None` leaves the current binding unchanged; a selector is
    /// never cleared back to the unbound state once a strategy has been set.
    pub fn set_strategy(&mut self, strategy: Option<Box<dyn CipherStrategy>>) {
        if let Some(strategy) = strategy {
            self.strategy = Some(strategy);
        }
    }

    /// Whether a strategy is currently bound
    pub fn is_bound(&self) -> bool {
        self.strategy.is_some()
    }

    /// Name of the bound strategy, if any
    pub fn active_name(&self) -> Option<&'static str> {
        self.strategy.as_deref().map(|strategy| strategy.name())
    }

    /// Encrypt with the bound strategy, or return the input unchanged if
    /// none is bound
    pub fn encrypt(&self, text: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        match &self.strategy {
            Some(strategy) => strategy.encrypt(text, key),
            None => Ok(text.to_vec()),
        }
    }

    /// Decrypt with the bound strategy, or return the input unchanged if
    /// none is bound
    pub fn decrypt(&self, text: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        match &self.strategy {
            Some(strategy) => strategy.decrypt(text, key),
            None => Ok(text.to_vec()),
        }
    }
}

impl std::fmt::Debug for CipherSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherSelector")
            .field("strategy", &self.active_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::XorStrategy;

    #[test]
    fn test_unbound_passthrough() {
        let selector = CipherSelector::new();
        assert!(!selector.is_bound());
        assert_eq!(selector.encrypt(b"abc", b"4").unwrap(), b"abc");
        assert_eq!(selector.decrypt(b"abc", b"4").unwrap(), b"abc");
    }

    #[test]
    fn test_select_binds_and_delegates() {
        let mut selector = CipherSelector::new();
        selector.select(StrategyKind::Xor);

        assert!(selector.is_bound());
        assert_eq!(selector.active_name(), Some("xor"));
        assert_eq!(selector.encrypt(b"abc", b"4").unwrap(), b"UVW");
        assert_eq!(selector.decrypt(b"UVW", b"4").unwrap(), b"abc");
    }

    #[test]
    fn test_select_replaces_binding() {
        let mut selector = CipherSelector::new();
        selector.select(StrategyKind::Xor);
        selector.select(StrategyKind::Binary);
        assert_eq!(selector.active_name(), Some("binary"));
    }

    #[test]
    fn test_set_strategy_none_keeps_binding() {
        let mut selector = CipherSelector::new();
        selector.set_strategy(Some(Box::new(XorStrategy)));
        selector.set_strategy(None);
        assert_eq!(selector.active_name(), Some("xor"));
    }

    #[test]
    fn test_set_strategy_none_on_unbound_stays_unbound() {
        let mut selector = CipherSelector::new();
        selector.set_strategy(None);
        assert!(!selector.is_bound());
    }

    #[test]
    fn test_bound_strategy_errors_propagate() {
        let mut selector = CipherSelector::new();
        selector.select(StrategyKind::Caesar);
        assert!(selector.encrypt(b"abc", b"not a number").is_err());
    }
}
