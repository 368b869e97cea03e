//! Serialisable construction recipe for a [`BoundedDeque`](crate::BoundedDeque).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::policy::OverflowPolicy;

/// Capacity and overflow policy, the two values fixed at construction.
///
/// ```rust
/// use bounded_deque::{BoundedDeque, DequeConfig, OverflowPolicy};
///
/// let config = DequeConfig::new(8).policy(OverflowPolicy::RaiseOnFull);
/// let deque: BoundedDeque<u32> = BoundedDeque::from_config(&config).unwrap();
/// assert_eq!(deque.capacity(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DequeConfig {
    pub capacity: usize,
    pub policy: OverflowPolicy,
}

impl DequeConfig {
    pub const DEFAULT_CAPACITY: usize = 16;

    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: OverflowPolicy::default(),
        }
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the policy from a host-style flag word (bit 0 = raise on full).
    pub fn flags(mut self, flags: u32) -> Self {
        self.policy = OverflowPolicy::from_flags(flags);
        self
    }
}

impl Default for DequeConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DequeConfig::default().capacity(3).flags(1);
        assert_eq!(config.capacity, 3);
        assert_eq!(config.policy, OverflowPolicy::RaiseOnFull);

        let config = config.policy(OverflowPolicy::EvictOldest);
        assert_eq!(config.policy, OverflowPolicy::EvictOldest);
    }

    #[test]
    fn test_config_default() {
        let config = DequeConfig::default();
        assert_eq!(config.capacity, DequeConfig::DEFAULT_CAPACITY);
        assert_eq!(config.policy, OverflowPolicy::EvictOldest);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde_round_trip() {
        let config = DequeConfig::new(5).policy(OverflowPolicy::RaiseOnFull);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"capacity":5,"policy":"raise_on_full"}"#);
        let back: DequeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let partial: DequeConfig = serde_json::from_str(r#"{"capacity":2}"#).unwrap();
        assert_eq!(partial.policy, OverflowPolicy::EvictOldest);
    }
}
