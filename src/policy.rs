//! Overflow policy selected once, at construction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bit 0 of the construction flags: fail with `Full` instead of evicting.
pub const FLAG_CHECK_OVERFLOW: u32 = 1;

/// What an append does when the deque is already at capacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverflowPolicy {
    /// Drop one element from the end opposite the one being grown, then append.
    ///
    /// A full `push_back` evicts the front (oldest) element; a full
    /// `push_front` evicts the back (newest) element.
    #[default]
    EvictOldest,
    /// Reject the append with [`DequeError::Full`](crate::DequeError::Full).
    RaiseOnFull,
}

impl OverflowPolicy {
    /// Decodes the host-style flag word. Only bit 0 is significant.
    #[inline]
    pub fn from_flags(flags: u32) -> Self {
        if flags & FLAG_CHECK_OVERFLOW != 0 {
            OverflowPolicy::RaiseOnFull
        } else {
            OverflowPolicy::EvictOldest
        }
    }

    /// Encodes the policy back into a flag word.
    #[inline]
    pub fn flags(self) -> u32 {
        match self {
            OverflowPolicy::EvictOldest => 0,
            OverflowPolicy::RaiseOnFull => FLAG_CHECK_OVERFLOW,
        }
    }

    #[inline]
    pub fn evicts(self) -> bool {
        self == OverflowPolicy::EvictOldest
    }
}
