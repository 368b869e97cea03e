//! # Bounded Deque
//!
//! A fixed-capacity double-ended queue backed by a ring buffer.  Push and pop at
//! both ends are O(1), as are indexing and length queries.
//!
//! ## Key Features
//!
//! * **No length counter:** a deque of capacity `C` keeps `C + 1` slots, so
//!   `head == tail` always means empty and the length is derived from the two
//!   cursors.  There is no second source of truth to drift.
//! * **Overflow policy:** [`OverflowPolicy::EvictOldest`] (default) turns the deque
//!   into a sliding window; [`OverflowPolicy::RaiseOnFull`] makes a full append fail
//!   with [`DequeError::Full`] and leaves the deque untouched.
//! * **Prompt release:** vacated slots are reset immediately, so evicted and
//!   popped values are moved out at the call that removed them.
//! * **Live cursors:** a [`Cursor`] holds only a slot index, so the deque can be
//!   mutated between steps of an iteration.
//! * **Storage choice:** heap slots by default, or inline `heapless` slots via
//!   [`InlineDeque`] (`inline` feature).
//!
//! ## Overflow asymmetry
//!
//! With `EvictOldest`, a full append evicts from the end *opposite* the one being
//! grown: `push_back` evicts the front, `push_front` evicts the back.
//!
//! ```rust
//! use bounded_deque::BoundedDeque;
//!
//! let mut d: BoundedDeque<i32> = BoundedDeque::new(3);
//! d.extend([1, 2, 3, 4]);
//! assert_eq!(d.to_string(), "deque([2, 3, 4], maxlen=3)");
//!
//! d.push_front(0).unwrap();
//! assert_eq!(d.to_string(), "deque([0, 2, 3], maxlen=3)");
//! ```
//!
//! ## Bounded queue mode
//!
//! ```rust
//! use bounded_deque::{BoundedDeque, DequeError, FLAG_CHECK_OVERFLOW};
//!
//! let mut q: BoundedDeque<i32> = BoundedDeque::from_source([1, 2], 2, FLAG_CHECK_OVERFLOW).unwrap();
//! assert_eq!(q.push_back(3), Err(DequeError::Full));
//! assert_eq!(q.pop_front(), Ok(1));
//! assert_eq!(q.pop_front(), Ok(2));
//! assert_eq!(q.pop_front(), Err(DequeError::Empty));
//! ```
//!
//! ## Cargo features
//!
//! * `inline` (default): [`InlineDeque`], slots stored in a `heapless::Vec`.
//! * `serde`: `Serialize`/`Deserialize` for [`OverflowPolicy`] and [`DequeConfig`].

// --- Module Declarations ---

pub mod config;
pub mod deque;
pub mod error;
pub mod iter;
pub mod policy;
pub mod storage;
pub mod subscript;

// --- Re-exports ---

pub use config::DequeConfig;
pub use deque::{AnyDeque, BoundedDeque};
pub use error::{DequeError, DequeResult};
pub use iter::{Cursor, IntoIter, Iter};
pub use policy::{FLAG_CHECK_OVERFLOW, OverflowPolicy};
pub use storage::SlotStorage;
pub use subscript::{SubscriptIndex, SubscriptOp};

/// A bounded deque whose `capacity + 1` slots live inline, without allocation.
///
/// `N` is the slot count, so the usable capacity is at most `N - 1`.
///
/// ```rust
/// use bounded_deque::{InlineDeque, OverflowPolicy};
///
/// let mut d = InlineDeque::<u8, 5>::try_with_policy(4, OverflowPolicy::EvictOldest).unwrap();
/// d.extend(0..10);
/// assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![6, 7, 8, 9]);
/// ```
#[cfg(feature = "inline")]
pub type InlineDeque<T, const N: usize> = BoundedDeque<T, heapless::Vec<Option<T>, N>>;
