//! Fixed-capacity double-ended ring buffer with an evict-or-fail overflow policy.
//!
//! # Layout
//! A deque of capacity `C` owns `C + 1` slots.  `head` is the physical index of
//! the oldest element and `tail` the physical index of the next free slot.  The
//! spare slot is what keeps the two states apart without a length counter:
//!
//! * empty ⇔ `head == tail`
//! * full  ⇔ `wrap_add(tail, 1) == head`
//! * `len  = (tail - head) mod (C + 1)`
//!
//! Slots inside the live range `[head, tail)` hold `Some`; every other slot is
//! `None`.  Removing an element always `take()`s its slot, so a popped or evicted
//! value is moved out (and dropped, if the caller ignores it) at the call that
//! removed it.
//!
//! # Overflow
//! | Policy | `push_back` when full | `push_front` when full |
//! |--------|-----------------------|------------------------|
//! | `EvictOldest` | evicts the front | evicts the back |
//! | `RaiseOnFull` | `Err(Full)`, unchanged | `Err(Full)`, unchanged |

use core::fmt;
use core::marker::PhantomData;
use core::ops::Index;
use std::collections::VecDeque;

use log::{debug, trace, warn};

use crate::config::DequeConfig;
use crate::error::{DequeError, DequeResult};
use crate::iter::{Cursor, IntoIter, Iter};
use crate::policy::OverflowPolicy;
use crate::storage::SlotStorage;

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended queue types.
///
/// Implemented by both `VecDeque<T>` (unbounded, never full) and
/// `BoundedDeque<T, S>` so that code can drive a deque without knowing whether
/// it is bounded.
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Maximum number of elements, or `None` when unbounded.
    fn max_len(&self) -> Option<usize>;
    /// Appends an element to the back, returning any element evicted to make room.
    fn push_back(&mut self, item: T) -> DequeResult<Option<T>>;
    /// Prepends an element to the front, returning any element evicted to make room.
    fn push_front(&mut self, item: T) -> DequeResult<Option<T>>;
    /// Removes and returns the element from the back.
    fn pop_back(&mut self) -> DequeResult<T>;
    /// Removes and returns the element from the front.
    fn pop_front(&mut self) -> DequeResult<T>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Returns a shared reference to the element at logical `index`, or `None`.
    fn get(&self, index: usize) -> Option<&T>;
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T>;
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T>;
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn max_len(&self) -> Option<usize> {
        None
    }
    fn push_back(&mut self, item: T) -> DequeResult<Option<T>> {
        self.push_back(item);
        Ok(None)
    }
    fn push_front(&mut self, item: T) -> DequeResult<Option<T>> {
        self.push_front(item);
        Ok(None)
    }
    fn pop_back(&mut self) -> DequeResult<T> {
        self.pop_back().ok_or(DequeError::Empty)
    }
    fn pop_front(&mut self) -> DequeResult<T> {
        self.pop_front().ok_or(DequeError::Empty)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

// ─── BoundedDeque ─────────────────────────────────────────────────────────────

/// A double-ended queue holding at most `capacity` elements in a ring buffer.
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|--------|
/// | `T` | Element type |
/// | `S` | Slot storage; `Box<[Option<T>]>` by default, see [`crate::storage`] |
///
/// # Examples
/// ```rust
/// use bounded_deque::BoundedDeque;
///
/// let mut window: BoundedDeque<i32> = BoundedDeque::new(3);
/// for i in 1..=4 {
///     window.push_back(i).unwrap();
/// }
/// assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
///
/// // A full left-append evicts from the right.
/// assert_eq!(window.push_front(0).unwrap(), Some(4));
/// assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![0, 2, 3]);
/// ```
#[derive(Clone)]
pub struct BoundedDeque<T, S = Box<[Option<T>]>> {
    pub(crate) head: usize,
    pub(crate) tail: usize,
    policy: OverflowPolicy,
    pub(crate) slots: S,
    _marker: PhantomData<T>,
}

impl<T> BoundedDeque<T> {
    /// Creates an empty heap-backed deque that evicts on overflow.
    ///
    /// # Panics
    /// Panics if `capacity + 1` slots cannot be allocated.
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, OverflowPolicy::EvictOldest)
    }

    /// Creates an empty heap-backed deque with the given overflow policy.
    ///
    /// # Panics
    /// Panics if `capacity + 1` slots cannot be allocated.
    pub fn with_policy(capacity: usize, policy: OverflowPolicy) -> Self {
        match Self::try_with_policy(capacity, policy) {
            Ok(deque) => deque,
            Err(e) => panic!("BoundedDeque: {e}"),
        }
    }
}

impl<T, S: SlotStorage<T>> BoundedDeque<T, S> {
    /// Creates an empty deque, reporting allocation problems instead of panicking.
    pub fn try_with_policy(capacity: usize, policy: OverflowPolicy) -> DequeResult<Self> {
        let len = capacity.checked_add(1).ok_or_else(|| {
            DequeError::InvalidArgument(format!("capacity {capacity} is too large"))
        })?;
        let slots = S::allocate(len)?;
        let got = slots.slots();
        if got.len() != len || got.iter().any(Option::is_some) {
            return Err(DequeError::InvalidArgument(format!(
                "storage returned {} slots ({} occupied), {len} vacant slots requested",
                got.len(),
                got.iter().filter(|slot| slot.is_some()).count()
            )));
        }
        debug!("created bounded deque: capacity={capacity}, policy={policy:?}");
        Ok(Self {
            head: 0,
            tail: 0,
            policy,
            slots,
            _marker: PhantomData,
        })
    }

    pub fn from_config(config: &DequeConfig) -> DequeResult<Self> {
        Self::try_with_policy(config.capacity, config.policy)
    }

    /// Host-style construction: `(source, capacity, flags)`.
    ///
    /// A negative `capacity` is rejected with `InvalidArgument`.  Bit 0 of `flags`
    /// selects [`OverflowPolicy::RaiseOnFull`].  The deque is then filled from
    /// `source` with [`try_extend`](Self::try_extend), so an over-long source is
    /// truncated to its last `capacity` elements, or fails with `Full` when
    /// raising.
    pub fn from_source<I>(source: I, capacity: isize, flags: u32) -> DequeResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let capacity = usize::try_from(capacity).map_err(|_| {
            DequeError::InvalidArgument(format!("capacity must be non-negative, got {capacity}"))
        })?;
        let mut deque = Self::try_with_policy(capacity, OverflowPolicy::from_flags(flags))?;
        deque.try_extend(source)?;
        Ok(deque)
    }

    /// Number of physical slots (`capacity + 1`).
    #[inline(always)]
    fn modulus(&self) -> usize {
        self.slots.slots().len()
    }

    #[inline(always)]
    pub(crate) fn wrap_add(&self, idx: usize, add: usize) -> usize {
        (idx + add) % self.modulus()
    }

    #[inline(always)]
    pub(crate) fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        (idx + self.modulus() - sub) % self.modulus()
    }

    /// Reads a slot known to be inside the live range.
    #[inline(always)]
    pub(crate) fn live(&self, phys: usize) -> &T {
        match &self.slots.slots()[phys] {
            Some(item) => item,
            None => unreachable!("Logic Error: live slot {phys} is vacant"),
        }
    }

    /// Maximum number of elements the deque holds.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.modulus() - 1
    }

    #[inline(always)]
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Returns the number of elements currently in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.wrap_sub(self.tail, self.head)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns `true` when the next append must evict or fail.
    ///
    /// Always `true` for a zero-capacity deque.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.wrap_add(self.tail, 1) == self.head
    }

    /// Appends `item` to the back.
    ///
    /// When full, `EvictOldest` first removes the front element and returns it as
    /// `Ok(Some(evicted))`; `RaiseOnFull` returns `Err(Full)` and drops `item`.
    /// A zero-capacity deque under `EvictOldest` hands `item` straight back.
    pub fn push_back(&mut self, item: T) -> DequeResult<Option<T>> {
        let mut evicted = None;
        if self.is_full() {
            if !self.policy.evicts() {
                return Err(DequeError::Full);
            }
            if self.capacity() == 0 {
                return Ok(Some(item));
            }
            let head = self.head;
            evicted = self.slots.slots_mut()[head].take();
            self.head = self.wrap_add(head, 1);
            trace!("push_back evicted front slot {head}");
        }
        let tail = self.tail;
        self.slots.slots_mut()[tail] = Some(item);
        self.tail = self.wrap_add(tail, 1);
        Ok(evicted)
    }

    /// Prepends `item` to the front.
    ///
    /// When full, `EvictOldest` first removes the **back** element (the newest
    /// one, not the oldest) and returns it; `RaiseOnFull` returns `Err(Full)`.
    pub fn push_front(&mut self, item: T) -> DequeResult<Option<T>> {
        let mut evicted = None;
        if self.is_full() {
            if !self.policy.evicts() {
                return Err(DequeError::Full);
            }
            if self.capacity() == 0 {
                return Ok(Some(item));
            }
            let tail = self.wrap_sub(self.tail, 1);
            evicted = self.slots.slots_mut()[tail].take();
            self.tail = tail;
            trace!("push_front evicted back slot {tail}");
        }
        let head = self.wrap_sub(self.head, 1);
        self.slots.slots_mut()[head] = Some(item);
        self.head = head;
        Ok(evicted)
    }

    /// Removes and returns the back element.
    pub fn pop_back(&mut self) -> DequeResult<T> {
        if self.is_empty() {
            return Err(DequeError::Empty);
        }
        let tail = self.wrap_sub(self.tail, 1);
        match self.slots.slots_mut()[tail].take() {
            Some(item) => {
                self.tail = tail;
                Ok(item)
            }
            None => unreachable!("Logic Error: back slot {tail} is vacant"),
        }
    }

    /// Removes and returns the front element.
    pub fn pop_front(&mut self) -> DequeResult<T> {
        if self.is_empty() {
            return Err(DequeError::Empty);
        }
        let head = self.head;
        match self.slots.slots_mut()[head].take() {
            Some(item) => {
                self.head = self.wrap_add(head, 1);
                Ok(item)
            }
            None => unreachable!("Logic Error: front slot {head} is vacant"),
        }
    }

    /// Appends every element of `iter` to the back, pulling one at a time.
    ///
    /// Stops at the first `Full` error; elements appended before it stay.
    pub fn try_extend<I>(&mut self, iter: I) -> DequeResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            self.push_back(item)?;
        }
        Ok(())
    }

    /// Drops every element and rewinds both cursors to slot 0.
    pub fn clear(&mut self) {
        for slot in self.slots.slots_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
    }

    /// Returns a shared reference to the element at logical `index`, or `None`.
    ///
    /// Logical index 0 is the front.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            Some(self.live(self.wrap_add(self.head, index)))
        } else {
            None
        }
    }

    /// Like [`get`](Self::get), failing with `IndexOutOfRange` instead of `None`.
    pub fn at(&self, index: usize) -> DequeResult<&T> {
        self.get(index).ok_or_else(|| DequeError::IndexOutOfRange {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len: self.len(),
        })
    }

    /// Signed indexing: `-1` is the back element, `-len` the front.
    pub fn get_signed(&self, index: isize) -> DequeResult<&T> {
        let len = self.len();
        let logical = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        logical
            .and_then(|i| self.get(i))
            .ok_or(DequeError::IndexOutOfRange { index, len })
    }

    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Bytes held by the deque value plus its out-of-line slot array.
    pub fn footprint(&self) -> usize {
        core::mem::size_of::<Self>() + self.slots.heap_bytes()
    }

    /// Returns a borrowing front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.slots.slots(), self.head, self.len())
    }

    /// Returns a detached cursor positioned at the current front.
    ///
    /// Unlike [`iter`](Self::iter) the cursor does not hold a borrow between
    /// steps, so the deque may be mutated while iterating; see [`Cursor`].
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.head, self.tail)
    }
}

impl<T, S: SlotStorage<T>> AnyDeque<T> for BoundedDeque<T, S> {
    fn len(&self) -> usize {
        self.len()
    }
    fn max_len(&self) -> Option<usize> {
        Some(self.capacity())
    }
    fn push_back(&mut self, item: T) -> DequeResult<Option<T>> {
        self.push_back(item)
    }
    fn push_front(&mut self, item: T) -> DequeResult<Option<T>> {
        self.push_front(item)
    }
    fn pop_back(&mut self) -> DequeResult<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> DequeResult<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

impl<T: fmt::Debug, S: SlotStorage<T>> fmt::Debug for BoundedDeque<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `deque([a, b, c], maxlen=N)`.
impl<T: fmt::Display, S: SlotStorage<T>> fmt::Display for BoundedDeque<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("deque([")?;
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "], maxlen={})", self.capacity())
    }
}

impl<T: PartialEq, S: SlotStorage<T>> PartialEq for BoundedDeque<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
impl<T: Eq, S: SlotStorage<T>> Eq for BoundedDeque<T, S> {}

impl<T: PartialOrd, S: SlotStorage<T>> PartialOrd for BoundedDeque<T, S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, S: SlotStorage<T>> Ord for BoundedDeque<T, S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, S: SlotStorage<T>> Index<usize> for BoundedDeque<T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index out of bounds: the len is {} but the index is {index}",
                self.len()
            ),
        }
    }
}

/// Appends each element with [`push_back`](BoundedDeque::push_back).
///
/// Under `RaiseOnFull` extension stops at the first rejected element, which is
/// dropped; the rest of the source is left unconsumed.  Use
/// [`try_extend`](BoundedDeque::try_extend) to observe the error.
impl<T, S: SlotStorage<T>> Extend<T> for BoundedDeque<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(e) = self.try_extend(iter) {
            warn!("extend stopped early: {e} (capacity {})", self.capacity());
        }
    }
}

/// Collects into a deque whose capacity equals the number of collected items.
impl<T> FromIterator<T> for BoundedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let slots: Box<[Option<T>]> = iter
            .into_iter()
            .map(Some)
            .chain(core::iter::once(None))
            .collect();
        let tail = slots.len() - 1;
        Self {
            head: 0,
            tail,
            policy: OverflowPolicy::EvictOldest,
            slots,
            _marker: PhantomData,
        }
    }
}

impl<T, S: SlotStorage<T>> IntoIterator for BoundedDeque<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, S: SlotStorage<T>> IntoIterator for &'a BoundedDeque<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
