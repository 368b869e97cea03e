//! Iteration over a [`BoundedDeque`].
//!
//! * [`Iter`] borrows the deque for its whole lifetime: a stable front-to-back view.
//! * [`IntoIter`] consumes the deque, popping from either end.
//! * [`Cursor`] holds nothing but a slot index, so the deque can be mutated
//!   between steps and each step observes the current state.

use core::iter::FusedIterator;

use log::trace;

use crate::deque::BoundedDeque;
use crate::storage::SlotStorage;

/// Borrowing iterator, created by [`BoundedDeque::iter`].
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    head: usize,
    // logical range still to yield: [front, back)
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>], head: usize, len: usize) -> Self {
        Self {
            slots,
            head,
            front: 0,
            back: len,
        }
    }

    #[inline(always)]
    fn slot(&self, logical: usize) -> &'a T {
        let phys = (self.head + logical) % self.slots.len();
        match &self.slots[phys] {
            Some(item) => item,
            None => unreachable!("Logic Error: live slot {phys} is vacant"),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            head: self.head,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.slot(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.slot(self.back))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator, created by `BoundedDeque::into_iter`.
pub struct IntoIter<T, S> {
    deque: BoundedDeque<T, S>,
}

impl<T, S: SlotStorage<T>> IntoIter<T, S> {
    pub(crate) fn new(deque: BoundedDeque<T, S>) -> Self {
        Self { deque }
    }
}

impl<T, S: SlotStorage<T>> Iterator for IntoIter<T, S> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.deque.len();
        (n, Some(n))
    }
}

impl<T, S: SlotStorage<T>> DoubleEndedIterator for IntoIter<T, S> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back().ok()
    }
}

impl<T, S: SlotStorage<T>> ExactSizeIterator for IntoIter<T, S> {}
impl<T, S: SlotStorage<T>> FusedIterator for IntoIter<T, S> {}

/// A live, forward-only position in a deque.
///
/// Created at the deque's front by [`BoundedDeque::cursor`].  Each call to
/// [`next`](Cursor::next) compares the cursor against the deque's *current*
/// tail, so elements pushed onto the back after the cursor was created are
/// still reached:
///
/// ```rust
/// use bounded_deque::BoundedDeque;
///
/// let mut d: BoundedDeque<i32> = BoundedDeque::from_source([1, 2, 3], 8, 0).unwrap();
/// let mut cursor = d.cursor();
/// assert_eq!(cursor.next(&d), Some(&1));
/// d.push_back(4).unwrap();
/// let mut rest = Vec::new();
/// while let Some(x) = cursor.next(&d) {
///     rest.push(*x);
/// }
/// assert_eq!(rest, vec![2, 3, 4]);
/// ```
///
/// If pops move the front past the cursor, the cursor resumes at the new
/// front, skipping whatever was removed.  If pops from the back retreat the
/// tail past the cursor, the cursor ends: the slots it would resume on hold
/// elements it has already yielded.  Eviction is different again: the evicted
/// front slot becomes the new tail slot, so a cursor parked on it simply ends.
/// When eviction churn laps the cursor the elements it yields are unspecified,
/// though always elements currently in the deque.  A cursor is not
/// restartable; ask the deque for a fresh one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pos: usize,
    // head and tail as of the previous step
    head_seen: usize,
    tail_seen: usize,
}

impl Cursor {
    pub(crate) fn new(head: usize, tail: usize) -> Self {
        Self {
            pos: head,
            head_seen: head,
            tail_seen: tail,
        }
    }

    /// Yields the element under the cursor and steps forward, or `None` once the
    /// cursor reaches the tail.
    pub fn next<'a, T, S: SlotStorage<T>>(
        &mut self,
        deque: &'a BoundedDeque<T, S>,
    ) -> Option<&'a T> {
        let item = self.step(deque);
        self.head_seen = deque.head;
        self.tail_seen = deque.tail;
        item
    }

    fn step<'a, T, S: SlotStorage<T>>(
        &mut self,
        deque: &'a BoundedDeque<T, S>,
    ) -> Option<&'a T> {
        if self.pos == deque.tail {
            return None;
        }
        if !matches!(deque.slots.slots().get(self.pos), Some(Some(_))) {
            if deque.is_empty() || !self.vacated_by_front(deque) {
                trace!(
                    "cursor at slot {} is past the tail at {}, ending",
                    self.pos, deque.tail
                );
                self.pos = deque.tail;
                return None;
            }
            trace!(
                "cursor at slot {} fell behind the front, resuming at {}",
                self.pos, deque.head
            );
            self.pos = deque.head;
        }
        let item = deque.live(self.pos);
        self.pos = deque.wrap_add(self.pos, 1);
        Some(item)
    }

    /// Whether the vacant slot under the cursor was freed by the head moving
    /// forward rather than by the tail moving back.
    ///
    /// Each end's movement since the previous step spans a window of slots.  A
    /// push that moves an end the other way wraps its window to nearly the
    /// whole ring, so when both windows hold the cursor the narrower one wins.
    fn vacated_by_front<T, S: SlotStorage<T>>(&self, deque: &BoundedDeque<T, S>) -> bool {
        let head_moved = deque.wrap_sub(deque.head, self.head_seen);
        let tail_moved = deque.wrap_sub(self.tail_seen, deque.tail);
        let in_front = deque.wrap_sub(self.pos, self.head_seen) < head_moved;
        let in_back = deque.wrap_sub(self.pos, deque.tail) < tail_moved;
        match (in_front, in_back) {
            (true, false) => true,
            (true, true) => head_moved < tail_moved,
            (false, _) => false,
        }
    }
}
