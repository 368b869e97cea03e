//! Host-style subscript dispatch.
//!
//! A dynamic host routes `d[i]`, `d[i] = v`, `del d[i]` and `d[a:b]` through a
//! single entry point.  Only integer loads are supported; everything else is
//! rejected with `UnsupportedOperation` before touching the deque.

use core::ops::Range;

use crate::deque::BoundedDeque;
use crate::error::{DequeError, DequeResult};
use crate::storage::SlotStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptIndex {
    /// Signed position; negative values count from the back.
    Int(isize),
    Slice {
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    },
}

impl From<isize> for SubscriptIndex {
    fn from(index: isize) -> Self {
        SubscriptIndex::Int(index)
    }
}

impl From<Range<isize>> for SubscriptIndex {
    fn from(range: Range<isize>) -> Self {
        SubscriptIndex::Slice {
            start: Some(range.start),
            stop: Some(range.end),
            step: None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubscriptOp<T> {
    Load,
    Store(T),
    Delete,
}

impl<T, S: SlotStorage<T>> BoundedDeque<T, S> {
    /// Resolves one subscript request.
    ///
    /// `Store` and `Delete` fail first, whatever the index; a slice index fails
    /// next; an integer `Load` behaves as [`get_signed`](BoundedDeque::get_signed).
    pub fn subscript(&self, index: SubscriptIndex, op: SubscriptOp<T>) -> DequeResult<&T> {
        match op {
            SubscriptOp::Load => {}
            SubscriptOp::Store(_) => {
                return Err(DequeError::UnsupportedOperation("index assignment"));
            }
            SubscriptOp::Delete => return Err(DequeError::UnsupportedOperation("index deletion")),
        }
        match index {
            SubscriptIndex::Int(i) => self.get_signed(i),
            SubscriptIndex::Slice { .. } => Err(DequeError::UnsupportedOperation("slice access")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoundedDeque<i32> {
        BoundedDeque::from_source([3, 5, 7], 5, 1).unwrap()
    }

    #[test]
    fn test_subscript_load_int() {
        let d = sample();
        assert_eq!(d.subscript(SubscriptIndex::Int(0), SubscriptOp::Load), Ok(&3));
        assert_eq!(d.subscript(SubscriptIndex::Int(-1), SubscriptOp::Load), Ok(&7));
        assert_eq!(
            d.subscript(SubscriptIndex::Int(3), SubscriptOp::Load),
            Err(DequeError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_subscript_rejects_slices() {
        let d = sample();
        let slices = [
            SubscriptIndex::from(0isize..3),
            SubscriptIndex::from(1isize..-1),
            SubscriptIndex::Slice { start: None, stop: None, step: None },
            SubscriptIndex::Slice { start: None, stop: None, step: Some(2) },
            SubscriptIndex::Slice { start: Some(-1), stop: None, step: Some(-1) },
        ];
        for slice in slices {
            assert_eq!(
                d.subscript(slice, SubscriptOp::Load),
                Err(DequeError::UnsupportedOperation("slice access"))
            );
        }
    }

    #[test]
    fn test_subscript_rejects_mutation() {
        let d = sample();
        assert_eq!(
            d.subscript(SubscriptIndex::Int(0), SubscriptOp::Store(1)),
            Err(DequeError::UnsupportedOperation("index assignment"))
        );
        assert_eq!(
            d.subscript(SubscriptIndex::Int(0), SubscriptOp::Delete),
            Err(DequeError::UnsupportedOperation("index deletion"))
        );
        // Rejected even when the index is out of range.
        assert_eq!(
            d.subscript(SubscriptIndex::Int(99), SubscriptOp::Delete),
            Err(DequeError::UnsupportedOperation("index deletion"))
        );
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![3, 5, 7]);
    }
}
