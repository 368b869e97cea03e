//! Backing-array backends for [`BoundedDeque`](crate::BoundedDeque).
//!
//! The deque only ever sees its slots as a slice of `Option<T>`, with `None` as
//! the vacant marker. A backend decides where that slice lives:
//!
//! * `Box<[Option<T>]>`: heap allocated, any capacity. The default.
//! * `heapless::Vec<Option<T>, N>`: inline (no allocation), `capacity + 1 <= N`.
//!   Requires the `inline` feature.

use crate::error::{DequeError, DequeResult};

/// A fixed-length array of optional element slots.
///
/// Implementations must return the same length from every call to `slots` /
/// `slots_mut` for the lifetime of the value.  A freshly allocated storage
/// must hold exactly `len` slots, all `None`; the deque rejects anything else
/// with [`DequeError::InvalidArgument`].
pub trait SlotStorage<T>: Sized {
    /// Allocates `len` vacant slots.
    fn allocate(len: usize) -> DequeResult<Self>;

    fn slots(&self) -> &[Option<T>];

    fn slots_mut(&mut self) -> &mut [Option<T>];

    /// Bytes owned outside the storage value itself.
    fn heap_bytes(&self) -> usize;
}

impl<T> SlotStorage<T> for Box<[Option<T>]> {
    fn allocate(len: usize) -> DequeResult<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|e| DequeError::InvalidArgument(format!("cannot allocate {len} slots: {e}")))?;
        slots.resize_with(len, || None);
        Ok(slots.into_boxed_slice())
    }

    #[inline(always)]
    fn slots(&self) -> &[Option<T>] {
        self
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [Option<T>] {
        self
    }

    #[inline]
    fn heap_bytes(&self) -> usize {
        self.len() * core::mem::size_of::<Option<T>>()
    }
}

#[cfg(feature = "inline")]
impl<T, const N: usize> SlotStorage<T> for heapless::Vec<Option<T>, N> {
    fn allocate(len: usize) -> DequeResult<Self> {
        if len > N {
            return Err(DequeError::InvalidArgument(format!(
                "inline storage holds {N} slots, {len} requested"
            )));
        }
        let mut slots = heapless::Vec::new();
        for _ in 0..len {
            if slots.push(None).is_err() {
                unreachable!("Logic Error: inline slot count checked against N");
            }
        }
        Ok(slots)
    }

    #[inline(always)]
    fn slots(&self) -> &[Option<T>] {
        self.as_slice()
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [Option<T>] {
        self.as_mut_slice()
    }

    #[inline]
    fn heap_bytes(&self) -> usize {
        0
    }
}
