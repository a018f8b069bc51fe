//! A ring buffer with a fixed capacity that overwrites its oldest element
//! when full.
//!
//! The backing storage is built exactly once, when the buffer is created, and
//! never grows, shrinks or reallocates afterwards. It can live on the heap
//! (`Box<[T]>`, capacity chosen at runtime) or directly inside the buffer
//! (`[T; N]`, no allocation at all), which makes the type usable in embedded
//! and real-time code.
//!
//! Insertion and removal are `O(1)`. Removing an element resets its slot to
//! `T::default()`, so stale values never linger in the storage.
//!
//! # Feature Flags
//! The **fixedring** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate is `no_std` (heap storage still
//!     needs the `alloc` crate)
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using it just like a fixed
//!     size array for `RingBuffer` storage.
//!
//!
//! - `log`
//!   - Optional
//!   - Emit `trace` records through the `log` facade on eviction and on
//!     removal from an empty buffer.
//!
//!
//! - `defmt`
//!   - Optional
//!   - Implement `defmt::Format` for the outcome and error types.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fixedring = "0.1"
//! ```
//!
//! Or, in a `#![no_std]` crate:
//!
//! ```toml
//! [dependencies]
//! fixedring = { version = "0.1", default-features = false }
//! ```
//!
//! # Examples
//! ```
//! use fixedring::{Insertion, RingBuffer};
//!
//! let mut buf = RingBuffer::with_capacity(3);
//! assert_eq!(buf.capacity(), 3);
//!
//! assert_eq!(buf.insert(1), Insertion::Stored);
//! assert_eq!(buf.insert(2), Insertion::Stored);
//! assert_eq!(buf.insert(3), Insertion::Stored);
//! assert_eq!(buf.insert(4), Insertion::Evicted(1));
//!
//! assert_eq!(buf.remove(), Some(2));
//! assert_eq!(buf.as_raw(), &[4, 0, 3]);
//! ```
//!
//! # Inline storage
//! ```
//! use fixedring::RingBuffer;
//!
//! let mut buf: RingBuffer<u8, [u8; 4]> = RingBuffer::new_inline();
//!
//! buf.extend(0..6);
//!
//! assert_eq!(format!("{:?}", buf), "[2, 3, 4, 5]");
//! assert_eq!(buf.front_index(), 2);
//! assert_eq!(buf.back_index(), 2);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

#[cfg(not(any(feature = "std", test)))]
extern crate core as std;

extern crate alloc;

use alloc::boxed::Box;
use std::marker::PhantomData;
use std::mem;
use std::num::NonZeroUsize;

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    };
}

pub mod error;
mod iter;
mod outcome;
mod storage;
mod trait_impls;
mod utils;

pub use crate::error::ZeroCapacityError;
pub use crate::iter::{Drain, IntoIter, Iter};
pub use crate::outcome::{Insertion, State};
pub use crate::storage::Storage;
use crate::utils::*;

/// A fixed capacity ring buffer.
///
/// `insert` writes at the front index, `remove` reads at the back index; both
/// indices move forward and wrap at the capacity. Once every slot is in use,
/// `insert` overwrites the oldest element and moves the back index along
/// with it, so the buffer always holds the most recent `capacity()` elements.
///
/// ```text
///  |----========---------|
///       ^       ^
///       back    front
/// ```
///
/// The storage type `S` defaults to a boxed slice. Any [`Storage`] works,
/// including plain arrays.
pub struct RingBuffer<T, S = Box<[T]>> {
    xs: S,
    front: usize,
    back: usize,
    count: usize,
    phantom: PhantomData<T>,
}

impl<T: Default> RingBuffer<T> {
    /// Creates an empty buffer on the heap, with `capacity` slots set to
    /// `T::default()`.
    ///
    /// This is the only allocation the buffer ever makes.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use fixedring::RingBuffer;
    ///
    /// let capacity = NonZeroUsize::new(10).unwrap();
    /// let buf: RingBuffer<u32> = RingBuffer::new(capacity);
    /// assert_eq!(buf.capacity(), 10);
    /// assert_eq!(buf.as_raw(), &[0; 10]);
    /// ```
    pub fn new(capacity: NonZeroUsize) -> Self {
        let xs: Box<[T]> = std::iter::repeat_with(T::default)
            .take(capacity.get())
            .collect();
        RingBuffer::from_parts(xs)
    }

    /// Creates an empty buffer on the heap, or returns an error if
    /// `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::{RingBuffer, ZeroCapacityError};
    ///
    /// assert!(RingBuffer::<i32>::try_with_capacity(4).is_ok());
    /// assert_eq!(RingBuffer::<i32>::try_with_capacity(0).err(), Some(ZeroCapacityError));
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ZeroCapacityError> {
        NonZeroUsize::new(capacity)
            .map(RingBuffer::new)
            .ok_or(ZeroCapacityError)
    }

    /// Creates an empty buffer on the heap.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        match RingBuffer::try_with_capacity(capacity) {
            Ok(buf) => buf,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Default, const N: usize> RingBuffer<T, [T; N]> {
    /// Creates an empty buffer stored inline, with `N` slots set to
    /// `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let buf: RingBuffer<i64, [i64; 3]> = RingBuffer::new_inline();
    /// assert_eq!(buf.capacity(), 3);
    /// ```
    pub fn new_inline() -> Self {
        assert!(N > 0, "{}", ZeroCapacityError);
        RingBuffer::from_parts(std::array::from_fn(|_| T::default()))
    }
}

impl<T, S: Storage<Item = T>> RingBuffer<T, S> {
    /// Creates an empty buffer over existing storage.
    ///
    /// The slots are not reset: whatever they hold stays visible through
    /// [`as_raw`](RingBuffer::as_raw) until overwritten, but none of it counts
    /// as an element. Returns an error if the storage has no slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf = RingBuffer::from_storage([9u8; 2]).unwrap();
    /// assert!(buf.is_empty());
    /// buf.insert(1);
    /// assert_eq!(buf.as_raw(), &[1, 9]);
    ///
    /// assert!(RingBuffer::from_storage([0u8; 0]).is_err());
    /// ```
    pub fn from_storage(xs: S) -> Result<Self, ZeroCapacityError> {
        if xs.capacity() == 0 {
            return Err(ZeroCapacityError);
        }
        Ok(RingBuffer::from_parts(xs))
    }

    #[inline]
    pub(crate) fn from_parts(xs: S) -> Self {
        debug_assert!(xs.capacity() > 0);
        RingBuffer {
            xs,
            front: 0,
            back: 0,
            count: 0,
            phantom: PhantomData,
        }
    }

    #[inline]
    fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.capacity())
    }

    /// Returns the number of slots, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.xs.capacity()
    }

    /// Returns the number of elements in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut v = RingBuffer::with_capacity(2);
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// v.insert(2);
    /// v.insert(3);
    /// assert_eq!(v.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if every slot holds an element, so the next insert
    /// evicts.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Returns the fill state of the buffer.
    #[inline]
    pub fn state(&self) -> State {
        if self.is_empty() {
            State::Empty
        } else if self.is_full() {
            State::Full
        } else {
            State::Partial
        }
    }

    /// Returns the slot index the next inserted element will be written to.
    #[inline]
    pub fn front_index(&self) -> usize {
        self.front
    }

    /// Returns the slot index of the oldest element, the next one removed.
    #[inline]
    pub fn back_index(&self) -> usize {
        self.back
    }

    /// Returns every slot of the backing storage, in slot order.
    ///
    /// Free slots show `T::default()` once they have been removed from, or
    /// whatever they were built with before that. Use [`iter`](RingBuffer::iter)
    /// to visit elements in insertion order instead.
    #[inline]
    pub fn as_raw(&self) -> &[T] {
        self.xs.as_slice()
    }

    /// Returns the oldest element, the one `remove` would return next.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the most recently inserted element.
    #[inline]
    pub fn peek_newest(&self) -> Option<&T> {
        self.count.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Retrieves an element by its position, where `0` is the oldest.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<_, [_; 3]> = RingBuffer::new_inline();
    /// buf.extend([3, 4, 5, 6]);
    /// assert_eq!(buf.get(0), Some(&4));
    /// assert_eq!(buf.get(2), Some(&6));
    /// assert_eq!(buf.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.count {
            let slot = self.wrap_add(self.back, index);
            Some(&self.xs.as_slice()[slot])
        } else {
            None
        }
    }

    /// Returns an iterator over the elements, oldest first.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self.xs.as_slice(),
            back: self.back,
            len: self.count,
        }
    }

    /// Adds an element at the front index.
    ///
    /// Returns [`Insertion::Stored`] if there was a free slot, or
    /// [`Insertion::Evicted`] with the oldest element if the buffer was full
    /// and that element was overwritten. Either way the new element is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::{Insertion, RingBuffer};
    ///
    /// let mut buf: RingBuffer<_, [_; 2]> = RingBuffer::new_inline();
    /// assert!(buf.insert(1).is_stored());
    /// assert!(buf.insert(2).is_stored());
    /// assert_eq!(buf.insert(3), Insertion::Evicted(1));
    /// assert_eq!(buf.len(), 2);
    /// ```
    pub fn insert(&mut self, element: T) -> Insertion<T> {
        let front = self.front;
        let previous = mem::replace(&mut self.xs.as_mut_slice()[front], element);
        self.front = self.wrap_add(front, 1);
        self.count += 1;
        if self.count > self.capacity() {
            // front and back were equal: the slot just written held the oldest element
            self.back = self.wrap_add(self.back, 1);
            self.count -= 1;
            trace!("ring buffer full, overwrote oldest element in slot {}", front);
            Insertion::Evicted(previous)
        } else {
            Insertion::Stored
        }
    }
}

impl<T: Default, S: Storage<Item = T>> RingBuffer<T, S> {
    /// Removes the oldest element and returns it, or `None` if the buffer is
    /// empty.
    ///
    /// The vacated slot is reset to `T::default()`. Removing from an empty
    /// buffer changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<_, [_; 3]> = RingBuffer::new_inline();
    /// buf.insert(1);
    /// buf.insert(2);
    ///
    /// assert_eq!(buf.remove(), Some(1));
    /// assert_eq!(buf.as_raw(), &[0, 2, 0]);
    /// assert_eq!(buf.remove(), Some(2));
    /// assert_eq!(buf.remove(), None);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_empty() {
            trace!("remove from empty ring buffer");
            return None;
        }
        let back = self.back;
        let element = mem::take(&mut self.xs.as_mut_slice()[back]);
        self.back = self.wrap_add(back, 1);
        self.count -= 1;
        Some(element)
    }

    /// Removes the oldest element, returning it with `true`, or
    /// `T::default()` with `false` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf = RingBuffer::with_capacity(4);
    /// buf.insert(5.5);
    /// assert_eq!(buf.remove_or_default(), (5.5, true));
    /// assert_eq!(buf.remove_or_default(), (0.0, false));
    /// ```
    pub fn remove_or_default(&mut self) -> (T, bool) {
        match self.remove() {
            Some(element) => (element, true),
            None => (T::default(), false),
        }
    }

    /// Removes and drops the oldest element. Returns `false` if the buffer
    /// was empty.
    pub fn discard(&mut self) -> bool {
        self.remove().is_some()
    }

    /// Removes every element, leaving all slots reset to `T::default()`.
    ///
    /// The indices stay where the removals leave them: `back_index()` ends up
    /// equal to `front_index()`.
    pub fn clear(&mut self) {
        while self.discard() {}
    }

    /// Returns an iterator that removes elements oldest first.
    ///
    /// Elements the iterator does not reach stay in the buffer.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T, S> {
        Drain { inner: self }
    }
}

impl<T: TryFrom<usize>, S: Storage<Item = T>> RingBuffer<T, S> {
    /// Inserts `1, 2, ..., capacity()` in order.
    ///
    /// Stops early at the first value `T` cannot represent. On a non-empty
    /// buffer the usual eviction applies.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<i32> = RingBuffer::with_capacity(4);
    /// buf.populate_all();
    /// assert_eq!(buf.as_raw(), &[1, 2, 3, 4]);
    /// assert!(buf.is_full());
    /// ```
    pub fn populate_all(&mut self) {
        for value in 1..=self.capacity() {
            match T::try_from(value) {
                Ok(element) => {
                    self.insert(element);
                }
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
impl<T: PartialEq, S: Storage<Item = T>> PartialEq<alloc::vec::Vec<T>> for RingBuffer<T, S> {
    fn eq(&self, other: &alloc::vec::Vec<T>) -> bool {
        self.iter().eq(other.iter())
    }
}
