use std::iter::FusedIterator;

use crate::storage::Storage;
use crate::utils::*;
use crate::RingBuffer;

/// `RingBuffer` iterator, oldest element first
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    pub(crate) ring: &'a [T],
    pub(crate) back: usize,
    pub(crate) len: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            ring: self.ring,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let back = self.back;
        self.back = wrap_add(back, 1, self.ring.len());
        self.len -= 1;
        Some(&self.ring[back])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(&self.ring[wrap_add(self.back, self.len, self.ring.len())])
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// By-value `RingBuffer` iterator, oldest element first
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T, S> {
    pub(crate) inner: RingBuffer<T, S>,
}

impl<T: Default, S: Storage<Item = T>> Iterator for IntoIter<T, S> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.remove()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T: Default, S: Storage<Item = T>> ExactSizeIterator for IntoIter<T, S> {}

/// A draining `RingBuffer` iterator
///
/// Each element is removed, and its slot cleared, as it is yielded. Elements
/// not yet yielded when the iterator is dropped stay in the buffer.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Drain<'a, T: 'a, S: 'a> {
    pub(crate) inner: &'a mut RingBuffer<T, S>,
}

impl<'a, T: Default, S: Storage<Item = T>> Iterator for Drain<'a, T, S> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.remove()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<'a, T: Default, S: Storage<Item = T>> ExactSizeIterator for Drain<'a, T, S> {}
