use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Index;

use crate::iter::{IntoIter, Iter};
use crate::storage::Storage;
use crate::RingBuffer;

impl<T, S: Clone> Clone for RingBuffer<T, S> {
    fn clone(&self) -> Self {
        RingBuffer {
            xs: self.xs.clone(),
            front: self.front,
            back: self.back,
            count: self.count,
            phantom: PhantomData,
        }
    }
}

impl<T: Default, const N: usize> Default for RingBuffer<T, [T; N]> {
    /// Same as [`RingBuffer::new_inline`]; panics if `N` is zero.
    #[inline]
    fn default() -> Self {
        RingBuffer::new_inline()
    }
}

#[cfg(feature = "use_generic_array")]
impl<T, N> Default for RingBuffer<T, generic_array::GenericArray<T, N>>
where
    T: Default,
    N: generic_array::ArrayLength<T>,
{
    /// Panics if `N` is zero.
    fn default() -> Self {
        use crate::ZeroCapacityError;
        use generic_array::typenum::Unsigned;

        assert!(N::to_usize() > 0, "{}", ZeroCapacityError);
        RingBuffer::from_parts(generic_array::GenericArray::default())
    }
}

/// Compares elements in removal order. Indices and free slots are ignored,
/// so buffers with different storage or capacity can be equal.
impl<T, S, S2> PartialEq<RingBuffer<T, S2>> for RingBuffer<T, S>
where
    T: PartialEq,
    S: Storage<Item = T>,
    S2: Storage<Item = T>,
{
    fn eq(&self, other: &RingBuffer<T, S2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, S: Storage<Item = T>> Eq for RingBuffer<T, S> {}

impl<T: Hash, S: Storage<Item = T>> Hash for RingBuffer<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for x in self {
            x.hash(state);
        }
    }
}

/// Indexes elements by position, `0` being the oldest.
impl<T, S: Storage<Item = T>> Index<usize> for RingBuffer<T, S> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(element) => element,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }
}

/// Extend the `RingBuffer` with an iterator.
///
/// Every item is inserted; once the buffer is full each one evicts the oldest
/// element.
impl<T, S: Storage<Item = T>> Extend<T> for RingBuffer<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.insert(elt);
        }
    }
}

impl<T: Default, S: Storage<Item = T>> IntoIterator for RingBuffer<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T, S: Storage<Item = T>> IntoIterator for &'a RingBuffer<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, S: Storage<Item = T>> fmt::Debug for RingBuffer<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
