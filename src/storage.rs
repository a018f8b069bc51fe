//! Fixed-length backing storage.

use alloc::boxed::Box;

/// Trait for the contiguous block of slots behind a `RingBuffer`.
///
/// The length of the block is the capacity of the buffer. Implementors must
/// return slices of the same length from every call, for the whole life of
/// the value; the ring arithmetic relies on it.
pub trait Storage {
    /// The slot type
    type Item;

    /// Converts the storage to an immutable slice
    fn as_slice(&self) -> &[Self::Item];

    /// Converts the storage to a mutable slice
    fn as_mut_slice(&mut self) -> &mut [Self::Item];

    /// Returns the number of slots in the block
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.as_slice().len()
    }
}

impl<T, const N: usize> Storage for [T; N] {
    type Item = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        N
    }
}

impl<T> Storage for Box<[T]> {
    type Item = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Storage;
    use generic_array::typenum::Unsigned;
    use generic_array::{ArrayLength, GenericArray};

    impl<T, N> Storage for GenericArray<T, N>
    where
        N: ArrayLength<T>,
    {
        type Item = T;

        #[inline(always)]
        fn as_slice(&self) -> &[T] {
            GenericArray::as_slice(self)
        }

        #[inline(always)]
        fn as_mut_slice(&mut self) -> &mut [T] {
            GenericArray::as_mut_slice(self)
        }

        #[inline(always)]
        fn capacity(&self) -> usize {
            N::to_usize()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Storage;
    use alloc::boxed::Box;
    use alloc::vec;

    #[test]
    fn array_capacity() {
        let xs = [0u8; 7];
        assert_eq!(Storage::capacity(&xs), 7);
        assert_eq!(Storage::as_slice(&xs).len(), 7);
    }

    #[test]
    fn boxed_capacity() {
        let mut xs: Box<[u16]> = vec![1, 2, 3].into_boxed_slice();
        assert_eq!(Storage::capacity(&xs), 3);
        Storage::as_mut_slice(&mut xs)[2] = 9;
        assert_eq!(Storage::as_slice(&xs), &[1, 2, 9]);
    }

    #[cfg(feature = "use_generic_array")]
    #[test]
    fn generic_array_capacity() {
        use generic_array::typenum::U5;
        use generic_array::GenericArray;

        let xs: GenericArray<i32, U5> = GenericArray::default();
        assert_eq!(Storage::capacity(&xs), 5);
        assert_eq!(Storage::as_slice(&xs), &[0; 5]);
    }
}
