//! Outcomes reported by `RingBuffer` operations.

/// What happened to the buffer when an element was inserted.
///
/// Insertion always succeeds. The variants only tell whether room had to be
/// made by overwriting the oldest element.
///
/// ```text
/// [_, _, _] <-(+)- 1 => [1, _, _] -> Stored
/// [1, _, _] <-(+)- 2 => [1, 2, _] -> Stored
/// [1, 2, _] <-(+)- 3 => [1, 2, 3] -> Stored
/// [1, 2, 3] <-(+)- 4 => [4, 2, 3] -> Evicted(1)
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Insertion<T> {
    /// The element went into a free slot.
    Stored,
    /// The buffer was full; the element overwrote the oldest one, returned here.
    Evicted(T),
}

impl<T> Insertion<T> {
    /// Returns `true` if no element was evicted.
    #[inline]
    pub fn is_stored(&self) -> bool {
        matches!(*self, Insertion::Stored)
    }

    /// Returns `true` if the oldest element was overwritten.
    #[inline]
    pub fn is_evicted(&self) -> bool {
        !self.is_stored()
    }

    /// Returns the evicted element, if any.
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<_, [_; 1]> = RingBuffer::new_inline();
    /// assert_eq!(buf.insert('a').evicted(), None);
    /// assert_eq!(buf.insert('b').evicted(), Some('a'));
    /// ```
    #[inline]
    pub fn evicted(self) -> Option<T> {
        match self {
            Insertion::Stored => None,
            Insertion::Evicted(element) => Some(element),
        }
    }
}

impl<T> From<Insertion<T>> for Option<T> {
    #[inline]
    fn from(insertion: Insertion<T>) -> Option<T> {
        insertion.evicted()
    }
}

/// Fill state of a `RingBuffer`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// No elements; removal reports nothing.
    Empty,
    /// Some elements, and at least one free slot.
    Partial,
    /// Every slot holds an element; insertion evicts the oldest.
    Full,
}
