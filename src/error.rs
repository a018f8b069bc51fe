//! Error types.

#[cfg(feature = "std")]
use std::error::Error;
use std::fmt;

/// Error value indicating a buffer was requested with no slots
///
/// Returned by the checked constructors; the panicking constructors report
/// the same condition as a panic.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZeroCapacityError;

const ZERO_CAPACITY: &str = "ring buffer capacity must be at least one";

#[cfg(feature = "std")]
impl Error for ZeroCapacityError {}

impl fmt::Display for ZeroCapacityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ZERO_CAPACITY)
    }
}

impl fmt::Debug for ZeroCapacityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "ZeroCapacityError", ZERO_CAPACITY)
    }
}
