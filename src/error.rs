use thiserror::Error;

/// Errors returned when a generator is given arguments outside its domain.
///
/// Requests that are merely infeasible (more parts than elements, a
/// combination larger than the multiset, ...) are not errors: they produce
/// empty iterators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error
{
    /// A size argument was below zero
    #[error("{what} must be >= 0")]
    Negative {
        /// Name of the offending argument
        what: &'static str,
    },
    /// An explicitly given bound was zero or below
    #[error("{what} must be > 0")]
    NonPositive {
        /// Name of the offending argument
        what: &'static str,
    },
    /// An array-backed enumerator cannot hold a set of this size
    #[error("set of {len} elements does not fit in capacity {capacity}")]
    CapacityExceeded {
        /// Requested size
        len: usize,
        /// Fixed capacity of the storage
        capacity: usize,
    },
    /// The sequence is not a restricted growth string
    #[error("not a restricted growth string")]
    InvalidRgs,
    /// Two sequences that must have the same length do not
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch {
        /// Length of the reference sequence
        expected: usize,
        /// Length actually given
        found: usize,
    },
    /// The minimum passed to `Minlex::known_min` does not occur in the sequence
    #[error("known minimum does not occur in the sequence")]
    MinNotFound,
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
