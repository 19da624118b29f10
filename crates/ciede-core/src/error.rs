//! Error types for ciede

use thiserror::Error;

/// Result type for ciede operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ciede operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Nearest-color search over a gamut with no entries
    #[error("Empty input: cannot search a gamut with no entries")]
    EmptyInput,

    /// Output buffer does not match the gamut length
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Flat L*a*b* buffer is not a whole number of triples
    #[error("Flat buffer length {0} is not a multiple of 3")]
    FlatLength(usize),
}
