//! Error type returned at the public boundary.

use thiserror::Error;

/// Errors reported by the block entry points and key expansion.
///
/// Once inputs are validated nothing can fail, so every variant describes a
/// caller mistake. The output block is never written when one is returned.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The key-size tag is not one of 16, 24 or 32.
    #[error("unsupported key size: {size} bytes")]
    UnsupportedKeySize {
        /// Rejected tag value.
        size: usize,
    },
    /// The key slice does not match the requested key size.
    #[error("key length mismatch: expected {expected} bytes, got {actual}")]
    KeyLength {
        /// Length implied by the key-size tag.
        expected: usize,
        /// Length of the slice that was passed.
        actual: usize,
    },
    /// The output buffer handed to [`expand_key`](crate::expand_key) has the wrong length.
    #[error("schedule length mismatch: expected {expected} bytes, got {actual}")]
    ScheduleLength {
        /// `16 * (rounds + 1)` for the requested key size.
        expected: usize,
        /// Length of the buffer that was passed.
        actual: usize,
    },
}

impl Error {
    /// Short fixed description of the error kind, without the offending values.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Error::UnsupportedKeySize { .. } => "Unsupported key size",
            Error::KeyLength { .. } => "Key length does not match key size",
            Error::ScheduleLength { .. } => "Schedule buffer has the wrong length",
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Maps the outcome of a block operation to a fixed status string.
pub fn describe(result: &Result<()>) -> &'static str {
    match result {
        Ok(()) => "Success",
        Err(err) => err.as_str(),
    }
}
