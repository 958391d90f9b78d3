//! SHA-1 engine error types

use thiserror::Error;

/// Errors surfaced by the digest engine and digest parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested length runs past the supplied buffer
    #[error("length {len} exceeds supplied buffer of {available} bytes")]
    LengthOutOfBounds {
        /// Requested length
        len: usize,
        /// Bytes actually supplied
        available: usize,
    },

    /// Engine used before `init`
    #[error("digest engine used before init")]
    Uninitialized,

    /// Engine already produced its digest
    #[error("digest engine already finalized; call init to start a new message")]
    Finalized,

    /// Digest bytes or hex text of the wrong size
    #[error("invalid digest length: {len} (expected 20 bytes or 40 hex characters)")]
    InvalidDigestLength {
        /// Length that was supplied
        len: usize,
    },

    /// Non-hex character in digest text
    #[error("invalid hex character at position {position}")]
    InvalidHex {
        /// Character offset of the offending input
        position: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
