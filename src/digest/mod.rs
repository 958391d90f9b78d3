//! SHA-1 digest engine
//!
//! This module provides the streaming context, block compressor, padding and
//! the public engine that ties them together.

mod compress;
mod context;
mod engine;
mod error;
mod feeder;
mod finalize;
mod output;

pub use engine::{Phase, Sha1, sha1};
pub use error::{Error, Result};
pub use output::Digest;

/// Size of one compressor input block in bytes
pub const BLOCK_SIZE: usize = 64;

/// Digest size in bytes
pub const DIGEST_LEN: usize = 20;

/// Number of 32-bit words in the running state
pub const STATE_WORDS: usize = 5;

/// Initial accumulator values
pub const INITIAL_STATE: [u32; STATE_WORDS] = [
    0x6745_2301,
    0xEFCD_AB89,
    0x98BA_DCFE,
    0x1032_5476,
    0xC3D2_E1F0,
];

/// Offset of the 64-bit length field inside the last padded block
pub(crate) const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;
