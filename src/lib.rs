//! sha1-stream - streaming SHA-1 digest engine
//!
//! This library hashes data fed in arbitrary chunks and produces the 20-byte
//! SHA-1 digest. Block words are assembled big-endian by explicit shifts, so
//! results are identical on every host byte order.
//!
//! # Quick Start
//!
//! ```rust
//! use sha1_stream::{Sha1, sha1};
//!
//! // One-shot
//! let digest = sha1(b"abc");
//! assert_eq!(digest.to_string(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//!
//! // Streaming
//! let mut hasher = Sha1::new();
//! hasher.update(b"a")?;
//! hasher.update(b"bc")?;
//! assert_eq!(hasher.finalize()?, digest);
//! # Ok::<(), sha1_stream::Error>(())
//! ```
//!
//! # Lifecycle
//!
//! An engine moves through [`Phase::Ready`], [`Phase::Accumulating`] and
//! [`Phase::Finalized`]. Once finalized it rejects further input with
//! [`Error::Finalized`] until [`Sha1::init`] starts a new message.
//!
//! # Limits
//!
//! The bit counter is 64 bits wide. Messages longer than 2^64 bits wrap it,
//! matching the published algorithm's bound.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_possible_truncation)]

pub mod digest;

pub use digest::{BLOCK_SIZE, DIGEST_LEN, Digest, Error, Phase, Result, Sha1, sha1};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
