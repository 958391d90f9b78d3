//! Public SHA-1 engine: lifecycle and streaming contract.

use std::fmt;

use bytes::Buf;
use tracing::{debug, trace};

use super::context::Context;
use super::feeder::feed;
use super::finalize::finish;
use super::{Digest, Error, Result};

/// Lifecycle of one hashing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created with [`Sha1::uninit`]; must be initialized before use.
    Uninitialized,
    /// Initialized, nothing absorbed yet.
    Ready,
    /// At least one update has been absorbed.
    Accumulating,
    /// Digest produced; only `init` (or `compute`) may follow.
    Finalized,
}

/// Streaming SHA-1 engine.
///
/// Feed data with [`update`](Self::update) in chunks of any size, then call
/// [`finalize`](Self::finalize) once. The digest does not depend on how the
/// input was split. Each engine owns its state; hash independent messages
/// with independent engines.
///
/// Cloning an engine mid-message yields a second engine that continues from
/// the same point, so a shared prefix only needs to be hashed once.
///
/// The bit counter is 64 bits wide; messages longer than 2^64 bits wrap it.
///
/// ```
/// use sha1_stream::Sha1;
///
/// let mut hasher = Sha1::new();
/// hasher.update(b"The quick brown ")?;
/// hasher.update(b"fox jumps over the lazy dog")?;
/// let digest = hasher.finalize()?;
/// assert_eq!(digest.to_string(), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
/// # Ok::<(), sha1_stream::Error>(())
/// ```
#[derive(Clone)]
pub struct Sha1 {
    ctx: Context,
    phase: Phase,
}

impl Sha1 {
    /// Create an engine ready to accept data.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ctx: Context::new(),
            phase: Phase::Ready,
        }
    }

    /// Create an engine that rejects use until [`init`](Self::init) is called.
    ///
    /// Useful for engines parked in tables or pools ahead of a session.
    #[must_use]
    pub const fn uninit() -> Self {
        Self {
            ctx: Context::new(),
            phase: Phase::Uninitialized,
        }
    }

    /// Reset to the initial constants, discarding any in-progress message.
    pub fn init(&mut self) {
        self.ctx.reset();
        self.phase = Phase::Ready;
        trace!("sha1 engine initialized");
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Bits absorbed so far in the current message.
    #[must_use]
    pub const fn bit_len(&self) -> u64 {
        self.ctx.count.bits()
    }

    /// Bytes waiting in the partial block.
    #[must_use]
    pub const fn buffered_len(&self) -> usize {
        self.ctx.count.buffered()
    }

    /// Absorb all of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Uninitialized`] before `init` and [`Error::Finalized`]
    /// after `finalize`.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.check_open()?;
        self.absorb(data);
        Ok(())
    }

    /// Absorb the first `len` bytes of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthOutOfBounds`] if `len` exceeds `data.len()`; the
    /// engine is left untouched. Otherwise fails like [`update`](Self::update).
    pub fn update_len(&mut self, data: &[u8], len: usize) -> Result<()> {
        let prefix = prefix(data, len)?;
        self.update(prefix)
    }

    /// Absorb every remaining chunk of `buf`, advancing it to the end.
    ///
    /// # Errors
    ///
    /// Fails like [`update`](Self::update); `buf` is not advanced in that case.
    pub fn update_buf<B: Buf>(&mut self, mut buf: B) -> Result<()> {
        self.check_open()?;
        while buf.has_remaining() {
            let chunk = buf.chunk();
            let n = chunk.len();
            self.absorb(chunk);
            buf.advance(n);
        }
        Ok(())
    }

    /// Pad the message and produce its digest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Uninitialized`] before `init` and [`Error::Finalized`]
    /// when called a second time for the same message.
    pub fn finalize(&mut self) -> Result<Digest> {
        self.check_open()?;
        Ok(self.seal())
    }

    /// Hash `data` as a complete message on this engine.
    ///
    /// Equivalent to `init`, `update`, `finalize`; works from any phase.
    pub fn compute(&mut self, data: &[u8]) -> Digest {
        self.init();
        self.absorb(data);
        self.seal()
    }

    /// Hash the first `len` bytes of `data` as a complete message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthOutOfBounds`] if `len` exceeds `data.len()`; the
    /// engine is left untouched.
    pub fn compute_len(&mut self, data: &[u8], len: usize) -> Result<Digest> {
        let prefix = prefix(data, len)?;
        Ok(self.compute(prefix))
    }

    /// One-shot digest of `data` on a fresh engine.
    #[must_use]
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.compute(data)
    }

    fn check_open(&self) -> Result<()> {
        match self.phase {
            Phase::Ready | Phase::Accumulating => Ok(()),
            Phase::Uninitialized => {
                debug!("rejecting use of uninitialized sha1 engine");
                Err(Error::Uninitialized)
            }
            Phase::Finalized => {
                debug!("rejecting use of finalized sha1 engine");
                Err(Error::Finalized)
            }
        }
    }

    fn absorb(&mut self, data: &[u8]) {
        let blocks = feed(&mut self.ctx, data);
        self.phase = Phase::Accumulating;
        trace!(
            len = data.len(),
            blocks,
            buffered = self.ctx.count.buffered(),
            "sha1 update"
        );
    }

    fn seal(&mut self) -> Digest {
        let bits = self.ctx.count.bits();
        let (bytes, blocks) = finish(&mut self.ctx);
        self.phase = Phase::Finalized;
        debug!(bits, padding_blocks = blocks, "sha1 finalized");
        Digest::from_array(bytes)
    }
}

fn prefix(data: &[u8], len: usize) -> Result<&[u8]> {
    data.get(..len).ok_or(Error::LengthOutOfBounds {
        len,
        available: data.len(),
    })
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha1")
            .field("phase", &self.phase)
            .field("bit_len", &self.bit_len())
            .field("buffered", &self.buffered_len())
            .finish_non_exhaustive()
    }
}

/// One-shot SHA-1 of `data`.
#[must_use]
pub fn sha1(data: &[u8]) -> Digest {
    Sha1::digest(data)
}
