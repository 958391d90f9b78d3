//! Mutable hashing state owned by one engine.

use super::{BLOCK_SIZE, INITIAL_STATE, STATE_WORDS};

/// Total number of message bits absorbed, split into two 32-bit words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct BitCount {
    low: u32,
    high: u32,
}

impl BitCount {
    /// Add `len` bytes worth of bits, carrying from the low into the high word.
    ///
    /// Totals past 2^64 bits wrap.
    pub(crate) fn add_bytes(&mut self, len: usize) {
        let bits = (len as u64).wrapping_mul(8);
        let (low, carry) = self.low.overflowing_add(bits as u32);
        self.low = low;
        self.high = self
            .high
            .wrapping_add((bits >> 32) as u32)
            .wrapping_add(u32::from(carry));
    }

    /// Number of valid bytes in the pending buffer.
    #[must_use]
    pub(crate) const fn buffered(self) -> usize {
        ((self.low >> 3) & (BLOCK_SIZE as u32 - 1)) as usize
    }

    /// Full 64-bit value.
    #[must_use]
    pub(crate) const fn bits(self) -> u64 {
        ((self.high as u64) << 32) | self.low as u64
    }

    /// Big-endian length field: high word first, then low word.
    #[must_use]
    pub(crate) const fn to_be_field(self) -> [u8; 8] {
        [
            (self.high >> 24) as u8,
            (self.high >> 16) as u8,
            (self.high >> 8) as u8,
            self.high as u8,
            (self.low >> 24) as u8,
            (self.low >> 16) as u8,
            (self.low >> 8) as u8,
            self.low as u8,
        ]
    }
}

/// Accumulator, bit count and partial block.
#[derive(Clone)]
pub(crate) struct Context {
    pub(crate) state: [u32; STATE_WORDS],
    pub(crate) count: BitCount,
    pub(crate) buffer: [u8; BLOCK_SIZE],
}

impl Context {
    pub(crate) const fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            count: BitCount { low: 0, high: 0 },
            buffer: [0u8; BLOCK_SIZE],
        }
    }

    /// Return to the initial constants, discarding any partial message.
    pub(crate) fn reset(&mut self) {
        self.state = INITIAL_STATE;
        self.count = BitCount::default();
        self.buffer = [0u8; BLOCK_SIZE];
    }
}
