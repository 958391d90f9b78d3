//! SHA-1 block compression.
//!
//! The message schedule lives in a rolling 16-word window that is rewritten in
//! place; word `i` for `i >= 16` replaces slot `i & 15`.

use super::{BLOCK_SIZE, STATE_WORDS};

const SCHEDULE_WORDS: usize = 16;

const K0: u32 = 0x5A82_7999;
const K1: u32 = 0x6ED9_EBA1;
const K2: u32 = 0x8F1B_BCDC;
const K3: u32 = 0xCA62_C1D6;

#[inline(always)]
fn choice(b: u32, c: u32, d: u32) -> u32 {
    (b & (c ^ d)) ^ d
}

#[inline(always)]
fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
fn majority(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}

/// Big-endian word assembly, independent of host byte order.
#[inline(always)]
fn load_be(block: &[u8; BLOCK_SIZE]) -> [u32; SCHEDULE_WORDS] {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = (u32::from(bytes[0]) << 24)
            | (u32::from(bytes[1]) << 16)
            | (u32::from(bytes[2]) << 8)
            | u32::from(bytes[3]);
    }
    w
}

/// Expand schedule word `i` (`i >= 16`) in place and return it.
#[inline(always)]
fn expand(w: &mut [u32; SCHEDULE_WORDS], i: usize) -> u32 {
    let mixed = w[(i + 13) & 15] ^ w[(i + 8) & 15] ^ w[(i + 2) & 15] ^ w[i & 15];
    w[i & 15] = mixed.rotate_left(1);
    w[i & 15]
}

/// One round: `e += f(b, c, d) + w + k + rotl(a, 5); b = rotl(b, 30)`, then
/// the registers shift roles so the new value becomes `a` for the next round.
#[inline(always)]
fn step(v: &mut [u32; STATE_WORDS], f: fn(u32, u32, u32) -> u32, k: u32, word: u32) {
    let [a, b, c, d, e] = *v;
    let t = e
        .wrapping_add(f(b, c, d))
        .wrapping_add(word)
        .wrapping_add(k)
        .wrapping_add(a.rotate_left(5));
    *v = [t, a, b.rotate_left(30), c, d];
}

/// Compress one 64-byte block into `state`.
pub(crate) fn compress(state: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_SIZE]) {
    let mut w = load_be(block);
    let mut v = *state;

    for word in w {
        step(&mut v, choice, K0, word);
    }
    for i in 16..20 {
        let word = expand(&mut w, i);
        step(&mut v, choice, K0, word);
    }
    for i in 20..40 {
        let word = expand(&mut w, i);
        step(&mut v, parity, K1, word);
    }
    for i in 40..60 {
        let word = expand(&mut w, i);
        step(&mut v, majority, K2, word);
    }
    for i in 60..80 {
        let word = expand(&mut w, i);
        step(&mut v, parity, K3, word);
    }

    for (acc, reg) in state.iter_mut().zip(v) {
        *acc = acc.wrapping_add(reg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::INITIAL_STATE;

    fn padded(message: &[u8]) -> [u8; BLOCK_SIZE] {
        assert!(message.len() < 56);
        let mut block = [0u8; BLOCK_SIZE];
        block[..message.len()].copy_from_slice(message);
        block[message.len()] = 0x80;
        let bits = (message.len() as u64) * 8;
        block[56..].copy_from_slice(&bits.to_be_bytes());
        block
    }

    #[test]
    fn single_block_abc() {
        let mut state = INITIAL_STATE;
        compress(&mut state, &padded(b"abc"));
        assert_eq!(
            state,
            [0xA999_3E36, 0x4706_816A, 0xBA3E_2571, 0x7850_C26C, 0x9CD0_D89D]
        );
    }

    #[test]
    fn single_block_empty() {
        let mut state = INITIAL_STATE;
        compress(&mut state, &padded(b""));
        assert_eq!(
            state,
            [0xDA39_A3EE, 0x5E6B_4B0D, 0x3255_BFEF, 0x9560_1890, 0xAFD8_0709]
        );
    }

    #[test]
    fn words_load_big_endian() {
        let mut block = [0u8; BLOCK_SIZE];
        block[..4].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        block[60..].copy_from_slice(&[0xF0, 0xE0, 0xD0, 0xC0]);
        let w = load_be(&block);
        assert_eq!(w[0], 0x0102_0304);
        assert_eq!(w[15], 0xF0E0_D0C0);
    }

    #[test]
    fn rolling_schedule_matches_full_expansion() {
        let block: [u8; BLOCK_SIZE] = core::array::from_fn(|i| (i * 7 + 3) as u8);
        let mut full = [0u32; 80];
        full[..16].copy_from_slice(&load_be(&block));
        for i in 16..80 {
            full[i] = (full[i - 3] ^ full[i - 8] ^ full[i - 14] ^ full[i - 16]).rotate_left(1);
        }

        let mut rolling = load_be(&block);
        for (i, expected) in full.iter().enumerate().skip(16) {
            assert_eq!(expand(&mut rolling, i), *expected, "word {i}");
        }
    }

    #[test]
    fn step_shifts_register_roles() {
        let mut v = [1, 2, 3, 4, 5];
        step(&mut v, parity, 10, 100);
        let t = 5u32 + (2 ^ 3 ^ 4) + 100 + 10 + 1u32.rotate_left(5);
        assert_eq!(v, [t, 1, 2u32.rotate_left(30), 3, 4]);

        let mut wrapping = [u32::MAX; STATE_WORDS];
        step(&mut wrapping, majority, K3, u32::MAX);
        let expected = u32::MAX
            .wrapping_add(u32::MAX)
            .wrapping_add(u32::MAX)
            .wrapping_add(K3)
            .wrapping_add(u32::MAX);
        assert_eq!(wrapping[0], expected);
        assert_eq!(wrapping[1..], [u32::MAX; 4]);
    }

    #[test]
    fn round_functions() {
        assert_eq!(choice(0xFFFF_0000, 0x1234_5678, 0x9ABC_DEF0), 0x1234_DEF0);
        assert_eq!(parity(0xF0F0_F0F0, 0xFF00_FF00, 0x0F0F_0F0F), 0x00FF_00FF);
        assert_eq!(majority(0b1100, 0b1010, 0b0110), 0b1110);
    }
}
