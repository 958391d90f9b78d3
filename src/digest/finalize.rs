//! Message padding and digest extraction.

use super::context::Context;
use super::feeder::feed;
use super::{BLOCK_SIZE, DIGEST_LEN, LENGTH_OFFSET};

const PADDING: [u8; BLOCK_SIZE] = {
    let mut pad = [0u8; BLOCK_SIZE];
    pad[0] = 0x80;
    pad
};

/// Bytes of `0x80`-then-zeros needed to bring `buffered` up to the length field.
const fn padding_len(buffered: usize) -> usize {
    if buffered < LENGTH_OFFSET {
        LENGTH_OFFSET - buffered
    } else {
        BLOCK_SIZE + LENGTH_OFFSET - buffered
    }
}

/// Pad the message, append its bit length and read out the digest.
///
/// Returns the digest bytes and the number of blocks compressed while
/// padding (one, or two when the marker and length do not fit in the
/// current block). The context is left drained and must be reset before
/// reuse.
pub(crate) fn finish(ctx: &mut Context) -> ([u8; DIGEST_LEN], usize) {
    let length = ctx.count.to_be_field();
    let pad = padding_len(ctx.count.buffered());

    let mut blocks = feed(ctx, &PADDING[..pad]);
    blocks += feed(ctx, &length);
    debug_assert_eq!(ctx.count.buffered(), 0);

    let mut out = [0u8; DIGEST_LEN];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = (ctx.state[i >> 2] >> ((3 - (i & 3)) * 8)) as u8;
    }
    (out, blocks)
}
