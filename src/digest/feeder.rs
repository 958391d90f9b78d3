//! Block assembly for streamed input.

use super::BLOCK_SIZE;
use super::compress::compress;
use super::context::Context;

/// Absorb `data` into `ctx`, returning how many blocks were compressed.
///
/// A partial block already sitting in the buffer is topped up and compressed
/// first; every following full block is compressed straight from `data`
/// without being copied. Whatever is left (< 64 bytes) lands in the buffer.
pub(crate) fn feed(ctx: &mut Context, data: &[u8]) -> usize {
    let mut j = ctx.count.buffered();
    ctx.count.add_bytes(data.len());

    let mut input = data;
    let mut blocks = 0;

    if j + input.len() >= BLOCK_SIZE {
        let (head, rest) = input.split_at(BLOCK_SIZE - j);
        ctx.buffer[j..].copy_from_slice(head);
        compress(&mut ctx.state, &ctx.buffer);
        blocks += 1;
        input = rest;

        while let Some((block, rest)) = input.split_first_chunk::<BLOCK_SIZE>() {
            compress(&mut ctx.state, block);
            blocks += 1;
            input = rest;
        }
        j = 0;
    }

    ctx.buffer[j..j + input.len()].copy_from_slice(input);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::INITIAL_STATE;

    #[test]
    fn short_input_stays_buffered() {
        let mut ctx = Context::new();
        assert_eq!(feed(&mut ctx, b"hello"), 0);
        assert_eq!(ctx.state, INITIAL_STATE);
        assert_eq!(ctx.count.buffered(), 5);
        assert_eq!(&ctx.buffer[..5], b"hello");
        assert_eq!(ctx.count.bits(), 40);
    }

    #[test]
    fn exactly_one_block_compresses_once() {
        let mut ctx = Context::new();
        assert_eq!(feed(&mut ctx, &[0x5Au8; BLOCK_SIZE]), 1);
        assert_ne!(ctx.state, INITIAL_STATE);
        assert_eq!(ctx.count.buffered(), 0);
    }

    #[test]
    fn partial_then_long_input_carries_tail() {
        let mut ctx = Context::new();
        feed(&mut ctx, &[1u8; 10]);
        let data: Vec<u8> = (0..200u8).collect();
        // 10 + 200 = 210 bytes: three blocks, 18 bytes left over.
        assert_eq!(feed(&mut ctx, &data), 3);
        assert_eq!(ctx.count.buffered(), 18);
        assert_eq!(&ctx.buffer[..18], &data[182..]);
        assert_eq!(ctx.count.bits(), 210 * 8);
    }

    #[test]
    fn split_feed_matches_single_feed() {
        let data: Vec<u8> = (0..300u32).map(|i| (i * 13) as u8).collect();

        let mut whole = Context::new();
        feed(&mut whole, &data);

        let mut split = Context::new();
        for chunk in data.chunks(7) {
            feed(&mut split, chunk);
        }

        assert_eq!(whole.state, split.state);
        assert_eq!(whole.count, split.count);
        let tail = whole.count.buffered();
        assert_eq!(whole.buffer[..tail], split.buffer[..tail]);
    }

    #[test]
    fn empty_input_is_noop() {
        let mut ctx = Context::new();
        feed(&mut ctx, b"abc");
        assert_eq!(feed(&mut ctx, &[]), 0);
        assert_eq!(ctx.count.bits(), 24);
        assert_eq!(ctx.count.buffered(), 3);
    }
}
