//! Cross-check the engine against the RustCrypto `sha1` crate on random buffers.
//!
//! Run with `cargo run --example cross_check --release`. Environment:
//! - `SHA1_CHECK_ITERS`: number of buffers (default 10000)
//! - `SHA1_CHECK_MAX_LEN`: exclusive upper bound on buffer length (default 50000)
//! - `SHA1_CHECK_SEED`: RNG seed; random when unset
//!
//! Prints both digests per buffer and stops at the first mismatch.

use std::env;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha1::Digest as _;
use sha1_stream::{Digest, Sha1};

const DEFAULT_ITERATIONS: usize = 10_000;
const DEFAULT_MAX_LEN: usize = 50_000;

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|raw| raw.parse::<T>().ok())
}

fn main() -> ExitCode {
    let iterations = env_parse::<usize>("SHA1_CHECK_ITERS").unwrap_or(DEFAULT_ITERATIONS);
    let max_len = env_parse::<usize>("SHA1_CHECK_MAX_LEN")
        .filter(|len| *len > 0)
        .unwrap_or(DEFAULT_MAX_LEN);
    let seed = env_parse::<u64>("SHA1_CHECK_SEED").unwrap_or_else(rand::random::<u64>);

    println!("sha1 cross-check - buffers: {iterations}, max len: {max_len}, seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut engine = Sha1::new();

    for i in 0..iterations {
        let len = rng.gen_range(0..max_len);
        let mut buffer = vec![0u8; len];
        rng.fill(&mut buffer[..]);

        let ours = engine.compute(&buffer);
        let theirs = Digest::from_bytes(&sha1::Sha1::digest(&buffer))
            .expect("reference digest is 20 bytes");

        println!("{ours}");
        println!("{theirs}");

        let ok = ours == theirs;
        println!("{} {}", i + 1, if ok { "OK" } else { "ERROR" });
        if !ok {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
