//! SHA-1 engine throughput smoke benchmark.
//!
//! Run with `cargo run --example perf_baseline --release` (optionally set
//! `SHA1_BENCH_ITERS` to control the iteration count).

use std::env;
use std::hint::black_box;
use std::time::{Duration, Instant};

use sha1_stream::Sha1;

const DEFAULT_ITERATIONS: usize = 10_000;

fn main() {
    let iterations = iterations_from_env();
    println!("sha1 perf baseline - iterations: {iterations}");
    println!("-----------------------------------------------------------------");

    for size in [64, 1024, 16 * 1024] {
        bench_one_shot(iterations, size);
    }
    bench_small_updates(iterations);
}

fn iterations_from_env() -> usize {
    env::var("SHA1_BENCH_ITERS")
        .ok()
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|iters| *iters > 0)
        .unwrap_or(DEFAULT_ITERATIONS)
}

fn run_bench<F>(label: &str, iterations: usize, bytes_per_op: usize, mut body: F)
where
    F: FnMut(),
{
    const WARMUP: usize = 1_000;
    for _ in 0..WARMUP {
        body();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        body();
    }
    let elapsed = start.elapsed();

    report(label, iterations, bytes_per_op, elapsed);
}

fn report(label: &str, iterations: usize, bytes_per_op: usize, elapsed: Duration) {
    let secs = elapsed.as_secs_f64().max(f64::MIN_POSITIVE);
    let ns_per_op = elapsed.as_nanos() as f64 / iterations as f64;
    let mib_per_sec = (iterations * bytes_per_op) as f64 / secs / (1024.0 * 1024.0);
    println!("{label:<32} total={elapsed:?} | {ns_per_op:>10.1} ns/op | {mib_per_sec:>8.1} MiB/s");
}

fn bench_one_shot(iterations: usize, size: usize) {
    let data = vec![0xA5u8; size];
    let mut engine = Sha1::new();

    run_bench(&format!("compute_{size}b"), iterations, size, || {
        black_box(engine.compute(black_box(&data)));
    });
}

fn bench_small_updates(iterations: usize) {
    const MESSAGE: usize = 4096;
    let data = vec![0x3Cu8; MESSAGE];
    let mut engine = Sha1::new();

    run_bench("update_13b_chunks_4kb", iterations, MESSAGE, || {
        engine.init();
        for chunk in data.chunks(13) {
            engine.update(chunk).expect("engine open");
        }
        black_box(engine.finalize().expect("engine open"));
    });
}
