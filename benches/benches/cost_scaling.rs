//! riptide Cost-Scaling Criterion Benchmark
//!
//! Measures how derivation latency tracks the three cost knobs. Expect
//! roughly linear scaling in N and r, and sublinear wall-clock scaling in p
//! while the rayon pool has idle cores.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use riptide::{derive, Params, Prf};
use std::hint::black_box;

const PASSWORD: &[u8] = b"pleaseletmein";
const SALT: &[u8] = b"SodiumChloride";

// =============================================================================
// BENCHMARK 1: CPU/MEMORY COST (N)
// =============================================================================

/// Doubling N doubles both the snapshot table and the mixing work.
fn bench_cost_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Cost-N");
    group.sample_size(20);

    for log_n in [10u32, 12, 14] {
        let params = Params::new(1 << log_n, 8, 1, 64, Prf::Sha256).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("2^{log_n}")),
            &params,
            |b, params| b.iter(|| derive(black_box(PASSWORD), black_box(SALT), params).unwrap()),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BLOCK SIZE (r)
// =============================================================================

/// r widens every lane (and every snapshot) without adding steps.
fn bench_block_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Block-r");
    group.sample_size(20);

    for r in [1u32, 4, 8, 16] {
        let params = Params::new(4096, r, 1, 64, Prf::Sha256).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(r), &params, |b, params| {
            b.iter(|| derive(black_box(PASSWORD), black_box(SALT), params).unwrap())
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: LANES (p)
// =============================================================================

/// Lanes are independent, so the multithread feature should hide most of
/// the extra work until the pool saturates.
fn bench_lanes(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Lanes-p");
    group.sample_size(20);

    for p in [1u32, 2, 4, 8] {
        let params = Params::new(4096, 8, p, 64, Prf::Sha256).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(p), &params, |b, params| {
            b.iter(|| derive(black_box(PASSWORD), black_box(SALT), params).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cost_factor, bench_block_size, bench_lanes);
criterion_main!(benches);
