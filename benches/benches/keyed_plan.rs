// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use thicket_keyed::{longest_increasing_subsequence, plan};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

/// Fisher-Yates shuffle of `0..n`.
fn shuffled(n: usize, rng: &mut Rng) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..n as u32).collect();
    for i in (1..n).rev() {
        keys.swap(i, rng.below(i + 1));
    }
    keys
}

/// `0..n` with `swaps` random transpositions.
fn nearly_sorted(n: usize, swaps: usize, rng: &mut Rng) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..n as u32).collect();
    for _ in 0..swaps {
        let (a, b) = (rng.below(n), rng.below(n));
        keys.swap(a, b);
    }
    keys
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    for &n in &[100_usize, 1_000, 10_000] {
        let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
        let previous: Vec<u32> = (0..n as u32).collect();
        let shuffled_next = shuffled(n, &mut rng);
        let nearly_next = nearly_sorted(n, n / 100 + 1, &mut rng);
        // Drop every third key and add as many fresh ones.
        let churn_next: Vec<u32> = (0..n as u32)
            .map(|k| if k % 3 == 0 { k + n as u32 } else { k })
            .collect();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("unchanged", n), &n, |b, _| {
            b.iter(|| black_box(plan(black_box(&previous), black_box(&previous))));
        });
        group.bench_with_input(BenchmarkId::new("nearly_sorted", n), &n, |b, _| {
            b.iter(|| black_box(plan(black_box(&previous), black_box(&nearly_next))));
        });
        group.bench_with_input(BenchmarkId::new("shuffled", n), &n, |b, _| {
            b.iter(|| black_box(plan(black_box(&previous), black_box(&shuffled_next))));
        });
        group.bench_with_input(BenchmarkId::new("churn", n), &n, |b, _| {
            b.iter(|| black_box(plan(black_box(&previous), black_box(&churn_next))));
        });
    }
    group.finish();
}

fn bench_lis(c: &mut Criterion) {
    let mut group = c.benchmark_group("lis");
    for &n in &[1_000_usize, 100_000] {
        let mut rng = Rng::new(42);
        let seq = shuffled(n, &mut rng);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("shuffled", n), &seq, |b, seq| {
            b.iter(|| black_box(longest_increasing_subsequence(black_box(seq))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plan, bench_lis);
criterion_main!(benches);
