// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_aoi::{Aoi, Callbacks, World};

const SIZE: f64 = 1000.0;

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_positions(count: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| (rng.next_f64() * SIZE, rng.next_f64() * SIZE))
        .collect()
}

/// One random-walk step per unit, clamped to the world.
fn gen_steps(positions: &[(f64, f64)], stride: f64, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(seed);
    positions
        .iter()
        .map(|&(x, y)| {
            let dx = (rng.next_f64() - 0.5) * stride;
            let dy = (rng.next_f64() - 0.5) * stride;
            ((x + dx).clamp(0.0, SIZE), (y + dy).clamp(0.0, SIZE))
        })
        .collect()
}

fn counting() -> Callbacks {
    Callbacks::new(
        |a, b| {
            black_box((a, b));
        },
        |a, b| {
            black_box((a, b));
        },
    )
}

fn populated(positions: &[(f64, f64)], range: f64) -> Aoi {
    let world = World::new(SIZE, SIZE)
        .and_then(|w| w.with_visible_range(range))
        .expect("valid world");
    let mut aoi = Aoi::new(world);
    for (i, &(x, y)) in positions.iter().enumerate() {
        aoi.add_unit(i as i64, x, y, counting()).expect("fresh id in bounds");
    }
    aoi
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for &n in &[128usize, 512, 2048] {
        let positions = gen_positions(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("populate_n{}", n), |b| {
            b.iter(|| black_box(populated(&positions, 64.0).len()));
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    for &(n, range) in &[(512usize, 32.0), (512, 128.0), (2048, 64.0)] {
        let positions = gen_positions(n, 0xBADC_F00D_1234_5678);
        let steps = gen_steps(&positions, 40.0, 0xC1A5_7E55_9999_ABCD);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_walk_n{}_r{}", n, range), |b| {
            b.iter_batched(
                || populated(&positions, range),
                |mut aoi| {
                    let mut transitions = 0;
                    for (i, &(x, y)) in steps.iter().enumerate() {
                        let diff = aoi.update_unit(i as i64, x, y).expect("live unit");
                        transitions += diff.entered.len() + diff.left.len();
                    }
                    black_box(transitions);
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for &n in &[512usize, 2048] {
        let positions = gen_positions(n, 0xFACE_FEED_CAFE_BABE);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("drain_n{}", n), |b| {
            b.iter_batched(
                || populated(&positions, 64.0),
                |mut aoi| {
                    for i in 0..n {
                        aoi.remove_unit(i as i64).expect("live unit");
                    }
                    black_box(aoi.is_empty());
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_update, bench_remove);
criterion_main!(benches);
