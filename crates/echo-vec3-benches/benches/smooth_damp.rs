// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use echo_vec3::{smooth_damp, SmoothDampState, Vec3};

fn build_followers(n: usize) -> Vec<(Vec3, SmoothDampState)> {
    (0..n)
        .map(|i| (Vec3::new(i as f64, 0.0, -(i as f64)), SmoothDampState::new()))
        .collect()
}

fn bench_smooth_damp(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth_damp_step");
    let target = Vec3::new(50.0, 10.0, 5.0);
    for &n in &[1usize, 100, 10_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || build_followers(n),
                |mut followers| {
                    for (pos, state) in &mut followers {
                        *pos = smooth_damp(*pos, black_box(target), state, 0.3, 1.0 / 60.0, 20.0);
                    }
                    followers
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_smooth_damp);
criterion_main!(benches);
