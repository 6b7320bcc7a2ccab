mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use station_layout::sampling::RandomLayoutSampling;

// Antenna counts for a 38 m station at 1.5 m spacing, up to the full 256.
const COUNTS: [usize; 4] = [32, 64, 128, 256];
// Separations for a 200 m disk; the smallest ones hit the grid cap.
const SEPARATIONS: [f64; 4] = [4.0, 2.0, 1.0, 0.5];

fn sampling_station_count_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/random_layout/count");

    for &count in &COUNTS {
        let strategy = RandomLayoutSampling::new(count, 19.0, 1.5);
        group.throughput(common::antennas_throughput(count));

        let mut rng = StdRng::seed_from_u64(0x5EED_u64 ^ count as u64);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let layout = strategy.generate(&mut rng).expect("valid parameters");
                black_box(layout.len());
            });
        });
    }

    group.finish();
}

fn sampling_separation_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/random_layout/separation");

    for &sep in &SEPARATIONS {
        let strategy = RandomLayoutSampling::new(500, 100.0, sep);
        group.throughput(common::antennas_throughput(strategy.count));

        let mut rng = StdRng::seed_from_u64(0xC0FFEE_u64 ^ sep.to_bits());

        group.bench_with_input(BenchmarkId::from_parameter(sep), &sep, |b, _| {
            b.iter(|| {
                let layout = strategy.generate(&mut rng).expect("valid parameters");
                black_box(layout.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = sampling_station_count_benches, sampling_separation_benches
}
criterion_main!(benches);
