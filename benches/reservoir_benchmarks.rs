use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use reservoir_algos::harness::exponential_population;
use reservoir_algos::Algorithm;

const SAMPLE_SIZE: usize = 2000;

fn bench_reservoir(c: &mut Criterion) {
    let mut group = c.benchmark_group("reservoir");
    group.sample_size(10);

    for size in [100_000usize, 1_000_000] {
        let mut rng = ChaCha8Rng::seed_from_u64(size as u64);
        let mut population = exponential_population(size, 0.1, &mut rng).unwrap();
        population.sort_by(|a, b| a.total_cmp(b));
        group.throughput(Throughput::Elements(size as u64));

        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), size),
                &population,
                |b, population| {
                    let mut rng = ChaCha8Rng::seed_from_u64(7);
                    b.iter(|| {
                        let sample = algorithm
                            .sample(population.iter().copied(), SAMPLE_SIZE, &mut rng)
                            .unwrap();
                        black_box(sample)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_small_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("reservoir_k1");
    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| black_box(algorithm.sample(0..100_000u32, 1, &mut rng).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reservoir, bench_small_k);
criterion_main!(benches);
