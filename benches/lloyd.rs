use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kmeans2d::*;
use rand::prelude::*;

fn random_samples(rnd: &mut StdRng, sample_cnt: usize) -> Vec<Point<f64>> {
    (0..sample_cnt)
        .map(|_| Point::new(rnd.gen_range(0.0..100.0), rnd.gen_range(0.0..100.0)))
        .collect()
}

fn bench_lloyd(c: &mut Criterion) {
    let mut group = c.benchmark_group("lloyd");

    for &(sample_cnt, k) in &[(100, 3), (2000, 10), (20000, 32)] {
        let mut rnd = StdRng::seed_from_u64(1337);
        let kmean = KMeans::new(random_samples(&mut rnd, sample_cnt));

        group.bench_function(format!("n{}_k{}", sample_cnt, k), |b| {
            b.iter(|| {
                let conf = KMeansConfig::build().random_generator(StdRng::seed_from_u64(42)).build();
                black_box(kmean.kmeans_lloyd(k, 32, KMeans::init_random_sample, &conf))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lloyd);
criterion_main!(benches);
