use criterion::{black_box, criterion_group, criterion_main, Criterion};
use planar_cluster::cluster::{Agglomerative, Clustering, Dbscan, Hdbscan, Kmeans};
use planar_cluster::{Dataset, Point};
use rand::prelude::*;

fn dataset(n: usize) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(42);
    Dataset::Random { clusters: 3 }.generate(n, 800.0, 600.0, &mut rng)
}

fn bench_clustering(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustering");
    let data = dataset(300);

    group.bench_function("kmeans_n300_k3", |b| {
        let model = Kmeans::new(3).with_seed(42);
        b.iter(|| model.labels(black_box(&data)))
    });

    group.bench_function("dbscan_n300_eps40", |b| {
        let model = Dbscan::new(40.0, 5);
        b.iter(|| model.labels(black_box(&data)))
    });

    group.bench_function("hdbscan_n300", |b| {
        let model = Hdbscan::new().with_min_samples(5).with_min_cluster_size(5);
        b.iter(|| model.labels(black_box(&data)))
    });

    group.finish();

    // Cubic in n; keep it small.
    let small = dataset(120);
    c.bench_function("agglomerative_n120_k3", |b| {
        let model = Agglomerative::new(3);
        b.iter(|| model.labels(black_box(&small)))
    });
}

criterion_group!(benches, bench_clustering);
criterion_main!(benches);
