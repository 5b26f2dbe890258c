//! All four algorithms on a generated 2D dataset.

use planar_cluster::cluster::{Agglomerative, Dbscan, Hdbscan, Kmeans};
use planar_cluster::{Algorithm, Dataset, Point};
use rand::prelude::*;

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let mut rng = StdRng::seed_from_u64(7);
    let data: Vec<Point> = Dataset::Blobs.generate(80, 800.0, 600.0, &mut rng);

    let algorithms = [
        Algorithm::Kmeans(Kmeans::new(4).with_seed(42)),
        Algorithm::Dbscan(Dbscan::new(40.0, 5)),
        Algorithm::Hdbscan(Hdbscan::new().with_min_samples(5).with_min_cluster_size(5)),
        Algorithm::Agglomerative(Agglomerative::new(4)),
    ];

    for algorithm in algorithms {
        match algorithm.run(&data) {
            Ok(run) => {
                println!("=== {} ===", algorithm.name());
                print!("{}", run.summary);
                for (i, p) in run.points.iter().enumerate().take(8) {
                    let tag = match p.cluster {
                        Some(c) => format!("cluster {c}"),
                        None => "NOISE".to_string(),
                    };
                    println!("  point {:2} ({:6.1}, {:6.1}) => {}", i, p.x, p.y, tag);
                }
                println!();
            }
            Err(err) => eprintln!("{} failed: {err}", algorithm.name()),
        }
    }
}
