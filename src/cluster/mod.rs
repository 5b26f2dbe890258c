//! Clustering algorithms for 2-D point sets.
//!
//! Every algorithm takes an ordered slice of [`Point`]s and produces one label per
//! point, in input order. A label is a cluster id (`Some(id)`, ids counted from 0) or
//! `None` for noise. Inputs are never reordered, dropped, duplicated or mutated.
//!
//! ## Algorithms
//!
//! ### K-means
//!
//! The classic algorithm: assign each point to the nearest centroid, then
//! update centroids to the mean of their points. Repeat.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! ### DBSCAN
//!
//! Density-based clustering that can discover non-convex clusters and identify
//! outliers (noise points). DBSCAN does not require specifying the number of
//! clusters in advance, but needs a neighborhood radius.
//!
//! ### HDBSCAN
//!
//! Drops the global radius: builds a minimum spanning tree over mutual reachability
//! distances and cuts it where the most points survive in clusters of at least
//! `min_cluster_size`.
//!
//! ### Agglomerative
//!
//! Bottom-up single-linkage merging until a fixed number of clusters remains.
//!
//! ## Usage
//!
//! ```rust
//! use planar_cluster::cluster::{Agglomerative, Clustering, Dbscan, Hdbscan, Kmeans};
//! use planar_cluster::Point;
//!
//! let data = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.1, 0.1),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.1, 10.1),
//! ];
//!
//! let labels = Kmeans::new(2).with_seed(42).labels(&data);
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//!
//! let labels = Dbscan::new(0.5, 1).labels(&data);
//! assert_eq!(labels, vec![Some(0), Some(0), Some(1), Some(1)]);
//!
//! let labels = Hdbscan::new().with_min_samples(1).with_min_cluster_size(2).labels(&data);
//! assert_eq!(labels.len(), data.len());
//!
//! let clustered = Agglomerative::new(2).cluster(&data);
//! assert_eq!(clustered[3].cluster, Some(1));
//! ```

mod agglomerative;
mod dbscan;
mod hdbscan;
mod kmeans;
mod traits;
mod util;

pub use agglomerative::Agglomerative;
pub use dbscan::Dbscan;
pub use hdbscan::{core_distances, mutual_reachability, Hdbscan, TreeCut, TIE_BREAK_MIN_EDGES};
pub use kmeans::{Kmeans, KmeansFit};
pub use traits::Clustering;
pub use util::Edge;

pub(crate) use traits::ensure_finite;

use crate::point::Point;

/// Label points with k-means (`max_iter` update rounds at most).
///
/// Returns a copy of `points` unchanged when `points` is empty or `k == 0`.
/// Initial centroids are random, so repeated calls may differ.
pub fn kmeans(points: &[Point], k: usize, max_iter: usize) -> Vec<Point> {
    Kmeans::new(k).with_max_iter(max_iter).cluster(points)
}

/// Label points with DBSCAN.
pub fn dbscan(points: &[Point], epsilon: f64, min_pts: usize) -> Vec<Point> {
    Dbscan::new(epsilon, min_pts).cluster(points)
}

/// Label points with the MST-cut HDBSCAN variant.
pub fn hdbscan(points: &[Point], min_cluster_size: usize, min_samples: usize) -> Vec<Point> {
    Hdbscan::new()
        .with_min_cluster_size(min_cluster_size)
        .with_min_samples(min_samples)
        .cluster(points)
}

/// Label points with single-linkage agglomerative clustering.
pub fn agglomerative(points: &[Point], n_clusters: usize) -> Vec<Point> {
    Agglomerative::new(n_clusters).cluster(points)
}
