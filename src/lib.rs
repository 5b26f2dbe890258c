//! Clustering for 2-D point sets.
//!
//! `planar-cluster` labels points in the plane with one of four classical algorithms:
//! - k-means (random initial centroids, Lloyd iterations)
//! - DBSCAN (density expansion with noise)
//! - HDBSCAN (mutual reachability MST, cut at the threshold that keeps the most points)
//! - single-linkage agglomerative clustering
//!
//! All of them take an ordered slice of [`Point`]s and return a labeled copy of the same
//! length and order. `None` in [`Point::cluster`] marks noise. Calls are independent and
//! keep no state between runs.
//!
//! ```rust
//! use planar_cluster::{dbscan, Point};
//!
//! let points: Vec<Point> = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (50.0, 50.0), (51.0, 50.0), (50.0, 51.0)]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//!
//! let labeled = dbscan(&points, 5.0, 2);
//! assert_eq!(labeled[0].cluster, Some(0));
//! assert_eq!(labeled[5].cluster, Some(1));
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod cluster;
pub mod datasets;
pub mod error;
pub mod point;
pub mod summary;

pub use algorithm::{Algorithm, Run};
pub use cluster::{
    agglomerative, dbscan, hdbscan, kmeans, Agglomerative, Clustering, Dbscan, Hdbscan, Kmeans,
    KmeansFit,
};
pub use datasets::Dataset;
pub use error::{Error, Result};
pub use point::{euclidean, Point, NOISE_LABEL};
pub use summary::ClusterSummary;
