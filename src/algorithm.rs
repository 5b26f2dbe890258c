//! Caller-facing entry point: pick an algorithm, validate, run, summarize.
//!
//! [`Algorithm`] is what a parameter surface hands over. It deserializes from a
//! tagged map, with omitted parameters taking their defaults:
//!
//! ```rust
//! use planar_cluster::{Algorithm, Dbscan, Point};
//!
//! let json = r#"{ "algorithm": "dbscan", "epsilon": 5.0, "min_pts": 2 }"#;
//! let algorithm: Algorithm = serde_json::from_str(json).unwrap();
//! assert_eq!(algorithm, Algorithm::Dbscan(Dbscan::new(5.0, 2)));
//!
//! let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
//! let run = algorithm.run(&points).unwrap();
//! assert_eq!(run.summary.num_clusters, 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cluster::{ensure_finite, Agglomerative, Clustering, Dbscan, Hdbscan, Kmeans};
use crate::error::{Error, Result};
use crate::point::Point;
use crate::summary::ClusterSummary;

/// A clustering algorithm together with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Algorithm {
    /// K-means with a fixed cluster count.
    Kmeans(Kmeans),
    /// Density-based clustering with a fixed radius.
    Dbscan(Dbscan),
    /// MST-cut density clustering.
    Hdbscan(Hdbscan),
    /// Single-linkage agglomerative clustering.
    Agglomerative(Agglomerative),
}

/// Output of [`Algorithm::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// Copy of the input with labels applied.
    pub points: Vec<Point>,
    /// Statistics over `points`.
    pub summary: ClusterSummary,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Kmeans(Kmeans::default())
    }
}

impl Algorithm {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Kmeans(_) => "K-Means",
            Algorithm::Dbscan(_) => "DBSCAN",
            Algorithm::Hdbscan(_) => "HDBSCAN",
            Algorithm::Agglomerative(_) => "Agglomerative",
        }
    }

    /// The underlying clusterer.
    pub fn as_clustering(&self) -> &dyn Clustering {
        match self {
            Algorithm::Kmeans(a) => a,
            Algorithm::Dbscan(a) => a,
            Algorithm::Hdbscan(a) => a,
            Algorithm::Agglomerative(a) => a,
        }
    }

    /// Reject inputs and parameters the algorithms would only treat as no-ops.
    ///
    /// The algorithms accept anything; this is the stricter check for callers that
    /// want to report a problem instead of getting an unchanged point set back.
    pub fn validate(&self, points: &[Point]) -> Result<()> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        ensure_finite(points)?;

        match self {
            Algorithm::Kmeans(k) if k.k() == 0 => Err(Error::InvalidClusterCount {
                requested: 0,
                n_points: points.len(),
            }),
            Algorithm::Dbscan(d) if !(d.epsilon().is_finite() && d.epsilon() > 0.0) => {
                Err(Error::InvalidParameter {
                    name: "epsilon",
                    message: "must be positive and finite",
                })
            }
            Algorithm::Dbscan(d) if d.min_pts() == 0 => Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            }),
            Algorithm::Hdbscan(h) if h.min_samples() == 0 => Err(Error::InvalidParameter {
                name: "min_samples",
                message: "must be at least 1",
            }),
            Algorithm::Hdbscan(h) if h.min_cluster_size() == 0 => Err(Error::InvalidParameter {
                name: "min_cluster_size",
                message: "must be at least 1",
            }),
            Algorithm::Agglomerative(a) if a.n_clusters() == 0 => {
                Err(Error::InvalidClusterCount {
                    requested: 0,
                    n_points: points.len(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Validate, cluster and summarize.
    pub fn run(&self, points: &[Point]) -> Result<Run> {
        if let Err(err) = self.validate(points) {
            warn!(algorithm = self.name(), error = %err, "clustering rejected");
            return Err(err);
        }

        let points = self.as_clustering().cluster(points);
        let summary = ClusterSummary::from_points(&points);
        info!(
            algorithm = self.name(),
            n_points = summary.total_points,
            clusters = summary.num_clusters,
            noise = summary.noise_points,
            "{} found {} clusters",
            self.name(),
            summary.num_clusters
        );

        Ok(Run { points, summary })
    }
}
