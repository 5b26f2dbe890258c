//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN is a density-based clustering algorithm that groups points based on
//! neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors.
//! - **MinPts**: Minimum number of *other* points within ε for a point to be "core".
//! - **Core point**: Has at least MinPts neighbors within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. Scan points in input order, skipping points that already carry a cluster id:
//!    - Find neighbors within ε
//!    - If |neighbors| < MinPts, leave it as noise (may change later)
//!    - Else start a new cluster and expand from the neighbors
//!
//! 2. Expansion: for each queued point:
//!    - If it has no cluster yet, it joins the current one
//!    - If it is core, queue its unlabeled, not yet queued neighbors
//!
//! Noise is provisional until the scan completes: a point found too sparse when it is
//! scanned can still be claimed as a border point by a later cluster.
//!
//! Cluster ids start at 0 and follow discovery order.
//!
//! ## Complexity
//!
//! - **Time**: O(n²). Every neighborhood query is a linear scan, which is fine for a
//!   few thousand points and does not scale beyond that.
//! - **Space**: O(n) for labels.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::Clustering;
use super::util::region_query;
use crate::point::Point;

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighborhood.
    epsilon: f64,
    /// Minimum number of neighbors for core point classification.
    min_pts: usize,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum number of other points within `epsilon` for a point to be core.
    pub fn new(epsilon: f64, min_pts: usize) -> Self {
        Self { epsilon, min_pts }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum neighbors for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Configured neighborhood radius.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Configured core threshold.
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    /// Expand cluster `cluster_id` from the core point `seed`.
    fn expand_cluster(
        &self,
        points: &[Point],
        seed: usize,
        neighbors: Vec<usize>,
        labels: &mut [Option<usize>],
        queued: &mut [bool],
        cluster_id: usize,
    ) {
        labels[seed] = Some(cluster_id);
        queued[seed] = true;
        for &nb in &neighbors {
            queued[nb] = true;
        }

        let mut frontier = neighbors;
        let mut next = 0;
        while next < frontier.len() {
            let idx = frontier[next];
            next += 1;

            match labels[idx] {
                None => labels[idx] = Some(cluster_id),
                // Border point already claimed by an earlier cluster.
                Some(other) if other != cluster_id => continue,
                Some(_) => {}
            }

            let reach = region_query(points, idx, self.epsilon);
            if reach.len() >= self.min_pts {
                for nn in reach {
                    if !queued[nn] && labels[nn].is_none() {
                        queued[nn] = true;
                        frontier.push(nn);
                    }
                }
            }
        }
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(40.0, 5)
    }
}

impl Clustering for Dbscan {
    fn labels(&self, points: &[Point]) -> Vec<Option<usize>> {
        let n = points.len();
        let mut labels: Vec<Option<usize>> = vec![None; n];
        let mut queued = vec![false; n];
        let mut cluster_id = 0usize;

        for idx in 0..n {
            if labels[idx].is_some() {
                continue;
            }

            let neighbors = region_query(points, idx, self.epsilon);
            if neighbors.len() < self.min_pts {
                // Noise for now; a later expansion may still claim it.
                continue;
            }

            self.expand_cluster(points, idx, neighbors, &mut labels, &mut queued, cluster_id);
            cluster_id += 1;
        }

        debug!(
            n_points = n,
            epsilon = self.epsilon,
            min_pts = self.min_pts,
            clusters = cluster_id,
            noise = labels.iter().filter(|l| l.is_none()).count(),
            "DBSCAN finished"
        );

        labels
    }

    /// DBSCAN discovers clusters dynamically, so this returns 0.
    fn n_clusters(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_dbscan_two_clusters() {
        let data = pts(&[
            // Cluster 1: around (0, 0)
            (0.0, 0.0),
            (0.1, 0.0),
            (0.0, 0.1),
            (0.1, 0.1),
            (0.05, 0.05),
            // Cluster 2: around (5, 5)
            (5.0, 5.0),
            (5.1, 5.0),
            (5.0, 5.1),
            (5.1, 5.1),
            (5.05, 5.05),
        ]);

        let labels = Dbscan::new(0.3, 3).labels(&data);

        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], Some(0));
        assert_eq!(labels[5], Some(1));
        assert!(labels[..5].iter().all(|&l| l == Some(0)));
        assert!(labels[5..].iter().all(|&l| l == Some(1)));
    }

    #[test]
    fn test_dbscan_with_noise() {
        let data = pts(&[
            (0.0, 0.0),
            (0.1, 0.0),
            (0.0, 0.1),
            (0.1, 0.1),
            // Outlier
            (100.0, 100.0),
            (5.0, 5.0),
            (5.1, 5.0),
            (5.0, 5.1),
            (5.1, 5.1),
        ]);

        let labels = Dbscan::new(0.3, 3).labels(&data);

        assert!(labels[4].is_none());
        for (i, label) in labels.iter().enumerate() {
            if i != 4 {
                assert!(label.is_some());
            }
        }
    }

    #[test]
    fn test_dbscan_all_noise() {
        let data = pts(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);
        let labels = Dbscan::new(0.5, 1).labels(&data);
        assert!(labels.iter().all(Option::is_none));
    }

    #[test]
    fn test_dbscan_chain() {
        // Chain of points - DBSCAN should connect them
        let data: Vec<Point> = (0..10).map(|i| Point::new(i as f64 * 0.3, 0.0)).collect();
        let labels = Dbscan::new(0.5, 2).labels(&data);

        // Endpoints have a single neighbor, but are reached as border points.
        assert!(labels.iter().all(|&l| l == Some(0)));
    }

    #[test]
    fn test_dbscan_empty() {
        assert!(Dbscan::new(0.5, 3).labels(&[]).is_empty());
    }

    #[test]
    fn early_noise_is_promoted_to_border() {
        // Point 0 has one neighbor (point 1) and is scanned first, so it starts as noise.
        // Point 1 is core and later claims it.
        let data = pts(&[(-1.0, 0.0), (0.0, 0.0), (0.5, 0.0), (0.0, 0.5)]);
        let labels = Dbscan::new(1.0, 3).labels(&data);
        assert_eq!(labels, vec![Some(0); 4]);
    }

    #[test]
    fn border_point_keeps_first_cluster() {
        // Point 2 sits within reach of both dense groups but is not core itself.
        let data = pts(&[
            (0.0, 0.0),
            (0.0, 0.5),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 0.5),
            (0.0, -0.5),
            (2.0, -0.5),
        ]);
        let labels = Dbscan::new(1.0, 3).labels(&data);
        assert_eq!(labels[0], Some(0));
        assert_eq!(labels[2], Some(0));
        assert_eq!(labels[3], Some(1));
        assert_eq!(labels[4], Some(1));
        assert_eq!(labels[6], Some(1));
    }

    #[test]
    fn cluster_does_not_mutate_input() {
        let data = pts(&[(0.0, 0.0), (0.5, 0.0), (9.0, 9.0)]);
        let before = data.clone();
        let out = Dbscan::new(1.0, 1).cluster(&data);
        assert_eq!(data, before);
        assert_eq!(out[0].cluster, Some(0));
        assert_eq!(out[2].cluster, None);
        assert_eq!((out[2].x, out[2].y), (9.0, 9.0));
    }
}
