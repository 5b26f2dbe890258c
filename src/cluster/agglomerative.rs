//! Single-linkage agglomerative clustering.
//!
//! Start from one singleton cluster per point and repeatedly merge the closest pair of
//! clusters until `n_clusters` remain. The distance between two clusters is the
//! smallest distance between any of their points (single linkage).
//!
//! Pairs are scanned in ascending `(i, j)` order over the active cluster list and the
//! first closest pair wins ties. The second cluster is folded into the first and
//! dropped from the list, so labels are positions in the final list.
//!
//! # Complexity
//!
//! O(n²) memory for the cluster distance table and O(n³) time in the worst case
//! (O(n²) pairs scanned for each of up to n merges). Only suitable for small inputs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::Clustering;
use super::util;
use crate::point::Point;

/// Single-linkage agglomerative clustering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agglomerative {
    n_clusters: usize,
}

impl Agglomerative {
    /// Create a clusterer that stops at `n_clusters` clusters.
    ///
    /// The count is clamped to `[1, n]` for an input of `n` points.
    pub fn new(n_clusters: usize) -> Self {
        Self { n_clusters }
    }

    /// Set the target number of clusters.
    pub fn with_n_clusters(mut self, n_clusters: usize) -> Self {
        self.n_clusters = n_clusters;
        self
    }
}

impl Default for Agglomerative {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Clustering for Agglomerative {
    fn labels(&self, points: &[Point]) -> Vec<Option<usize>> {
        let n = points.len();
        if n == 0 {
            return Vec::new();
        }

        let target = self.n_clusters.clamp(1, n);
        if target != self.n_clusters {
            debug!(
                requested = self.n_clusters,
                clamped = target,
                "agglomerative cluster count clamped to [1, n]"
            );
        }

        // `link[a * n + b]`: single-linkage distance between the clusters in slots a and b.
        let mut link = util::pairwise_distances(points);
        let mut members: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
        // Slots of live clusters, in list order.
        let mut active: Vec<usize> = (0..n).collect();

        while active.len() > target {
            let mut best = f64::INFINITY;
            let (mut merge_i, mut merge_j) = (0, 1);
            for i in 0..active.len() {
                for j in (i + 1)..active.len() {
                    let d = link[active[i] * n + active[j]];
                    if d < best {
                        best = d;
                        merge_i = i;
                        merge_j = j;
                    }
                }
            }

            let (keep, gone) = (active[merge_i], active[merge_j]);
            let absorbed = std::mem::take(&mut members[gone]);
            members[keep].extend(absorbed);
            for &other in &active {
                let d = link[keep * n + other].min(link[gone * n + other]);
                link[keep * n + other] = d;
                link[other * n + keep] = d;
            }
            active.remove(merge_j);
        }

        debug!(
            n_points = n,
            clusters = active.len(),
            merges = n - active.len(),
            "agglomerative clustering finished"
        );

        let mut labels = vec![None; n];
        for (label, &slot) in active.iter().enumerate() {
            for &p in &members[slot] {
                labels[p] = Some(label);
            }
        }
        labels
    }

    fn n_clusters(&self) -> usize {
        self.n_clusters
    }
}
