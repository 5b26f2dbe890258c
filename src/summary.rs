//! Per-run statistics over a labeled point set.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Cluster counts for a labeled point set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClusterSummary {
    /// Number of points.
    pub total_points: usize,
    /// Number of distinct cluster ids.
    pub num_clusters: usize,
    /// Points without a cluster.
    pub noise_points: usize,
    /// `(cluster id, size)` ascending by id.
    pub cluster_sizes: Vec<(usize, usize)>,
}

impl ClusterSummary {
    /// Summarize the `cluster` fields of `points`.
    pub fn from_points(points: &[Point]) -> Self {
        Self::from_labels(points.iter().map(|p| p.cluster))
    }

    /// Summarize raw labels.
    pub fn from_labels(labels: impl IntoIterator<Item = Option<usize>>) -> Self {
        let mut sizes: BTreeMap<usize, usize> = BTreeMap::new();
        let mut total_points = 0;
        let mut noise_points = 0;
        for label in labels {
            total_points += 1;
            match label {
                Some(c) => *sizes.entry(c).or_insert(0) += 1,
                None => noise_points += 1,
            }
        }

        Self {
            total_points,
            num_clusters: sizes.len(),
            noise_points,
            cluster_sizes: sizes.into_iter().collect(),
        }
    }

    /// Points assigned to some cluster.
    pub fn clustered_points(&self) -> usize {
        self.total_points - self.noise_points
    }
}

impl fmt::Display for ClusterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total points: {}", self.total_points)?;
        writeln!(f, "Clusters found: {}", self.num_clusters)?;
        if self.noise_points > 0 {
            writeln!(f, "Noise points: {}", self.noise_points)?;
        }
        for (cluster, size) in &self.cluster_sizes {
            writeln!(f, "  cluster {}: {} points", cluster + 1, size)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_clusters_and_noise() {
        let summary = ClusterSummary::from_labels([Some(1), None, Some(0), Some(1), None]);
        assert_eq!(summary.total_points, 5);
        assert_eq!(summary.num_clusters, 2);
        assert_eq!(summary.noise_points, 2);
        assert_eq!(summary.clustered_points(), 3);
        assert_eq!(summary.cluster_sizes, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn unlabeled_points_count_as_noise() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let summary = ClusterSummary::from_points(&points);
        assert_eq!(summary.num_clusters, 0);
        assert_eq!(summary.noise_points, 2);
    }

    #[test]
    fn display_lists_sizes_one_based() {
        let summary = ClusterSummary::from_labels([Some(0), Some(0), None]);
        let text = summary.to_string();
        assert!(text.contains("Clusters found: 1"));
        assert!(text.contains("Noise points: 1"));
        assert!(text.contains("cluster 1: 2 points"));
    }
}
