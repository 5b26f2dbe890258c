//! HDBSCAN-style clustering: density-aware MST cut with size filtering.
//!
//! Like HDBSCAN (Campello, Moulavi, Sander 2013), this replaces DBSCAN's global epsilon
//! with a minimum spanning tree over mutual reachability distances. Instead of the
//! condensed-tree stability extraction, clusters are read off by cutting the tree at
//! a handful of candidate thresholds and keeping the cut that retains the most structure.
//!
//! # Algorithm Outline
//!
//! 1. **Core distance**: for each point, the distance to its `min_samples`-th nearest
//!    other point. Infinite when fewer than `min_samples` other points exist.
//!
//! 2. **Mutual reachability distance**: for each pair (i, j):
//!    `mrd(i, j) = max(core_dist[i], core_dist[j], dist(i, j))`.
//!    This inflates distances in sparse regions so they don't create spurious links.
//!
//! 3. **MST on mutual reachability graph**: Prim's algorithm from point 0 (O(n²)),
//!    lowest index first on ties.
//!
//! 4. **Threshold search**: sort the MST weights and take candidate thresholds at fixed
//!    percentile ranks (40th to 80th, plus the 90th once the tree has at least
//!    [`TIE_BREAK_MIN_EDGES`] edges). For each threshold, union every edge at or below
//!    it (infinite edges join only at an infinite threshold); components with at least
//!    `min_cluster_size` points become clusters (ids in order of their lowest point
//!    index), the rest is noise.
//!
//! 5. **Selection**: keep the cut with the most non-noise points, then the most
//!    clusters. Ties go to the lower threshold.
//!
//! A single fixed cut is brittle across datasets of different density; searching a few
//! cuts and keeping the one that preserves the most points is the central heuristic here.
//! The percentile list is configurable through [`Hdbscan::with_cut_percentiles`].
//!
//! # Complexity
//!
//! O(n²) time and space for the dense pairwise distances.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::Clustering;
use super::util::{self, Edge, UnionFind};
use crate::point::Point;

/// Minimum number of MST edges before the tie-break percentile is added to the search.
pub const TIE_BREAK_MIN_EDGES: usize = 10;

/// HDBSCAN clustering algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hdbscan {
    min_cluster_size: usize,
    min_samples: usize,
    cut_percentiles: Vec<f64>,
    tie_break_percentile: f64,
}

/// One evaluated cut of the spanning tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeCut {
    /// Edges with weight at or below this value were joined.
    pub threshold: f64,
    /// Per-point labels (`None` = noise).
    pub labels: Vec<Option<usize>>,
    /// Number of points assigned to a cluster.
    pub non_noise: usize,
    /// Number of clusters formed.
    pub num_clusters: usize,
}

impl TreeCut {
    fn score(&self) -> (usize, usize) {
        (self.non_noise, self.num_clusters)
    }
}

impl Hdbscan {
    /// Create a new HDBSCAN clusterer with default parameters.
    ///
    /// Defaults: `min_cluster_size = 5`, `min_samples = 5`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `min_samples` (k for core distance computation). `0` behaves like `1`.
    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Set `min_cluster_size` (smallest component that counts as a cluster).
    pub fn with_min_cluster_size(mut self, min_cluster_size: usize) -> Self {
        self.min_cluster_size = min_cluster_size;
        self
    }

    /// Replace the percentile ranks (in `[0, 1]`) at which candidate cuts are taken.
    pub fn with_cut_percentiles(mut self, percentiles: Vec<f64>) -> Self {
        self.cut_percentiles = percentiles;
        self
    }

    /// Set the extra high percentile used once the tree is large enough.
    pub fn with_tie_break_percentile(mut self, percentile: f64) -> Self {
        self.tie_break_percentile = percentile;
        self
    }

    /// Configured minimum cluster size.
    pub fn min_cluster_size(&self) -> usize {
        self.min_cluster_size
    }

    /// Configured core-distance neighbor rank.
    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    /// Minimum spanning tree over mutual reachability distances, in Prim order.
    pub fn mst(&self, points: &[Point]) -> Vec<Edge> {
        let n = points.len();
        let dists = util::pairwise_distances(points);
        let core = core_distances_from_matrix(&dists, n, self.min_samples);
        util::prim_mst(n, |i, j| mutual_reachability(dists[i * n + j], core[i], core[j]))
    }

    /// Candidate cut thresholds for ascending MST weights, ascending and deduplicated.
    ///
    /// Infinite weights take part like any other, so a tree whose core distances are all
    /// infinite is cut at infinity. With no percentiles configured the largest weight is
    /// used.
    pub fn candidate_thresholds(&self, sorted_weights: &[f64]) -> Vec<f64> {
        let m = sorted_weights.len();
        if m == 0 {
            return Vec::new();
        }

        let at = |p: f64| sorted_weights[((p.clamp(0.0, 1.0) * m as f64) as usize).min(m - 1)];

        let mut thresholds: Vec<f64> = self.cut_percentiles.iter().map(|&p| at(p)).collect();
        if m >= TIE_BREAK_MIN_EDGES {
            thresholds.push(at(self.tie_break_percentile));
        }
        if thresholds.is_empty() {
            thresholds.push(sorted_weights[m - 1]);
        }
        thresholds.sort_by(f64::total_cmp);
        thresholds.dedup();
        thresholds
    }

    /// Evaluate every candidate cut, best first by (non-noise points, clusters).
    ///
    /// Mostly useful for inspecting the search; [`Clustering::labels`] returns the
    /// labels of the first entry.
    pub fn ranked_cuts(&self, points: &[Point]) -> Vec<TreeCut> {
        let n = points.len();
        if n == 0 {
            return Vec::new();
        }

        let mut mst = self.mst(points);
        mst.sort_by(|a, b| a.2.total_cmp(&b.2));
        let weights: Vec<f64> = mst.iter().map(|e| e.2).collect();

        let thresholds = self.candidate_thresholds(&weights);
        let mut cuts: Vec<TreeCut> = if thresholds.is_empty() {
            // Single point, no edges.
            vec![cut_tree(n, &mst, f64::NEG_INFINITY, self.min_cluster_size)]
        } else {
            thresholds
                .into_iter()
                .map(|t| cut_tree(n, &mst, t, self.min_cluster_size))
                .collect()
        };

        for cut in &cuts {
            debug!(
                threshold = cut.threshold,
                non_noise = cut.non_noise,
                clusters = cut.num_clusters,
                "HDBSCAN candidate cut"
            );
        }

        // Stable sort keeps lower thresholds ahead on equal scores.
        cuts.sort_by(|a, b| b.score().cmp(&a.score()));
        cuts
    }
}

impl Default for Hdbscan {
    fn default() -> Self {
        Self {
            min_cluster_size: 5,
            min_samples: 5,
            cut_percentiles: vec![0.4, 0.5, 0.6, 0.7, 0.8],
            tie_break_percentile: 0.9,
        }
    }
}

impl Clustering for Hdbscan {
    fn labels(&self, points: &[Point]) -> Vec<Option<usize>> {
        match self.ranked_cuts(points).into_iter().next() {
            Some(best) => {
                debug!(
                    n_points = points.len(),
                    threshold = best.threshold,
                    clusters = best.num_clusters,
                    noise = points.len() - best.non_noise,
                    "HDBSCAN selected cut"
                );
                best.labels
            }
            None => Vec::new(),
        }
    }

    fn n_clusters(&self) -> usize {
        0
    }
}

/// Core distance of every point: distance to its `min_samples`-th nearest other point,
/// or infinity when there are fewer than `min_samples` other points.
pub fn core_distances(points: &[Point], min_samples: usize) -> Vec<f64> {
    let dists = util::pairwise_distances(points);
    core_distances_from_matrix(&dists, points.len(), min_samples)
}

fn core_distances_from_matrix(dists: &[f64], n: usize, min_samples: usize) -> Vec<f64> {
    let k = min_samples.max(1);
    if n == 0 || n - 1 < k {
        return vec![f64::INFINITY; n];
    }

    let mut core = Vec::with_capacity(n);
    for i in 0..n {
        let mut row: Vec<f64> = (0..n)
            .filter(|&j| j != i)
            .map(|j| dists[i * n + j])
            .collect();
        row.sort_by(f64::total_cmp);
        core.push(row[k - 1]);
    }
    core
}

/// Mutual reachability distance: `max(dist, core_a, core_b)`.
#[inline]
pub fn mutual_reachability(dist: f64, core_a: f64, core_b: f64) -> f64 {
    dist.max(core_a).max(core_b)
}

/// Join every MST edge with weight `<= threshold` and label the components.
fn cut_tree(n: usize, mst: &[Edge], threshold: f64, min_cluster_size: usize) -> TreeCut {
    let mut uf = UnionFind::new(n);
    for &(a, b, w) in mst {
        if w <= threshold {
            uf.union(a, b);
        }
    }

    let mut root_label: Vec<Option<usize>> = vec![None; n];
    let mut labels: Vec<Option<usize>> = vec![None; n];
    let mut num_clusters = 0usize;
    let mut non_noise = 0usize;

    for i in 0..n {
        if uf.component_size(i) < min_cluster_size {
            continue;
        }
        let root = uf.find(i);
        let label = *root_label[root].get_or_insert_with(|| {
            num_clusters += 1;
            num_clusters - 1
        });
        labels[i] = Some(label);
        non_noise += 1;
    }

    TreeCut {
        threshold,
        labels,
        non_noise,
        num_clusters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(at: (f64, f64), n: usize) -> Vec<Point> {
        vec![Point::new(at.0, at.1); n]
    }

    fn line(xs: &[f64]) -> Vec<Point> {
        xs.iter().map(|&x| Point::new(x, 0.0)).collect()
    }

    #[test]
    fn two_well_separated_groups() {
        let mut data = stack((0.0, 0.0), 5);
        data.extend(stack((100.0, 100.0), 5));

        let labels = Hdbscan::new()
            .with_min_samples(2)
            .with_min_cluster_size(3)
            .labels(&data);

        assert_eq!(&labels[..5], &[Some(0); 5]);
        assert_eq!(&labels[5..], &[Some(1); 5]);
    }

    #[test]
    fn far_outlier_is_noise() {
        let mut data = stack((0.0, 0.0), 6);
        data.extend(stack((100.0, 0.0), 6));
        data.push(Point::new(50.0, 300.0));

        let labels = Hdbscan::new()
            .with_min_samples(2)
            .with_min_cluster_size(3)
            .labels(&data);

        assert_eq!(&labels[..6], &[Some(0); 6]);
        assert_eq!(&labels[6..12], &[Some(1); 6]);
        assert_eq!(labels[12], None);
    }

    #[test]
    fn prefers_cut_with_more_clusters_on_equal_coverage() {
        let mut data = stack((0.0, 0.0), 6);
        data.extend(stack((100.0, 0.0), 6));
        data.push(Point::new(50.0, 300.0));

        let cuts = Hdbscan::new()
            .with_min_samples(2)
            .with_min_cluster_size(3)
            .ranked_cuts(&data);

        assert_eq!(cuts.len(), 2);
        assert_eq!((cuts[0].non_noise, cuts[0].num_clusters), (12, 2));
        assert_eq!((cuts[1].non_noise, cuts[1].num_clusters), (12, 1));
        assert_eq!(cuts[0].threshold, 0.0);
        assert_eq!(cuts[1].threshold, 100.0);
    }

    #[test]
    fn identical_points_form_one_cluster() {
        let data = stack((3.0, 4.0), 8);
        for min_samples in 1..8 {
            let labels = Hdbscan::new()
                .with_min_samples(min_samples)
                .with_min_cluster_size(8)
                .labels(&data);
            assert_eq!(labels, vec![Some(0); 8], "min_samples {min_samples}");
        }
    }

    #[test]
    fn min_cluster_size_one_never_yields_noise() {
        let data = line(&[0.0, 1.0, 5.0, 30.0, 31.0, 200.0]);
        let labels = Hdbscan::new()
            .with_min_samples(2)
            .with_min_cluster_size(1)
            .labels(&data);
        assert!(labels.iter().all(Option::is_some));
    }

    #[test]
    fn empty_input() {
        assert!(Hdbscan::new().labels(&[]).is_empty());
    }

    #[test]
    fn single_point() {
        let data = vec![Point::new(1.0, 1.0)];
        assert_eq!(Hdbscan::new().with_min_cluster_size(2).labels(&data), vec![None]);
        assert_eq!(
            Hdbscan::new().with_min_cluster_size(1).labels(&data),
            vec![Some(0)]
        );
    }

    #[test]
    fn too_few_points_for_min_samples_join_at_infinity() {
        let data = line(&[0.0, 0.1, 0.2]);
        let hdbscan = Hdbscan::new().with_min_samples(5);

        let cuts = hdbscan.clone().with_min_cluster_size(2).ranked_cuts(&data);
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].threshold, f64::INFINITY);
        assert_eq!(cuts[0].labels, vec![Some(0); 3]);

        let labels = hdbscan.clone().with_min_cluster_size(1).labels(&data);
        assert_eq!(labels, vec![Some(0); 3]);

        let labels = hdbscan.with_min_cluster_size(4).labels(&data);
        assert_eq!(labels, vec![None; 3]);
    }

    #[test]
    fn empty_percentiles_cut_at_largest_weight() {
        let hdbscan = Hdbscan::new().with_cut_percentiles(Vec::new());
        assert_eq!(hdbscan.candidate_thresholds(&[1.0, 2.0]), vec![2.0]);

        let data = line(&[0.0, 1.0, 3.0]);
        let labels = hdbscan
            .with_min_samples(1)
            .with_min_cluster_size(3)
            .labels(&data);
        assert_eq!(labels, vec![Some(0); 3]);
    }

    #[test]
    fn core_distance_ranks() {
        let data = line(&[0.0, 1.0, 3.0]);
        assert_eq!(core_distances(&data, 1), vec![1.0, 1.0, 2.0]);
        assert_eq!(core_distances(&data, 2), vec![3.0, 2.0, 3.0]);
        assert!(core_distances(&data, 3).iter().all(|c| c.is_infinite()));
    }

    #[test]
    fn mutual_reachability_takes_max() {
        assert_eq!(mutual_reachability(1.0, 2.0, 0.5), 2.0);
        assert_eq!(mutual_reachability(3.0, 2.0, 0.5), 3.0);
        assert_eq!(mutual_reachability(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn mst_uses_mutual_reachability_weights() {
        let data = line(&[0.0, 1.0, 3.0]);
        let mst = Hdbscan::new().with_min_samples(1).mst(&data);
        // core = [1, 1, 2]; mrd(0,1) = 1, mrd(1,2) = 2.
        assert_eq!(mst, vec![(0, 1, 1.0), (1, 2, 2.0)]);
    }

    #[test]
    fn thresholds_at_percentile_ranks() {
        let hdbscan = Hdbscan::new();

        let ten: Vec<f64> = (0..10u32).map(f64::from).collect();
        assert_eq!(
            hdbscan.candidate_thresholds(&ten),
            vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );

        let five: Vec<f64> = (0..5u32).map(f64::from).collect();
        assert_eq!(hdbscan.candidate_thresholds(&five), vec![2.0, 3.0, 4.0]);

        assert_eq!(
            hdbscan.candidate_thresholds(&[f64::INFINITY, f64::INFINITY]),
            vec![f64::INFINITY]
        );
        assert!(hdbscan.candidate_thresholds(&[]).is_empty());
    }

    #[test]
    fn custom_percentiles() {
        let hdbscan = Hdbscan::new().with_cut_percentiles(vec![0.0, 1.0]);
        let w: Vec<f64> = (0..4u32).map(f64::from).collect();
        assert_eq!(hdbscan.candidate_thresholds(&w), vec![0.0, 3.0]);
    }

    #[test]
    fn cluster_ids_follow_first_point() {
        let mst = vec![(2, 3, 1.0), (0, 1, 1.0), (1, 2, 9.0)];
        let cut = cut_tree(4, &mst, 1.0, 2);
        assert_eq!(cut.labels, vec![Some(0), Some(0), Some(1), Some(1)]);
        assert_eq!(cut.num_clusters, 2);
        assert_eq!(cut.non_noise, 4);
    }
}
