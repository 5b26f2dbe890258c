//! K-means: Lloyd iterations from randomly sampled initial centroids.
//!
//! # Algorithm
//!
//! 1. Pick `k` distinct input points uniformly at random as the initial centroids.
//! 2. Assign every point to its nearest centroid (lowest centroid index wins ties).
//! 3. Move each centroid to the mean of its assigned points. A centroid with no
//!    points stays where it is.
//! 4. Stop once every centroid moved less than `tolerance` along both axes, or after
//!    `max_iter` update rounds.
//!
//! Every point ends up in exactly one of the `k` clusters; k-means never produces noise.
//!
//! # Randomness
//!
//! Only the initial centroids are random. Without a seed, results can differ between
//! calls. Use [`Kmeans::with_seed`] or [`Kmeans::fit_with_rng`] for reproducible runs.
//!
//! # Complexity
//!
//! O(n * k) per iteration.

use rand::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::Clustering;
use crate::point::{euclidean, Point};

/// K-means clustering algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Upper bound on centroid update rounds.
    max_iter: usize,
    /// Per-axis centroid movement under which the run counts as converged.
    tolerance: f64,
    /// Seed for the initial centroid sample.
    seed: Option<u64>,
}

/// Result of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit {
    /// One label per input point.
    pub labels: Vec<Option<usize>>,
    /// Final centroid positions, indexed by cluster id.
    pub centroids: Vec<Point>,
    /// Number of centroid update rounds performed.
    pub iterations: usize,
    /// Whether the run stopped because centroids stopped moving.
    pub converged: bool,
}

impl Kmeans {
    /// Create a k-means clusterer for `k` clusters with default settings.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    /// Set the number of clusters.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the maximum number of update rounds.
    ///
    /// With `0`, points are labeled by the initial nearest-centroid assignment only.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Fix the RNG seed used to pick initial centroids.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Configured number of clusters.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Configured maximum number of update rounds.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Run k-means, drawing initial centroids from the configured seed
    /// (or the thread-local RNG when unseeded).
    pub fn fit(&self, points: &[Point]) -> KmeansFit {
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        self.fit_with_rng(points, &mut rng)
    }

    /// Run k-means with a caller-supplied randomness source.
    ///
    /// Empty input or `k == 0` is a no-op: the existing labels are returned untouched.
    pub fn fit_with_rng<R: Rng + ?Sized>(&self, points: &[Point], rng: &mut R) -> KmeansFit {
        if points.is_empty() || self.k == 0 {
            return KmeansFit {
                labels: points.iter().map(|p| p.cluster).collect(),
                centroids: Vec::new(),
                iterations: 0,
                converged: false,
            };
        }

        let mut centroids = initial_centroids(points, self.k, rng);
        let mut assignment = assign(points, &centroids);
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iter {
            let updated = update_centroids(points, &assignment, &centroids);
            iterations += 1;

            converged = centroids.iter().zip(&updated).all(|(old, new)| {
                (old.x - new.x).abs() < self.tolerance && (old.y - new.y).abs() < self.tolerance
            });
            centroids = updated;

            if converged {
                break;
            }
            assignment = assign(points, &centroids);
        }

        debug!(
            n_points = points.len(),
            k = self.k,
            iterations,
            converged,
            "k-means finished"
        );

        KmeansFit {
            labels: assignment.into_iter().map(Some).collect(),
            centroids,
            iterations,
            converged,
        }
    }
}

impl Default for Kmeans {
    fn default() -> Self {
        Self {
            k: 3,
            max_iter: 100,
            tolerance: 1e-3,
            seed: None,
        }
    }
}

impl Clustering for Kmeans {
    fn labels(&self, points: &[Point]) -> Vec<Option<usize>> {
        self.fit(points).labels
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Sample `k` distinct point positions; if `k > n`, the extra centroids repeat
/// randomly chosen points.
fn initial_centroids<R: Rng + ?Sized>(points: &[Point], k: usize, rng: &mut R) -> Vec<Point> {
    let n = points.len();
    let mut picks = rand::seq::index::sample(rng, n, k.min(n)).into_vec();
    while picks.len() < k {
        picks.push(rng.random_range(0..n));
    }
    picks
        .into_iter()
        .map(|i| Point::new(points[i].x, points[i].y))
        .collect()
}

fn nearest_centroid(point: &Point, centroids: &[Point]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (idx, c) in centroids.iter().enumerate() {
        let d = euclidean(point, c);
        if d < best_dist {
            best_dist = d;
            best = idx;
        }
    }
    best
}

fn assign(points: &[Point], centroids: &[Point]) -> Vec<usize> {
    points
        .iter()
        .map(|p| nearest_centroid(p, centroids))
        .collect()
}

fn update_centroids(points: &[Point], assignment: &[usize], centroids: &[Point]) -> Vec<Point> {
    let k = centroids.len();
    let mut sums = vec![(0.0f64, 0.0f64); k];
    let mut counts = vec![0usize; k];
    for (p, &c) in points.iter().zip(assignment) {
        sums[c].0 += p.x;
        sums[c].1 += p.y;
        counts[c] += 1;
    }

    centroids
        .iter()
        .enumerate()
        .map(|(c, old)| {
            if counts[c] == 0 {
                *old
            } else {
                let m = counts[c] as f64;
                Point::new(sums[c].0 / m, sums[c].1 / m)
            }
        })
        .collect()
}
