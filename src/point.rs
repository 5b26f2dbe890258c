//! The 2-D point type shared by every algorithm.

use serde::{Deserialize, Serialize};

/// Integer form of the noise label, as reported by [`Point::label`].
pub const NOISE_LABEL: i64 = -1;

/// A point in the plane with an optional cluster label.
///
/// `cluster` is `None` until a clustering algorithm writes it, and stays `None`
/// for points an algorithm classifies as noise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Cluster id, or `None` for noise / unassigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<usize>,
}

impl Point {
    /// Create an unlabeled point.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            cluster: None,
        }
    }

    /// Copy of this point carrying `cluster`.
    pub fn with_cluster(self, cluster: Option<usize>) -> Self {
        Self { cluster, ..self }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        euclidean(self, other)
    }

    /// Whether this point carries no cluster label.
    pub fn is_noise(&self) -> bool {
        self.cluster.is_none()
    }

    /// Label as a signed integer: the cluster id, or [`NOISE_LABEL`].
    pub fn label(&self) -> i64 {
        self.cluster.map_or(NOISE_LABEL, |c| c as i64)
    }

    /// Both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Euclidean distance between two points.
///
/// Coincident points give exactly `0.0`.
#[inline]
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
