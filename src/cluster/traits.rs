use crate::error::{Error, Result};
use crate::point::Point;

/// Common interface for hard clustering algorithms (at most one label per point).
pub trait Clustering {
    /// One label per input point, in input order. `None` marks noise.
    fn labels(&self, points: &[Point]) -> Vec<Option<usize>>;

    /// The configured number of clusters (if applicable).
    ///
    /// For algorithms that discover the number of clusters dynamically (DBSCAN, HDBSCAN),
    /// this returns 0.
    fn n_clusters(&self) -> usize;

    /// Copy of `points` with each `cluster` field overwritten by its label.
    ///
    /// Coordinates, length and order are preserved; `points` is not modified.
    fn cluster(&self, points: &[Point]) -> Vec<Point> {
        points
            .iter()
            .zip(self.labels(points))
            .map(|(p, label)| p.with_cluster(label))
            .collect()
    }

    /// Like [`Clustering::cluster`], but rejects points with NaN or infinite coordinates.
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<Point>> {
        ensure_finite(points)?;
        Ok(self.cluster(points))
    }
}

pub(crate) fn ensure_finite(points: &[Point]) -> Result<()> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(Error::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}
