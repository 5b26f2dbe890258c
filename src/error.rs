use thiserror::Error;

/// Errors returned by the validating entry points of this crate.
///
/// The clustering routines themselves are total: degenerate inputs are handled as
/// no-ops. Errors only come from [`Clustering::fit_predict`](crate::Clustering::fit_predict)
/// and [`Algorithm::run`](crate::Algorithm::run).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Input slice is empty.
    #[error("no data points to cluster")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is unusable for the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_points} points")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of points in the dataset.
        n_points: usize,
    },

    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending point.
        index: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
