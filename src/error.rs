use thiserror::Error;

/// Errors returned when a k-means calculation is configured incorrectly.
///
/// All of these are detected before the centroids are initialized. Empty clusters and
/// runs that hit the iteration limit are regular outcomes and never reported as errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KMeansError {
    /// The dataset does not contain any samples.
    #[error("empty dataset")]
    EmptyDataset,

    /// Requested cluster count is zero, or larger than the amount of samples.
    #[error("invalid cluster count: requested {requested}, but dataset has {sample_cnt} samples")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of samples in the dataset.
        sample_cnt: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A sample has a NaN or infinite coordinate.
    #[error("sample {index} has a non-finite coordinate")]
    NonFiniteSample {
        /// Index of the offending sample.
        index: usize,
    },

    /// A precomputed initialization did not provide exactly k centroids.
    #[error("initialized with {provided} centroids, but {expected} were requested")]
    CentroidCountMismatch {
        /// Requested number of clusters.
        expected: usize,
        /// Number of centroids given.
        provided: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, KMeansError>;
