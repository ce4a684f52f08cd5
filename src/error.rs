use thiserror::Error;

/// Errors returned by the clustering engine and its building blocks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is larger than the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Points have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// Distance metric name is not recognized.
    #[error("unknown distance metric {name:?} (expected \"euclidean\" or \"manhattan\")")]
    UnknownMetric {
        /// The name that failed to parse.
        name: String,
    },

    /// The mean of zero points was requested.
    #[error("cannot compute the centroid of an empty group")]
    EmptyGroup,

    /// A cluster lost all of its members and the policy forbids retaining it.
    #[error("cluster {cluster} has no assigned points")]
    EmptyCluster {
        /// Index of the degenerate cluster.
        cluster: usize,
    },

    /// Two sequences that must correspond element-wise have different lengths.
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },

    /// A label does not index any group.
    #[error("label {label} out of range for {n_groups} groups")]
    LabelOutOfRange {
        /// Offending label.
        label: usize,
        /// Number of groups available.
        n_groups: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
