//! Lloyd's k-means clustering.
//!
//! `lloyd` clusters dense `f32` vectors into `k` groups with the classic
//! assign/update iteration. The primary public API is under [`cluster`]:
//!
//! - [`Kmeans`]: configuration (k, metric, seed, iteration cap, tolerance)
//! - [`KmeansFit`]: fitted centroids, labels, inertia and `predict`
//! - the building blocks (distance, assignment, partitioning, centroids,
//!   inertia) as free functions
//!
//! Diagnostics go through `tracing`; install a subscriber to see them.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{Clustering, EmptyClusterPolicy, FitStatus, Kmeans, KmeansFit, Metric};
pub use error::{Error, Result};
