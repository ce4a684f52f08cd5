//! K-means clustering and the building blocks it is made of.
//!
//! ## Lloyd's algorithm
//!
//! Assign each point to its nearest centroid, then move each centroid to the
//! mean of its points. Repeat until labels settle.
//!
//! **Objective** under the default metric is the within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! Lloyd's algorithm finds a local minimum of `J`, not necessarily the global
//! one; different seeds can give different answers.
//!
//! ## Building blocks
//!
//! Leaf-first, each usable on its own:
//!
//! - [`distance`](mod@distance): squared Euclidean or Manhattan dissimilarity
//! - [`partition`](mod@partition): group items by label
//! - [`centroid`](mod@centroid): coordinate-wise mean, and the tagged per-iteration update
//! - [`assign`](mod@assign): nearest centroid, lowest index on ties
//! - [`inertia`](mod@inertia): global and per-cluster error, label churn
//!
//! ## Usage
//!
//! ```rust
//! use lloyd::cluster::{Clustering, Kmeans, Metric};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let fit = Kmeans::new(2).with_seed(42).fit(&data).unwrap();
//! let labels = fit.labels();
//! assert_eq!(labels[0], labels[1]);  // First two together
//! assert_ne!(labels[0], labels[2]);  // Separate from last two
//!
//! // New points go to the nearest fitted centroid.
//! let predicted = fit.predict(&[vec![9.5, 9.5]]).unwrap();
//! assert_eq!(predicted[0], labels[2]);
//!
//! // Metrics can also be chosen by name.
//! let metric: Metric = "manhattan".parse().unwrap();
//! let labels = Kmeans::new(2).with_metric(metric).with_seed(7).fit_predict(&data).unwrap();
//! assert_eq!(labels.len(), data.len());
//! ```

pub mod assign;
pub mod centroid;
pub mod distance;
pub mod inertia;
mod kmeans;
pub mod partition;
mod traits;
mod util;

pub use assign::{assign, assign_all, closest_centroids};
pub use centroid::{centroid, update_centroids, CentroidStep, CentroidUpdate, EmptyClusterPolicy};
pub use distance::{checked_distance, distance, Metric};
pub use inertia::{fraction_changed, inertia, inertia_per_cluster};
pub use kmeans::{FitStatus, Kmeans, KmeansFit};
pub use partition::{partition, partition_into};
pub use traits::Clustering;
