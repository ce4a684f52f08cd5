//! K-means clustering (Lloyd's algorithm).
//!
//! # Algorithm
//!
//! 1. Pick `k` distinct dataset points uniformly at random as initial centroids.
//! 2. **Assign**: label each point with its nearest centroid.
//! 3. **Update**: move each centroid to the mean of its points.
//! 4. Recompute inertia and the fraction of labels that changed.
//! 5. Stop once fewer than `tol` (default 1%) of the points changed cluster.
//!
//! The first pass has no previous labels to compare against, so it always
//! runs at least one more pass. A hard iteration cap (`max_iter`) bounds the
//! loop; hitting it is reported through [`FitStatus::MaxIterReached`] rather
//! than as an error.
//!
//! # Empty clusters
//!
//! An assignment pass can leave a cluster with no members. With the default
//! [`EmptyClusterPolicy::KeepPrevious`] its centroid stays where it was and the
//! event is recorded in [`KmeansFit::degenerate_events`]; with
//! [`EmptyClusterPolicy::Fail`] the fit aborts with [`Error::EmptyCluster`].
//!
//! # Typestate
//!
//! [`Kmeans`] is the unfitted configuration; [`Kmeans::fit`] returns a
//! [`KmeansFit`], which is the only type that can `predict`. A failed fit leaves
//! the configuration untouched.

use rand::prelude::*;
use rand::seq::index;
use tracing::{debug, warn};

use super::assign::{assign_all, nearest};
use super::centroid::{update_centroids, EmptyClusterPolicy};
use super::distance::Metric;
use super::inertia::{fraction_changed, inertia, inertia_per_cluster};
use super::traits::Clustering;
use super::util::{dataset_dim, ensure_dim};
use crate::error::{Error, Result};

/// K-means clustering algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Distance used for assignment and inertia.
    metric: Metric,
    /// Maximum assign/update passes.
    max_iter: usize,
    /// Stop when the fraction of changed labels drops below this.
    tol: f64,
    /// Random seed.
    seed: Option<u64>,
    /// Handling of clusters that lose all their points.
    empty_cluster_policy: EmptyClusterPolicy,
}

/// Why the iteration loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStatus {
    /// Fewer than `tol` of the points changed cluster on the last pass.
    Converged,
    /// The iteration cap was hit first.
    MaxIterReached,
}

/// A fitted k-means model.
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit {
    centroids: Vec<Vec<f32>>,
    labels: Vec<usize>,
    inertia: f32,
    cluster_inertia: Vec<f32>,
    metric: Metric,
    n_iter: usize,
    status: FitStatus,
    degenerate_events: usize,
}

impl Kmeans {
    /// Create a new K-means clusterer.
    ///
    /// Defaults: squared Euclidean metric, `max_iter = 300`, `tol = 0.01`,
    /// no seed, keep-previous empty-cluster policy.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            metric: Metric::default(),
            max_iter: 300,
            tol: 0.01,
            seed: None,
            empty_cluster_policy: EmptyClusterPolicy::default(),
        }
    }

    /// Set the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence threshold on the fraction of changed labels.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the empty-cluster policy.
    pub fn with_empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster_policy = policy;
        self
    }

    /// Configured distance metric.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Fit to `data`, drawing the initial centroids from the configured seed
    /// (or from the thread RNG when no seed is set).
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<KmeansFit> {
        match self.seed {
            Some(s) => self.fit_with_rng(data, &mut StdRng::seed_from_u64(s)),
            None => self.fit_with_rng(data, &mut rand::rng()),
        }
    }

    /// Fit to `data` using a caller-owned random source for initialization.
    ///
    /// The configured seed is ignored.
    pub fn fit_with_rng<R: Rng + ?Sized>(
        &self,
        data: &[Vec<f32>],
        rng: &mut R,
    ) -> Result<KmeansFit> {
        self.validate()?;
        dataset_dim(data)?;
        if data.len() < self.k {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: data.len(),
            });
        }

        let mut centroids = self.init_centroids(data, rng);
        let mut previous_labels: Option<Vec<usize>> = None;
        let mut degenerate_events = 0;
        let mut n_iter = 0;

        let (labels, total_inertia, status) = loop {
            n_iter += 1;

            let new_labels = assign_all(data, &centroids, self.metric)?;
            let step = update_centroids(data, &new_labels, &centroids, self.empty_cluster_policy)?;
            degenerate_events += step.retained.len();
            centroids = step.centroids;
            let sse = inertia(data, &centroids, &new_labels, self.metric)?;

            // No predecessor on the first pass: treat every label as changed.
            let changed = match &previous_labels {
                Some(previous) => fraction_changed(previous, &new_labels)?,
                None => 1.0,
            };
            debug!(iteration = n_iter, changed, inertia = sse, "k-means pass");

            if changed < self.tol {
                debug!(iterations = n_iter, inertia = sse, "k-means converged");
                break (new_labels, sse, FitStatus::Converged);
            }
            if n_iter >= self.max_iter {
                warn!(
                    max_iter = self.max_iter,
                    changed, "k-means stopped at the iteration cap before converging"
                );
                break (new_labels, sse, FitStatus::MaxIterReached);
            }
            previous_labels = Some(new_labels);
        };

        let cluster_inertia = inertia_per_cluster(data, &centroids, &labels, self.metric)?;

        Ok(KmeansFit {
            centroids,
            labels,
            inertia: total_inertia,
            cluster_inertia,
            metric: self.metric,
            n_iter,
            status,
            degenerate_events,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        if !(0.0..=1.0).contains(&self.tol) {
            return Err(Error::InvalidParameter {
                name: "tol",
                message: "must be a fraction in [0, 1]",
            });
        }
        Ok(())
    }

    /// `k` distinct dataset points, sampled uniformly without replacement.
    fn init_centroids<R: Rng + ?Sized>(&self, data: &[Vec<f32>], rng: &mut R) -> Vec<Vec<f32>> {
        index::sample(rng, data.len(), self.k)
            .into_iter()
            .map(|i| data[i].clone())
            .collect()
    }
}

impl Default for Kmeans {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

impl KmeansFit {
    /// Label each point in `data` with its nearest fitted centroid.
    ///
    /// Points must match the fitted dimensionality; this is checked before any
    /// distance is computed.
    pub fn predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        ensure_dim(data, self.dim())?;
        assign_all(data, &self.centroids, self.metric)
    }

    /// Inertia of `data` against the fitted centroids, each point paired with
    /// its nearest centroid.
    pub fn score(&self, data: &[Vec<f32>]) -> Result<f32> {
        ensure_dim(data, self.dim())?;
        Ok(data
            .iter()
            .map(|p| nearest(p, &self.centroids, self.metric).1)
            .sum())
    }

    /// Fitted centroids, one per cluster.
    pub fn centroids(&self) -> &[Vec<f32>] {
        &self.centroids
    }

    /// Labels of the training points.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Consume the model, returning the training labels.
    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }

    /// Sum of distances from each training point to its centroid.
    pub fn inertia(&self) -> f32 {
        self.inertia
    }

    /// Inertia restricted to each cluster's members.
    pub fn cluster_inertia(&self) -> &[f32] {
        &self.cluster_inertia
    }

    /// Number of training points in each cluster.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.centroids.len()];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }

    /// Number of clusters.
    pub fn n_clusters(&self) -> usize {
        self.centroids.len()
    }

    /// Metric the model was fitted with.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Number of assign/update passes run.
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Why fitting stopped.
    pub fn status(&self) -> FitStatus {
        self.status
    }

    /// Whether fitting stopped because labels settled.
    pub fn converged(&self) -> bool {
        self.status == FitStatus::Converged
    }

    /// Total number of times a cluster was left empty and kept its previous centroid.
    pub fn degenerate_events(&self) -> usize {
        self.degenerate_events
    }

    fn dim(&self) -> usize {
        self.centroids.first().map_or(0, Vec::len)
    }
}
