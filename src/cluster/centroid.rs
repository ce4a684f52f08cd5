//! Centroid computation and the per-iteration centroid update.

use tracing::warn;

use super::partition::partition_into;
use super::util::ensure_compatible;
use crate::error::{Error, Result};

/// What to do when an iteration leaves a cluster with no members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyClusterPolicy {
    /// Keep the cluster's previous centroid and continue iterating.
    #[default]
    KeepPrevious,
    /// Abort the fit with [`Error::EmptyCluster`].
    Fail,
}

/// Outcome of recomputing one cluster's centroid.
#[derive(Debug, Clone, PartialEq)]
pub enum CentroidUpdate {
    /// The cluster had members; this is their mean.
    Updated(Vec<f32>),
    /// The cluster had no members; its previous centroid stands.
    Retained,
}

/// Coordinate-wise arithmetic mean of `group`.
pub fn centroid(group: &[&[f32]]) -> Result<Vec<f32>> {
    let first = group.first().ok_or(Error::EmptyGroup)?;
    let d = first.len();
    let mut sum = vec![0.0f64; d];
    for point in group {
        if point.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: point.len(),
            });
        }
        for (s, &x) in sum.iter_mut().zip(point.iter()) {
            *s += f64::from(x);
        }
    }
    let n = group.len() as f64;
    Ok(sum.into_iter().map(|s| (s / n) as f32).collect())
}

/// Recompute one cluster's centroid from its members, tagging the empty case.
pub fn recompute(members: &[&[f32]]) -> Result<CentroidUpdate> {
    if members.is_empty() {
        return Ok(CentroidUpdate::Retained);
    }
    centroid(members).map(CentroidUpdate::Updated)
}

/// Result of [`update_centroids`].
#[derive(Debug, Clone, PartialEq)]
pub struct CentroidStep {
    /// New centroid list, same length as the previous one.
    pub centroids: Vec<Vec<f32>>,
    /// Clusters that had no members and kept their previous centroid.
    pub retained: Vec<usize>,
}

/// Partition `data` by `labels` and recompute every centroid in `previous`.
///
/// Empty clusters are handled according to `policy`.
pub fn update_centroids(
    data: &[Vec<f32>],
    labels: &[usize],
    previous: &[Vec<f32>],
    policy: EmptyClusterPolicy,
) -> Result<CentroidStep> {
    ensure_compatible(data, previous)?;
    let groups = partition_into(data, labels, previous.len())?;
    let mut centroids = Vec::with_capacity(previous.len());
    let mut retained = Vec::new();

    for (k, (group, prev)) in groups.iter().zip(previous).enumerate() {
        let members: Vec<&[f32]> = group.iter().map(|p| p.as_slice()).collect();
        match recompute(&members)? {
            CentroidUpdate::Updated(c) => centroids.push(c),
            CentroidUpdate::Retained => {
                if policy == EmptyClusterPolicy::Fail {
                    return Err(Error::EmptyCluster { cluster: k });
                }
                warn!(cluster = k, "cluster has no assigned points; keeping previous centroid");
                retained.push(k);
                centroids.push(prev.clone());
            }
        }
    }

    Ok(CentroidStep {
        centroids,
        retained,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_group() {
        let a: &[f32] = &[0.0, 2.0];
        let b: &[f32] = &[2.0, 4.0];
        let c: &[f32] = &[4.0, 0.0];
        assert_eq!(centroid(&[a, b, c]).unwrap(), vec![2.0, 2.0]);
    }

    #[test]
    fn single_point_is_its_own_centroid() {
        let a: &[f32] = &[1.25, -3.5, 8.0];
        assert_eq!(centroid(&[a]).unwrap(), a.to_vec());
    }

    #[test]
    fn empty_group_is_an_error() {
        assert_eq!(centroid(&[]), Err(Error::EmptyGroup));
    }

    #[test]
    fn ragged_group_is_an_error() {
        let a: &[f32] = &[0.0, 0.0];
        let b: &[f32] = &[1.0];
        assert!(matches!(
            centroid(&[a, b]),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn recompute_tags_empty() {
        assert_eq!(recompute(&[]).unwrap(), CentroidUpdate::Retained);
        let a: &[f32] = &[3.0];
        assert_eq!(
            recompute(&[a]).unwrap(),
            CentroidUpdate::Updated(vec![3.0])
        );
    }

    #[test]
    fn update_keeps_previous_for_empty_cluster() {
        let data = vec![vec![0.0], vec![2.0], vec![10.0]];
        let previous = vec![vec![1.0], vec![50.0], vec![9.0]];
        let step =
            update_centroids(&data, &[0, 0, 2], &previous, EmptyClusterPolicy::KeepPrevious)
                .unwrap();
        assert_eq!(step.centroids, vec![vec![1.0], vec![50.0], vec![10.0]]);
        assert_eq!(step.retained, vec![1]);
    }

    #[test]
    fn update_rejects_points_of_other_dimension() {
        let data = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
        let previous = vec![vec![1.0]];
        assert_eq!(
            update_centroids(&data, &[0, 0], &previous, EmptyClusterPolicy::KeepPrevious),
            Err(Error::DimensionMismatch {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn update_fails_on_empty_cluster_when_asked() {
        let data = vec![vec![0.0], vec![2.0]];
        let previous = vec![vec![1.0], vec![50.0]];
        assert_eq!(
            update_centroids(&data, &[0, 0], &previous, EmptyClusterPolicy::Fail),
            Err(Error::EmptyCluster { cluster: 1 })
        );
    }
}
