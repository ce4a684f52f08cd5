//! Inertia (sum of per-point error) and label-change diagnostics.
//!
//! Error is measured with the same [`Metric`] used for assignment, so under
//! the default metric inertia is the within-cluster sum of squares.

use super::distance::Metric;
use super::partition::partition_into;
use super::util::{ensure_compatible, ensure_len};
use crate::error::{Error, Result};

/// The centroid each point is labeled with, in dataset order.
pub fn closest_centroids_from_labels<'a>(
    centroids: &'a [Vec<f32>],
    labels: &[usize],
) -> Result<Vec<&'a [f32]>> {
    labels
        .iter()
        .map(|&label| {
            centroids
                .get(label)
                .map(Vec::as_slice)
                .ok_or(Error::LabelOutOfRange {
                    label,
                    n_groups: centroids.len(),
                })
        })
        .collect()
}

/// Sum of distances from each point to its matched centroid.
///
/// `matched[i]` is the centroid paired with `data[i]`.
pub fn error_sum<P, C>(data: &[P], matched: &[C], metric: Metric) -> f32
where
    P: AsRef<[f32]>,
    C: AsRef<[f32]>,
{
    debug_assert_eq!(data.len(), matched.len());
    data.iter()
        .zip(matched)
        .map(|(p, c)| metric.distance(p.as_ref(), c.as_ref()))
        .sum()
}

/// Sum over all points of the distance to their labeled centroid.
///
/// Points and centroids must share one dimensionality.
pub fn inertia(
    data: &[Vec<f32>],
    centroids: &[Vec<f32>],
    labels: &[usize],
    metric: Metric,
) -> Result<f32> {
    ensure_len(labels, data.len())?;
    ensure_compatible(data, centroids)?;
    let matched = closest_centroids_from_labels(centroids, labels)?;
    Ok(error_sum(data, &matched, metric))
}

/// Inertia restricted to each cluster's own members, one entry per centroid.
///
/// Both the points and their matched centroids are partitioned by label and
/// each partition is summed independently. Clusters with no members report
/// zero.
pub fn inertia_per_cluster(
    data: &[Vec<f32>],
    centroids: &[Vec<f32>],
    labels: &[usize],
    metric: Metric,
) -> Result<Vec<f32>> {
    ensure_len(labels, data.len())?;
    ensure_compatible(data, centroids)?;
    let matched = closest_centroids_from_labels(centroids, labels)?;
    let point_groups = partition_into(data, labels, centroids.len())?;
    let centroid_groups = partition_into(&matched, labels, centroids.len())?;

    Ok(point_groups
        .iter()
        .zip(&centroid_groups)
        .map(|(points, matched)| {
            points
                .iter()
                .zip(matched)
                .map(|(p, c)| metric.distance(p, c))
                .sum::<f32>()
        })
        .collect())
}

/// Fraction of points whose label differs between two label vectors, in `[0, 1]`.
///
/// Empty label vectors have changed nothing.
pub fn fraction_changed(previous: &[usize], current: &[usize]) -> Result<f64> {
    ensure_len(current, previous.len())?;
    if current.is_empty() {
        return Ok(0.0);
    }
    let changed = previous
        .iter()
        .zip(current)
        .filter(|(a, b)| a != b)
        .count();
    Ok(changed as f64 / current.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_groups() -> (Vec<Vec<f32>>, Vec<Vec<f32>>, Vec<usize>) {
        let data = vec![
            vec![0.0, 0.0],
            vec![2.0, 0.0],
            vec![10.0, 10.0],
            vec![10.0, 12.0],
        ];
        let centroids = vec![vec![1.0, 0.0], vec![10.0, 11.0]];
        let labels = vec![0, 0, 1, 1];
        (data, centroids, labels)
    }

    #[test]
    fn global_inertia_sums_every_point() {
        let (data, centroids, labels) = two_groups();
        let total = inertia(&data, &centroids, &labels, Metric::SquaredEuclidean).unwrap();
        assert_eq!(total, 4.0);
        let total = inertia(&data, &centroids, &labels, Metric::Manhattan).unwrap();
        assert_eq!(total, 4.0);
    }

    #[test]
    fn per_cluster_sums_to_global() {
        let (data, mut centroids, labels) = two_groups();
        centroids[1] = vec![13.0, 11.0];
        let per = inertia_per_cluster(&data, &centroids, &labels, Metric::default()).unwrap();
        assert_eq!(per, vec![2.0, 20.0]);
        let total = inertia(&data, &centroids, &labels, Metric::default()).unwrap();
        assert_eq!(per.iter().sum::<f32>(), total);
    }

    #[test]
    fn per_cluster_reports_empty_cluster_as_zero() {
        let (data, mut centroids, labels) = two_groups();
        centroids.push(vec![100.0, 100.0]);
        let per = inertia_per_cluster(&data, &centroids, &labels, Metric::default()).unwrap();
        assert_eq!(per.len(), 3);
        assert_eq!(per[2], 0.0);
    }

    #[test]
    fn bad_labels_are_rejected() {
        let (data, centroids, _) = two_groups();
        assert!(matches!(
            inertia(&data, &centroids, &[0, 0, 1, 2], Metric::default()),
            Err(Error::LabelOutOfRange { label: 2, .. })
        ));
        assert!(matches!(
            inertia(&data, &centroids, &[0, 0], Metric::default()),
            Err(Error::LengthMismatch { .. })
        ));
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let (_, centroids, _) = two_groups();
        let short = vec![vec![1.0]];
        let expected = Err(Error::DimensionMismatch {
            expected: 2,
            found: 1,
        });
        assert_eq!(inertia(&short, &centroids, &[0], Metric::default()), expected);
        assert_eq!(
            inertia_per_cluster(&short, &centroids, &[0], Metric::Manhattan),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );

        let (data, _, labels) = two_groups();
        let ragged = vec![vec![1.0, 0.0], vec![10.0, 11.0, 0.0]];
        assert!(matches!(
            inertia(&data, &ragged, &labels, Metric::default()),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn fraction_changed_counts_differences() {
        assert_eq!(fraction_changed(&[0, 1, 1, 0], &[0, 1, 0, 1]).unwrap(), 0.5);
        assert_eq!(fraction_changed(&[2, 2], &[2, 2]).unwrap(), 0.0);
        assert_eq!(fraction_changed(&[], &[]).unwrap(), 0.0);
        assert!(fraction_changed(&[0], &[0, 1]).is_err());
    }
}
