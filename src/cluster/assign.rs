//! Nearest-centroid assignment.

use super::distance::Metric;
use super::util::ensure_compatible;
use crate::error::{Error, Result};

/// Index of the centroid nearest to `point`.
///
/// Ties go to the lowest index: centroids are scanned in order and a later
/// centroid only wins with a strictly smaller distance. The point and every
/// centroid must share one dimensionality.
pub fn assign(point: &[f32], centroids: &[Vec<f32>], metric: Metric) -> Result<usize> {
    let d = ensure_compatible(&[], centroids)?.ok_or(Error::EmptyInput)?;
    if point.len() != d {
        return Err(Error::DimensionMismatch {
            expected: d,
            found: point.len(),
        });
    }
    Ok(nearest(point, centroids, metric).0)
}

/// Label every point in `data` with its nearest centroid, preserving order.
///
/// Dimensions are checked for every point before any distance is computed.
pub fn assign_all(
    data: &[Vec<f32>],
    centroids: &[Vec<f32>],
    metric: Metric,
) -> Result<Vec<usize>> {
    ensure_compatible(data, centroids)?.ok_or(Error::EmptyInput)?;
    Ok(data
        .iter()
        .map(|point| nearest(point, centroids, metric).0)
        .collect())
}

/// The nearest centroid's value for every point in `data`.
pub fn closest_centroids<'a>(
    data: &[Vec<f32>],
    centroids: &'a [Vec<f32>],
    metric: Metric,
) -> Result<Vec<&'a [f32]>> {
    let labels = assign_all(data, centroids, metric)?;
    Ok(labels.into_iter().map(|l| centroids[l].as_slice()).collect())
}

/// `(index, distance)` of the nearest centroid. `centroids` must be nonempty.
#[inline]
pub(crate) fn nearest(point: &[f32], centroids: &[Vec<f32>], metric: Metric) -> (usize, f32) {
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for (k, centroid) in centroids.iter().enumerate() {
        let d = metric.distance(point, centroid);
        if d < best_dist {
            best_dist = d;
            best = k;
        }
    }
    (best, best_dist)
}
