//! Point dissimilarity under a named metric.
//!
//! Both metrics are used for assignment *and* for inertia, so the squared
//! Euclidean form is safe: it preserves the ordering of true Euclidean
//! distances while skipping the square root.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Distance metric used for nearest-centroid assignment and inertia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// Sum of squared coordinate differences (no square root).
    ///
    /// Parsed from and displayed as `"euclidean"`.
    #[default]
    SquaredEuclidean,
    /// Sum of absolute coordinate differences (L1).
    Manhattan,
}

impl Metric {
    /// Canonical name of the metric.
    pub fn name(self) -> &'static str {
        match self {
            Self::SquaredEuclidean => "euclidean",
            Self::Manhattan => "manhattan",
        }
    }

    /// Distance between `a` and `b` under this metric.
    #[inline]
    pub fn distance(self, a: &[f32], b: &[f32]) -> f32 {
        match self {
            Self::SquaredEuclidean => squared_euclidean(a, b),
            Self::Manhattan => manhattan(a, b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Self::SquaredEuclidean),
            "manhattan" => Ok(Self::Manhattan),
            _ => Err(Error::UnknownMetric { name: s.to_string() }),
        }
    }
}

/// Distance between two points of equal length.
///
/// Lengths are only checked in debug builds; use [`checked_distance`] for
/// untrusted input.
#[inline]
pub fn distance(a: &[f32], b: &[f32], metric: Metric) -> f32 {
    metric.distance(a, b)
}

/// Like [`distance`], but rejects points of different dimensionality.
pub fn checked_distance(a: &[f32], b: &[f32], metric: Metric) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(metric.distance(a, b))
}

#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[inline]
pub(crate) fn manhattan(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}
