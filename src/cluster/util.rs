use crate::error::{Error, Result};

/// Check that every point has the same, nonzero dimensionality and return it.
pub(crate) fn dataset_dim(data: &[Vec<f32>]) -> Result<usize> {
    let first = data.first().ok_or(Error::EmptyInput)?;
    let d = first.len();
    if d == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be at least 1",
        });
    }
    ensure_dim(data, d)?;
    Ok(d)
}

/// Check that every point has dimensionality `d`.
pub(crate) fn ensure_dim(data: &[Vec<f32>], d: usize) -> Result<()> {
    for point in data {
        if point.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: point.len(),
            });
        }
    }
    Ok(())
}

/// Check that all centroids share one dimensionality and every point in
/// `data` matches it. Returns that dimensionality, or `None` without centroids.
pub(crate) fn ensure_compatible(
    data: &[Vec<f32>],
    centroids: &[Vec<f32>],
) -> Result<Option<usize>> {
    let Some(first) = centroids.first() else {
        return Ok(None);
    };
    let d = first.len();
    ensure_dim(centroids, d)?;
    ensure_dim(data, d)?;
    Ok(Some(d))
}

/// Check that a label vector corresponds one-to-one with `n` items.
pub(crate) fn ensure_len(labels: &[usize], n: usize) -> Result<()> {
    if labels.len() != n {
        return Err(Error::LengthMismatch {
            expected: n,
            found: labels.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_dim_reports_ragged_points() {
        let data = vec![vec![0.0, 0.0], vec![1.0, 1.0, 1.0]];
        assert_eq!(
            dataset_dim(&data),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn dataset_dim_rejects_empty_and_zero_dim() {
        let empty: Vec<Vec<f32>> = vec![];
        assert_eq!(dataset_dim(&empty), Err(Error::EmptyInput));
        assert!(dataset_dim(&[vec![]]).is_err());
        assert_eq!(dataset_dim(&[vec![1.0, 2.0, 3.0]]), Ok(3));
    }

    #[test]
    fn ensure_compatible_checks_centroids_then_points() {
        let centroids = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        assert_eq!(ensure_compatible(&[vec![5.0, 5.0]], &centroids), Ok(Some(2)));
        assert_eq!(
            ensure_compatible(&[vec![5.0]], &centroids),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            ensure_compatible(&[], &[vec![0.0, 0.0], vec![1.0]]),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(ensure_compatible(&[vec![5.0]], &[]), Ok(None));
    }
}
