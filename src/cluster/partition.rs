//! Grouping items by cluster label.
//!
//! The routines are generic over the item type: the engine partitions points,
//! and the per-cluster diagnostics also partition each point's matched centroid.

use super::util::ensure_len;
use crate::error::{Error, Result};

/// Group `items` by `labels`, with group index equal to label value.
///
/// Returns `max(label) + 1` groups so that every label indexes its own group.
/// This equals the number of distinct labels only when the labels used form a
/// prefix `0..m`. If labels skip a value, there are more groups than distinct
/// labels and each skipped value gets an empty group. Empty input yields no
/// groups.
pub fn partition<'a, T>(items: &'a [T], labels: &[usize]) -> Result<Vec<Vec<&'a T>>> {
    let n_groups = labels.iter().max().map_or(0, |&m| m + 1);
    partition_into(items, labels, n_groups)
}

/// Group `items` into exactly `n_groups` groups.
///
/// Groups with no members are returned empty; a label `>= n_groups` is an error.
pub fn partition_into<'a, T>(
    items: &'a [T],
    labels: &[usize],
    n_groups: usize,
) -> Result<Vec<Vec<&'a T>>> {
    ensure_len(labels, items.len())?;
    let mut groups: Vec<Vec<&T>> = (0..n_groups).map(|_| Vec::new()).collect();
    for (item, &label) in items.iter().zip(labels) {
        groups
            .get_mut(label)
            .ok_or(Error::LabelOutOfRange { label, n_groups })?
            .push(item);
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_follow_label_values() {
        let items = vec!["a", "b", "c", "d"];
        let labels = vec![1, 0, 1, 0];
        let groups = partition(&items, &labels).unwrap();
        assert_eq!(groups, vec![vec![&"b", &"d"], vec![&"a", &"c"]]);
    }

    #[test]
    fn group_count_tracks_labels_not_k() {
        // Only labels 0 and 1 present, even if the caller had k = 3 in mind.
        let items = vec![1, 2, 3];
        let groups = partition(&items, &[0, 1, 0]).unwrap();
        assert_eq!(groups.len(), 2);

        // Unused label in range gives an empty group.
        let groups = partition(&items, &[0, 2, 0]).unwrap();
        assert_eq!(groups.len(), 3);
        assert!(groups[1].is_empty());
    }

    #[test]
    fn partition_into_keeps_all_groups() {
        let items = vec![1, 2];
        let groups = partition_into(&items, &[0, 0], 3).unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].len(), 2);
        assert!(groups[1].is_empty() && groups[2].is_empty());
    }

    #[test]
    fn partition_into_rejects_out_of_range() {
        let items = vec![1, 2];
        assert_eq!(
            partition_into(&items, &[0, 4], 2),
            Err(Error::LabelOutOfRange {
                label: 4,
                n_groups: 2
            })
        );
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let items = vec![1, 2, 3];
        assert_eq!(
            partition(&items, &[0, 1]),
            Err(Error::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
    }
}
