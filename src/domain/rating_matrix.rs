// ============================================================
// Layer 3 - Rating Matrix
// ============================================================
// Input to Fleiss' kappa:
//
//               label_0  label_1  ...
//   item_0    [   3        0          ]
//   item_1    [   1        2          ]
//   ...
//
// Cell (i, j) = number of annotators who gave item i label j.
// Rows follow the sorted item identifiers, columns follow the
// caller's label vocabulary.

use serde::{Deserialize, Serialize};

use crate::domain::annotation::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingMatrix {
    /// Row keys, strictly increasing
    pub items: Vec<ItemId>,

    /// Column keys, in vocabulary order
    pub labels: Vec<String>,

    /// `items.len()` rows of `labels.len()` counts
    pub counts: Vec<Vec<u32>>,

    /// Ratings skipped because their label was not in `labels`
    pub dropped: usize,
}

impl RatingMatrix {
    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn n_labels(&self) -> usize {
        self.labels.len()
    }

    #[cfg(test)]
    pub fn row(&self, index: usize) -> Option<&[u32]> {
        self.counts.get(index).map(Vec::as_slice)
    }

    /// Look a row up by item identifier.
    #[cfg(test)]
    pub fn row_for(&self, item: &ItemId) -> Option<&[u32]> {
        self.items
            .binary_search(item)
            .ok()
            .and_then(|index| self.row(index))
    }

    /// Number of ratings each item received.
    pub fn row_sums(&self) -> Vec<u32> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    /// Number of times each label was used across all items.
    pub fn column_sums(&self) -> Vec<u32> {
        let mut sums = vec![0u32; self.n_labels()];
        for row in &self.counts {
            for (sum, count) in sums.iter_mut().zip(row) {
                *sum += count;
            }
        }
        sums
    }

    pub fn total(&self) -> u64 {
        self.counts
            .iter()
            .flat_map(|row| row.iter())
            .map(|&c| c as u64)
            .sum()
    }

    /// True when every item received the same number of ratings.
    pub fn is_balanced(&self) -> bool {
        let sums = self.row_sums();
        sums.windows(2).all(|pair| pair[0] == pair[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RatingMatrix {
        RatingMatrix {
            items: vec![ItemId::from(1), ItemId::from(2), ItemId::from("x")],
            labels: vec!["yes".into(), "no".into()],
            counts: vec![vec![3, 0], vec![1, 2], vec![0, 1]],
            dropped: 0,
        }
    }

    #[test]
    fn test_sums() {
        let m = sample();
        assert_eq!(m.row_sums(), vec![3, 3, 1]);
        assert_eq!(m.column_sums(), vec![4, 3]);
        assert_eq!(m.total(), 7);
        assert!(!m.is_balanced());
    }

    #[test]
    fn test_row_lookup() {
        let m = sample();
        assert_eq!(m.row_for(&ItemId::from(2)), Some(&[1, 2][..]));
        assert_eq!(m.row_for(&ItemId::from("missing")), None);
    }
}
