// ============================================================
// Layer 4 - Rating Matrix Builder
// ============================================================
// Reshapes sparse per-annotator maps into the dense count matrix
// Fleiss' kappa consumes.
//
// Steps:
//   1. Union the identifiers of every annotator
//   2. Sort them (fixed, reproducible row order)
//   3. Index the vocabulary (fixed column order)
//   4. Count, per item, how many annotators chose each label
//
// Example with labels = [Trucks, No Trucks]:
//
//   annotator 1: { a: Trucks,    b: No Trucks }
//   annotator 2: { a: Trucks,    b: Trucks    }
//   annotator 3: { a: Trucks,    c: Bicycles  }
//
//              Trucks  No Trucks
//        a   [   3        0     ]
//        b   [   1        1     ]
//        c   [   0        0     ]    ← "Bicycles" is not in the vocabulary
//
// Missing ratings, out-of-vocabulary labels and non-string labels
// are abstentions, so row sums can fall below the number of
// annotators.

use std::collections::{BTreeSet, HashMap};

use crate::domain::annotation::{AnnotatorLabels, ItemId};
use crate::domain::rating_matrix::RatingMatrix;

pub fn build_rating_matrix<S: AsRef<str>>(
    annotators: &[AnnotatorLabels],
    labels: &[S],
) -> RatingMatrix {
    // BTreeSet both deduplicates and sorts
    let items: Vec<ItemId> = annotators
        .iter()
        .flat_map(|annotations| annotations.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    // A repeated vocabulary label keeps its last column
    let column: HashMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(index, label)| (label.as_ref(), index))
        .collect();

    let mut counts = vec![vec![0u32; labels.len()]; items.len()];
    let mut dropped = 0usize;

    for (row, item) in counts.iter_mut().zip(&items) {
        for annotations in annotators {
            let Some(label) = annotations.get(item) else {
                continue;
            };
            match label.as_deref().and_then(|l| column.get(l)) {
                Some(&col) => row[col] += 1,
                None => {
                    dropped += 1;
                    tracing::debug!("Item {item}: label {label:?} is not in the vocabulary");
                }
            }
        }
    }

    if dropped > 0 {
        tracing::warn!("{dropped} ratings used labels outside the vocabulary and were ignored");
    }

    RatingMatrix {
        items,
        labels: labels.iter().map(|l| l.as_ref().to_string()).collect(),
        counts,
        dropped,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::item_loader::{parse_item_labels, ItemFields};

    const LABELS: [&str; 2] = ["Trucks", "No Trucks"];

    fn annotator(pairs: &[(&str, &str)]) -> AnnotatorLabels {
        pairs
            .iter()
            .map(|(id, label)| (ItemId::from(*id), Some(label.to_string())))
            .collect()
    }

    #[test]
    fn test_identical_annotators_put_all_mass_in_one_column() {
        let a = annotator(&[("img1", "Trucks"), ("img2", "No Trucks")]);
        let annotators = vec![a.clone(), a.clone(), a];

        let m = build_rating_matrix(&annotators, &LABELS);

        assert_eq!(m.n_items(), 2);
        assert_eq!(m.row_sums(), vec![3, 3]);
        for row in &m.counts {
            assert_eq!(row.iter().filter(|&&c| c > 0).count(), 1);
        }
        assert_eq!(m.counts, vec![vec![3, 0], vec![0, 3]]);
    }

    #[test]
    fn test_item_seen_by_one_annotator_sums_to_one() {
        let annotators = vec![
            annotator(&[("a", "Trucks")]),
            annotator(&[("a", "Trucks")]),
            annotator(&[("a", "No Trucks"), ("only_here", "Trucks")]),
        ];

        let m = build_rating_matrix(&annotators, &LABELS);

        assert_eq!(m.row_for(&ItemId::from("a")), Some(&[2, 1][..]));
        assert_eq!(m.row_for(&ItemId::from("only_here")), Some(&[1, 0][..]));
        assert!(!m.is_balanced());
    }

    #[test]
    fn test_unknown_labels_are_dropped_and_counted() {
        let annotators = vec![
            annotator(&[("a", "Trucks"), ("b", "Bicycles")]),
            annotator(&[("a", "Cars"), ("b", "No Trucks")]),
        ];

        let m = build_rating_matrix(&annotators, &LABELS);

        assert_eq!(m.counts, vec![vec![1, 0], vec![0, 1]]);
        assert_eq!(m.dropped, 2);
        assert_eq!(m.total(), 2);
    }

    #[test]
    fn test_non_string_label_is_dropped() {
        let labels = parse_item_labels(
            r#"[{"id": 1, "label": null}]"#,
            &ItemFields::default(),
        )
        .unwrap();

        let m = build_rating_matrix(&[labels], &LABELS);

        assert_eq!(m.items, vec![ItemId::from(1)]);
        assert_eq!(m.counts, vec![vec![0, 0]]);
        assert_eq!(m.dropped, 1);
    }

    #[test]
    fn test_rows_are_sorted_and_deterministic() {
        let annotators = vec![
            annotator(&[("zeta", "Trucks"), ("alpha", "Trucks"), ("mid", "No Trucks")]),
            annotator(&[("beta", "Trucks"), ("alpha", "No Trucks")]),
        ];

        let first = build_rating_matrix(&annotators, &LABELS);
        let expected: Vec<ItemId> = ["alpha", "beta", "mid", "zeta"]
            .into_iter()
            .map(ItemId::from)
            .collect();
        assert_eq!(first.items, expected);

        for _ in 0..10 {
            // Fresh maps get fresh hash seeds, so iteration order varies
            let rebuilt: Vec<AnnotatorLabels> =
                annotators.iter().map(|a| a.clone().into_iter().collect()).collect();
            assert_eq!(build_rating_matrix(&rebuilt, &LABELS), first);
        }
    }

    #[test]
    fn test_numeric_ids_sort_numerically_before_strings() {
        let mut a = AnnotatorLabels::new();
        a.insert(ItemId::from(10), Some("Trucks".into()));
        a.insert(ItemId::from(9), Some("Trucks".into()));
        a.insert(ItemId::from("img"), Some("Trucks".into()));

        let m = build_rating_matrix(&[a], &LABELS);
        assert_eq!(
            m.items,
            vec![ItemId::from(9), ItemId::from(10), ItemId::from("img")]
        );
    }

    #[test]
    fn test_column_order_follows_vocabulary() {
        let annotators = vec![annotator(&[("a", "Trucks")])];
        let m = build_rating_matrix(&annotators, &["No Trucks", "Trucks"]);
        assert_eq!(m.labels, vec!["No Trucks", "Trucks"]);
        assert_eq!(m.counts, vec![vec![0, 1]]);
    }

    #[test]
    fn test_no_annotators_gives_empty_matrix() {
        let m = build_rating_matrix(&[], &LABELS);
        assert_eq!(m.n_items(), 0);
        assert_eq!(m.n_labels(), 2);
    }
}
