// ============================================================
// Layer 5 - Cohen's Kappa
// ============================================================
// Agreement between two annotators labelling the same n items.
//
// Build the confusion matrix M over every category either
// annotator used (rows = annotator A, columns = annotator B):
//
//   p_o = Σ_c M[c][c] / n                      observed agreement
//   p_e = Σ_c rowsum(c) · colsum(c) / n²       chance agreement
//
//   kappa = (p_o - p_e) / (1 - p_e)
//
// When both annotators used the same single category for every
// item, p_e = p_o = 1 and the ratio is 0/0. That case is perfect
// agreement and returns 1.0.
//
// Reference: Cohen (1960)
//            scikit-learn `cohen_kappa_score` (unweighted)

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::error::AgreementError;

/// Compute Cohen's kappa for two aligned label sequences.
///
/// Checks, in this order:
///   1. equal lengths, else `LengthMismatch`
///   2. non-empty, else `EmptyAnnotations`
pub fn cohen_kappa<T: Ord>(a: &[T], b: &[T]) -> Result<f64, AgreementError> {
    if a.len() != b.len() {
        return Err(AgreementError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(AgreementError::EmptyAnnotations);
    }

    // Category -> dense index, in sorted category order
    let categories: BTreeMap<&T, usize> = a
        .iter()
        .chain(b)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .enumerate()
        .map(|(index, label)| (label, index))
        .collect();
    let k = categories.len();

    let mut confusion = vec![vec![0u64; k]; k];
    for (x, y) in a.iter().zip(b) {
        confusion[categories[x]][categories[y]] += 1;
    }

    let n = a.len() as f64;
    let agreed: u64 = (0..k).map(|c| confusion[c][c]).sum();
    let observed = agreed as f64 / n;

    let row_sums: Vec<u64> = confusion.iter().map(|row| row.iter().sum()).collect();
    let col_sums: Vec<u64> = (0..k)
        .map(|c| confusion.iter().map(|row| row[c]).sum())
        .collect();
    let expected = row_sums
        .iter()
        .zip(&col_sums)
        .map(|(&r, &c)| r as f64 * c as f64)
        .sum::<f64>()
        / (n * n);

    if (1.0 - expected).abs() < f64::EPSILON {
        return Ok(1.0);
    }

    let kappa = (observed - expected) / (1.0 - expected);
    tracing::debug!(
        "Cohen: n={}, categories={}, p_o={:.4}, p_e={:.4}, kappa={:.4}",
        a.len(),
        k,
        observed,
        expected,
        kappa
    );
    Ok(kappa)
}
