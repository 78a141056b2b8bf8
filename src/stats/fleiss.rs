// ============================================================
// Layer 5 - Fleiss' Kappa
// ============================================================
// Agreement among m annotators over N items and k categories,
// computed from the RatingMatrix counts n_ij:
//
//   m       = max_i Σ_j n_ij                 raters per item
//   p_j     = Σ_i n_ij / Σ_ij n_ij           category share
//   P_i     = (Σ_j n_ij² - m) / (m (m - 1))  per-item agreement
//   P̄       = mean_i P_i
//   P̄_e     = Σ_j p_j²
//
//   kappa = (P̄ - P̄_e) / (1 - P̄_e)
//
// The formula assumes every item received exactly m ratings; a
// matrix whose rows sum to different totals is rejected.
//
// Reference: Fleiss (1971)
//            statsmodels `fleiss_kappa(method="fleiss")`

use crate::domain::error::AgreementError;
use crate::domain::rating_matrix::RatingMatrix;

pub fn fleiss_kappa(matrix: &RatingMatrix) -> Result<f64, AgreementError> {
    if matrix.n_items() == 0 || matrix.n_labels() == 0 {
        return Err(AgreementError::DegenerateInput(
            "the rating matrix has no items or no labels".into(),
        ));
    }

    let total = matrix.total();
    if total == 0 {
        return Err(AgreementError::DegenerateInput(
            "the rating matrix contains no ratings".into(),
        ));
    }

    let row_sums = matrix.row_sums();
    let raters = row_sums.iter().copied().max().unwrap_or(0) as f64;
    if raters < 2.0 {
        return Err(AgreementError::DegenerateInput(
            "at least two ratings per item are required".into(),
        ));
    }

    if !matrix.is_balanced() {
        let short_rows = row_sums.iter().filter(|&&s| (s as f64) < raters).count();
        return Err(AgreementError::DegenerateInput(format!(
            "items received different numbers of ratings \
             ({short_rows} of {} items have fewer than {raters})",
            matrix.n_items()
        )));
    }

    let total = total as f64;
    let expected: f64 = matrix
        .column_sums()
        .iter()
        .map(|&s| {
            let share = s as f64 / total;
            share * share
        })
        .sum();

    let per_item = matrix.counts.iter().map(|row| {
        let squares: f64 = row.iter().map(|&c| (c as f64) * (c as f64)).sum();
        (squares - raters) / (raters * (raters - 1.0))
    });
    let observed = per_item.sum::<f64>() / matrix.n_items() as f64;

    if (1.0 - expected).abs() < f64::EPSILON {
        return Err(AgreementError::DegenerateInput(
            "every rating uses the same label, so chance agreement is 1".into(),
        ));
    }

    let kappa = (observed - expected) / (1.0 - expected);
    tracing::debug!(
        "Fleiss: items={}, raters={}, P={:.4}, Pe={:.4}, kappa={:.4}",
        matrix.n_items(),
        raters,
        observed,
        expected,
        kappa
    );
    Ok(kappa)
}
