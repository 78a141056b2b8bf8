// ============================================================
// Layer 4 - Flattener
// ============================================================
// Cohen's kappa compares two parallel label sequences, so the
// nested per-sentence structure is collapsed into one sequence:
//
//   [[John:B-PER, Smith:I-PER], [], [ran:O]]
//        ──▶ [B-PER, I-PER, O]
//
// Sentence order and position order inside a sentence are kept.
// Span objects contribute their labels; bare labels pass through.

use crate::domain::annotation::{LabelValue, Sentence};

pub fn flatten(sentences: Vec<Sentence>) -> Vec<LabelValue> {
    sentences
        .into_iter()
        .flatten()
        .map(|item| item.into_label())
        .collect()
}
