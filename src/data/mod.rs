// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything between a JSON file on disk and the inputs of the
// statistics layer.
//
//   Pairwise (Cohen):
//
//     annotator.json ──▶ SpanLoader ──▶ Vec<Sentence> ──▶ flatten ──▶ Vec<LabelValue>
//
//   Multi-rater (Fleiss):
//
//     annotator_1.json ──▶ ItemLoader ──▶ AnnotatorLabels ─┐
//     annotator_2.json ──▶ ItemLoader ──▶ AnnotatorLabels ─┼──▶ build_rating_matrix ──▶ RatingMatrix
//     annotator_n.json ──▶ ItemLoader ──▶ AnnotatorLabels ─┘
//
// Reference: serde_json documentation
//            Rust Book §8 (Collections), §13 (Iterators)

/// Loads per-sentence span annotations
pub mod span_loader;

/// Collapses sentences into one flat label sequence
pub mod flattener;

/// Loads item -> label classifications
pub mod item_loader;

/// Builds the item x label count matrix
pub mod matrix_builder;
