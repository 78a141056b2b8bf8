// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Each use case wires the data, statistics and infrastructure
// layers into one pipeline:
//
//   pairwise_use_case    - two files ─▶ flatten ─▶ Cohen's kappa
//   multi_rater_use_case - N files   ─▶ matrix  ─▶ Fleiss' kappa
//
// Rules for this layer:
//   - No printing (that's Layer 1)
//   - No JSON handling (that's Layer 4)
//   - No arithmetic (that's Layer 5)
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Two-annotator agreement workflow
pub mod pairwise_use_case;

// Multi-annotator agreement workflow
pub mod multi_rater_use_case;
