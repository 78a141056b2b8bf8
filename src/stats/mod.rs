// ============================================================
// Layer 5 - Agreement Statistics
// ============================================================
// The only layer that does arithmetic on annotations.
//
//   cohen.rs  - Cohen's kappa for two annotators over parallel
//               label sequences (any Ord label type)
//
//   fleiss.rs - Fleiss' kappa for three or more annotators over
//               an item x label RatingMatrix
//
// Both return chance-corrected agreement in [-1, 1]:
//
//   kappa = (p_observed - p_expected) / (1 - p_expected)
//
// Reference: Cohen (1960), Educational and Psychological Measurement 20(1)
//            Fleiss (1971), Psychological Bulletin 76(5)

/// Two-rater agreement
pub mod cohen;

/// Multi-rater agreement
pub mod fleiss;
