// ============================================================
// Layer 3 - Agreement Errors
// ============================================================
// Failures a caller may want to recognise and report cleanly.
// Everything else (I/O, malformed JSON, missing keys) travels
// as a plain anyhow::Error with file context attached.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgreementError {
    /// The two annotators' flattened sequences differ in length
    #[error("The annotations have different lengths ({left} vs {right}).")]
    LengthMismatch { left: usize, right: usize },

    /// At least one annotator contributed no labels
    #[error("One or both annotation files are empty.")]
    EmptyAnnotations,

    /// The statistic is undefined for this input
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

impl AgreementError {
    /// True for the validation failures the pairwise pipeline reports
    /// and aborts on instead of propagating.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AgreementError::LengthMismatch { .. } | AgreementError::EmptyAnnotations
        )
    }
}
