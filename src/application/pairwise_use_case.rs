// ============================================================
// Layer 2 - PairwiseUseCase
// ============================================================
// Cohen's kappa between two annotators:
//
//   Step 1: Load both files            (Layer 4 - span_loader)
//   Step 2: Flatten to label sequences (Layer 4 - flattener)
//   Step 3: Validate + compute kappa   (Layer 5 - cohen)
//   Step 4: Classify                   (Layer 3 - interpretation)
//   Step 5: Optionally save a report   (Layer 6 - report)
//
// Items are compared by position: the i-th label of file A is
// assumed to describe the same token as the i-th label of file B.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    flattener::flatten,
    span_loader::{SpanLoader, DEFAULT_ANNOTATION_FIELD},
};
use crate::domain::{interpretation::Interpretation, traits::SentenceSource};
use crate::infra::report::{AgreementReport, Measure, ReportWriter};
use crate::stats::cohen::cohen_kappa;

// ─── Pairwise Configuration ──────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairwiseConfig {
    pub file_a: PathBuf,
    pub file_b: PathBuf,
    /// Entry field holding the `{text, labels}` span list
    pub field: String,
    pub report: Option<PathBuf>,
}

impl Default for PairwiseConfig {
    fn default() -> Self {
        Self {
            file_a: PathBuf::from("pos_1.json"),
            file_b: PathBuf::from("pos_2.json"),
            field: DEFAULT_ANNOTATION_FIELD.to_string(),
            report: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseOutcome {
    pub kappa: f64,
    pub interpretation: Interpretation,
    /// Number of compared positions
    pub items: usize,
}

// ─── PairwiseUseCase ──────────────────────────────────────────────────────────
pub struct PairwiseUseCase {
    config: PairwiseConfig,
}

impl PairwiseUseCase {
    pub fn new(config: PairwiseConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline end to end.
    ///
    /// Length and emptiness failures surface as
    /// `AgreementError` inside the returned `anyhow::Error`.
    pub fn execute(&self) -> Result<PairwiseOutcome> {
        let cfg = &self.config;
        let a = SpanLoader::new(&cfg.file_a, &cfg.field);
        let b = SpanLoader::new(&cfg.file_b, &cfg.field);

        let outcome = compare(&a, &b)?;

        if let Some(path) = &cfg.report {
            let report = AgreementReport::new(
                Measure::Cohen,
                outcome.kappa,
                vec![cfg.file_a.clone(), cfg.file_b.clone()],
            )
            .with_items(outcome.items);
            ReportWriter::new(path).write(&report)?;
        }

        Ok(outcome)
    }
}

/// Load, flatten and compare two annotators.
pub fn compare<A, B>(a: &A, b: &B) -> Result<PairwiseOutcome>
where
    A: SentenceSource + ?Sized,
    B: SentenceSource + ?Sized,
{
    tracing::info!("Comparing '{}' with '{}'", a.describe(), b.describe());

    let labels_a = flatten(a.load_sentences()?);
    let labels_b = flatten(b.load_sentences()?);
    tracing::debug!(
        "Flattened {} and {} labels",
        labels_a.len(),
        labels_b.len()
    );

    let kappa = cohen_kappa(&labels_a, &labels_b)?;
    let interpretation = Interpretation::classify(kappa);
    tracing::info!("Cohen's kappa {:.4} over {} items", kappa, labels_a.len());

    Ok(PairwiseOutcome {
        kappa,
        interpretation,
        items: labels_a.len(),
    })
}
