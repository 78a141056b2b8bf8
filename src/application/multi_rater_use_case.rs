// ============================================================
// Layer 2 - MultiRaterUseCase
// ============================================================
// Fleiss' kappa across N annotators:
//
//   Step 1: Load every file             (Layer 4 - item_loader)
//   Step 2: Build the rating matrix     (Layer 4 - matrix_builder)
//   Step 3: Compute kappa               (Layer 5 - fleiss)
//   Step 4: Classify                    (Layer 3 - interpretation)
//   Step 5: Optionally save a report    (Layer 6 - report)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    item_loader::{ItemFields, ItemLoader, DEFAULT_ID_FIELD, DEFAULT_LABEL_FIELD},
    matrix_builder::build_rating_matrix,
};
use crate::domain::{
    interpretation::Interpretation, rating_matrix::RatingMatrix, traits::ItemLabelSource,
};
use crate::infra::report::{AgreementReport, Measure, ReportWriter};
use crate::stats::fleiss::fleiss_kappa;

// ─── Multi-rater Configuration ───────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiRaterConfig {
    /// One file per annotator
    pub files: Vec<PathBuf>,
    /// Closed label vocabulary; also fixes the matrix column order
    pub labels: Vec<String>,
    pub id_field: String,
    pub label_field: String,
    pub report: Option<PathBuf>,
}

impl Default for MultiRaterConfig {
    fn default() -> Self {
        Self {
            files: vec![
                PathBuf::from("images_1.json"),
                PathBuf::from("images_2.json"),
                PathBuf::from("images_3.json"),
            ],
            labels: vec!["Trucks".to_string(), "No Trucks".to_string()],
            id_field: DEFAULT_ID_FIELD.to_string(),
            label_field: DEFAULT_LABEL_FIELD.to_string(),
            report: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiRaterOutcome {
    pub kappa: f64,
    pub interpretation: Interpretation,
    pub matrix: RatingMatrix,
}

// ─── MultiRaterUseCase ────────────────────────────────────────────────────────
pub struct MultiRaterUseCase {
    config: MultiRaterConfig,
}

impl MultiRaterUseCase {
    pub fn new(config: MultiRaterConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<MultiRaterOutcome> {
        let cfg = &self.config;
        let fields = ItemFields {
            id: cfg.id_field.clone(),
            label: cfg.label_field.clone(),
        };
        let loaders: Vec<ItemLoader> = cfg
            .files
            .iter()
            .map(|path| ItemLoader::new(path, fields.clone()))
            .collect();

        let outcome = assess(&loaders, &cfg.labels)?;

        if let Some(path) = &cfg.report {
            let report = AgreementReport::new(Measure::Fleiss, outcome.kappa, cfg.files.clone())
                .with_items(outcome.matrix.n_items())
                .with_dropped_labels(outcome.matrix.dropped);
            ReportWriter::new(path).write(&report)?;
        }

        Ok(outcome)
    }
}

/// Load every annotator, build the rating matrix and compute Fleiss' kappa.
pub fn assess<S: ItemLabelSource>(sources: &[S], labels: &[String]) -> Result<MultiRaterOutcome> {
    tracing::info!(
        "Assessing {} annotators over {} labels",
        sources.len(),
        labels.len()
    );

    let annotators = sources
        .iter()
        .map(|source| {
            let annotations = source.load_item_labels()?;
            tracing::debug!("{}: {} items", source.describe(), annotations.len());
            Ok(annotations)
        })
        .collect::<Result<Vec<_>>>()?;

    let matrix = build_rating_matrix(&annotators, labels);
    tracing::debug!(
        "Rating matrix: {} items x {} labels, {} ratings",
        matrix.n_items(),
        matrix.n_labels(),
        matrix.total()
    );

    let kappa = fleiss_kappa(&matrix)?;
    let interpretation = Interpretation::classify(kappa);
    tracing::info!("Fleiss' kappa {:.4} over {} items", kappa, matrix.n_items());

    Ok(MultiRaterOutcome {
        kappa,
        interpretation,
        matrix,
    })
}
