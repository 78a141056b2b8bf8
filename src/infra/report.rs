// ============================================================
// Layer 6 - Agreement Report
// ============================================================
// Persists one run's result as JSON, e.g.
//
//   {
//     "measure": "fleiss",
//     "kappa": 0.4167,
//     "interpretation": "moderate",
//     "items": 120,
//     "raters": 3,
//     "dropped_labels": 0,
//     "inputs": ["images_1.json", "images_2.json", "images_3.json"]
//   }
//
// Only written after a successful computation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::domain::interpretation::Interpretation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Cohen,
    Fleiss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementReport {
    pub measure: Measure,
    pub kappa: f64,
    pub interpretation: Interpretation,

    /// Compared positions (Cohen) or matrix rows (Fleiss)
    pub items: usize,

    /// Number of annotator files
    pub raters: usize,

    /// Ratings ignored for using an unknown label (always 0 for Cohen)
    pub dropped_labels: usize,

    pub inputs: Vec<PathBuf>,
}

impl AgreementReport {
    pub fn new(measure: Measure, kappa: f64, inputs: Vec<PathBuf>) -> Self {
        Self {
            measure,
            kappa,
            interpretation: Interpretation::classify(kappa),
            items: 0,
            raters: inputs.len(),
            dropped_labels: 0,
            inputs,
        }
    }

    pub fn with_items(mut self, items: usize) -> Self {
        self.items = items;
        self
    }

    pub fn with_dropped_labels(mut self, dropped: usize) -> Self {
        self.dropped_labels = dropped;
        self
    }
}

/// Writes reports to a fixed path.
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write the report as pretty JSON, creating parent directories.
    /// An existing file is replaced.
    pub fn write(&self, report: &AgreementReport) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(report)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write report to '{}'", self.path.display()))?;

        tracing::info!("Wrote agreement report to '{}'", self.path.display());
        Ok(())
    }

    #[cfg(test)]
    pub fn read(&self) -> Result<AgreementReport> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read report '{}'", self.path.display()))?;
        Ok(serde_json::from_str(&json)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path().join("nested/out/report.json"));

        let report = AgreementReport::new(
            Measure::Fleiss,
            0.5,
            vec!["a.json".into(), "b.json".into(), "c.json".into()],
        )
        .with_items(12)
        .with_dropped_labels(2);
        writer.write(&report).unwrap();

        let loaded = writer.read().unwrap();
        assert_eq!(loaded, report);
        assert_eq!(loaded.raters, 3);
        assert_eq!(loaded.interpretation, Interpretation::Moderate);
    }

    #[test]
    fn test_json_field_names() {
        let report = AgreementReport::new(Measure::Cohen, 0.9, vec!["x.json".into()]);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["measure"], "cohen");
        assert_eq!(value["interpretation"], "almost_perfect");
        assert_eq!(value["dropped_labels"], 0);
    }
}
