// ============================================================
// Layer 4 - Item Classification Loader
// ============================================================
// Reads one annotator's item classification file:
//
//   [
//     { "id": "img_001", "label": "Trucks" },
//     { "id": 17,        "label": "No Trucks" },
//     ...
//   ]
//
// and returns an ItemId -> label map. Identifiers may be strings
// or integers. A repeated identifier overwrites the earlier entry.
//
// A `null`, numeric or boolean label is kept as `None` and later
// counted as an out-of-vocabulary rating. Array and object labels
// are rejected.

use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::domain::annotation::{AnnotatorLabels, ItemId};
use crate::domain::traits::ItemLabelSource;

pub const DEFAULT_ID_FIELD: &str = "id";
pub const DEFAULT_LABEL_FIELD: &str = "label";

/// Where the identifier and label live inside each entry
#[derive(Debug, Clone)]
pub struct ItemFields {
    pub id: String,
    pub label: String,
}

impl Default for ItemFields {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID_FIELD.to_string(),
            label: DEFAULT_LABEL_FIELD.to_string(),
        }
    }
}

pub struct ItemLoader {
    path: PathBuf,
    fields: ItemFields,
}

impl ItemLoader {
    pub fn new(path: impl Into<PathBuf>, fields: ItemFields) -> Self {
        Self {
            path: path.into(),
            fields,
        }
    }
}

impl ItemLabelSource for ItemLoader {
    fn load_item_labels(&self) -> Result<AnnotatorLabels> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read annotation file '{}'", self.path.display()))?;

        let labels = parse_item_labels(&raw, &self.fields)
            .with_context(|| format!("Invalid annotation file '{}'", self.path.display()))?;

        tracing::debug!("Loaded {} items from '{}'", labels.len(), self.path.display());
        Ok(labels)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse a JSON array of `{id, label}` entries into a map.
pub fn parse_item_labels(json: &str, fields: &ItemFields) -> Result<AnnotatorLabels> {
    let entries: Vec<Value> =
        serde_json::from_str(json).context("Expected a JSON array of entries")?;

    let mut labels = AnnotatorLabels::with_capacity(entries.len());
    let mut overwritten = 0usize;

    for (index, entry) in entries.iter().enumerate() {
        let id = entry
            .get(&fields.id)
            .ok_or_else(|| anyhow!("Entry {index}: missing '{}' field", fields.id))?;
        let id: ItemId = serde_json::from_value(id.clone()).with_context(|| {
            format!("Entry {index}: '{}' must be a string or an integer", fields.id)
        })?;

        let label = match entry.get(&fields.label) {
            None => bail!("Entry {index}: missing '{}' field", fields.label),
            Some(Value::String(label)) => Some(label.clone()),
            Some(Value::Array(_) | Value::Object(_)) => {
                bail!("Entry {index}: '{}' must be a single value", fields.label)
            }
            Some(_) => None,
        };

        if labels.insert(id, label).is_some() {
            overwritten += 1;
        }
    }

    if overwritten > 0 {
        tracing::debug!("{overwritten} duplicate identifiers overwritten (last entry wins)");
    }
    Ok(labels)
}
