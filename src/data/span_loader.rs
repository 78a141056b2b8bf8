// ============================================================
// Layer 4 - Span Annotation Loader
// ============================================================
// Reads one annotator's token tagging file:
//
//   [
//     { "pos_tags": [ { "text": "John",  "labels": "B-PER" },
//                     { "text": "Smith", "labels": ["I-PER", "NAME"] } ] },
//     { "comment": "no annotations on this one" },
//     ...
//   ]
//
// Each top-level entry becomes one Sentence. Entries without the
// annotation field become empty sentences so sentence positions
// stay aligned with the source file.
//
// Reference: serde_json::Value documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::domain::annotation::{Sentence, SentenceItem, SpanLabel};
use crate::domain::traits::SentenceSource;

/// Field holding the span list when none is configured
pub const DEFAULT_ANNOTATION_FIELD: &str = "pos_tags";

pub struct SpanLoader {
    path: PathBuf,
    field: String,
}

impl SpanLoader {
    pub fn new(path: impl Into<PathBuf>, field: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            field: field.into(),
        }
    }
}

impl SentenceSource for SpanLoader {
    fn load_sentences(&self) -> Result<Vec<Sentence>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read annotation file '{}'", self.path.display()))?;

        let sentences = parse_sentences(&raw, &self.field)
            .with_context(|| format!("Invalid annotation file '{}'", self.path.display()))?;

        tracing::debug!(
            "Loaded {} sentences ({} spans) from '{}'",
            sentences.len(),
            sentences.iter().map(Vec::len).sum::<usize>(),
            self.path.display()
        );
        Ok(sentences)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse a JSON array of entries into sentences.
///
/// Fails when the document is not an array, or when an entry's
/// annotation list contains a span without `text` or `labels`.
pub fn parse_sentences(json: &str, field: &str) -> Result<Vec<Sentence>> {
    let entries: Vec<Value> =
        serde_json::from_str(json).context("Expected a JSON array of entries")?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, mut entry)| match entry.get_mut(field).map(Value::take) {
            None => Ok(Vec::new()),
            Some(spans) => {
                let spans: Vec<SpanLabel> = serde_json::from_value(spans)
                    .with_context(|| format!("Entry {index}: malformed '{field}' annotations"))?;
                Ok(spans.into_iter().map(SentenceItem::Span).collect())
            }
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::LabelValue;
    use std::io::Write;

    #[test]
    fn test_parses_spans_in_order() {
        let json = r#"[
            {"pos_tags": [{"text": "John", "labels": "B-PER"},
                          {"text": "Smith", "labels": ["I-PER", "NAME"]}]},
            {"pos_tags": [{"text": "ran", "labels": "O"}]}
        ]"#;
        let sentences = parse_sentences(json, "pos_tags").unwrap();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].len(), 2);
        assert_eq!(
            sentences[0][1],
            SentenceItem::Span(SpanLabel::new("Smith", LabelValue::multi(["I-PER", "NAME"])))
        );
        assert_eq!(sentences[1][0].label(), &LabelValue::single("O"));
    }

    #[test]
    fn test_entry_without_field_is_empty_sentence() {
        let json = r#"[{"other": 1}, {"pos_tags": []}, "not an object"]"#;
        let sentences = parse_sentences(json, "pos_tags").unwrap();
        assert_eq!(sentences, vec![Vec::new(), Vec::new(), Vec::new()]);
    }

    #[test]
    fn test_custom_field_name() {
        let json = r#"[{"ner": [{"text": "Paris", "labels": "B-LOC"}]}]"#;
        assert!(parse_sentences(json, "pos_tags").unwrap()[0].is_empty());
        assert_eq!(parse_sentences(json, "ner").unwrap()[0].len(), 1);
    }

    #[test]
    fn test_missing_labels_key_is_an_error() {
        let json = r#"[{"pos_tags": [{"text": "John"}]}]"#;
        let err = parse_sentences(json, "pos_tags").unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("Entry 0"), "{chain}");
        assert!(chain.contains("labels"), "{chain}");
    }

    #[test]
    fn test_non_array_document_is_an_error() {
        assert!(parse_sentences(r#"{"pos_tags": []}"#, "pos_tags").is_err());
        assert!(parse_sentences("not json", "pos_tags").is_err());
    }

    #[test]
    fn test_loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"pos_tags": [{{"text": "a", "labels": "O"}}]}}]"#).unwrap();

        let loader = SpanLoader::new(file.path(), DEFAULT_ANNOTATION_FIELD);
        let sentences = loader.load_sentences().unwrap();
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_missing_file_mentions_path() {
        let loader = SpanLoader::new("/definitely/not/here.json", "pos_tags");
        let err = loader.load_sentences().unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
