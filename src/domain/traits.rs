// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The application layer loads annotations through these traits
// and never sees file paths or JSON:
//   - SpanLoader implements SentenceSource
//   - ItemLoader implements ItemLabelSource
//
// Tests swap in in-memory sources.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::annotation::{AnnotatorLabels, Sentence};

// ─── SentenceSource ───────────────────────────────────────────────────────────
/// One annotator's token-level annotations, sentence by sentence.
pub trait SentenceSource {
    /// Load every sentence in source order. Sentences without
    /// annotations come back empty rather than being skipped.
    fn load_sentences(&self) -> Result<Vec<Sentence>>;

    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;
}

// ─── ItemLabelSource ──────────────────────────────────────────────────────────
/// One annotator's item -> label classification.
pub trait ItemLabelSource {
    fn load_item_labels(&self) -> Result<AnnotatorLabels>;

    fn describe(&self) -> String;
}

impl SentenceSource for Vec<Sentence> {
    fn load_sentences(&self) -> Result<Vec<Sentence>> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("<{} in-memory sentences>", self.len())
    }
}

impl ItemLabelSource for AnnotatorLabels {
    fn load_item_labels(&self) -> Result<AnnotatorLabels> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("<{} in-memory items>", self.len())
    }
}
