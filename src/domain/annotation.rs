// ============================================================
// Layer 3 - Annotation Domain Types
// ============================================================
// The shapes one annotator's work can take:
//
//   Pairwise files (token tagging):
//     Sentence = [ SentenceItem, SentenceItem, ... ]
//     SentenceItem = Span { text, labels } | Bare(label)
//     labels = "B-PER" | ["B-PER", "NAME"]
//
//   Multi-rater files (item classification):
//     { ItemId -> "Trucks" }
//
// Reference: Rust Book §6 (Enums and Pattern Matching)
//            serde documentation (untagged enums)

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// The label an annotator gave one token or span.
///
/// A multi-label list is treated as a single composite category:
/// two annotators agree on an item only when their lists are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
    Single(String),
    Multi(Vec<String>),
}

impl LabelValue {
    #[cfg(test)]
    pub fn single(label: impl Into<String>) -> Self {
        LabelValue::Single(label.into())
    }

    #[cfg(test)]
    pub fn multi<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LabelValue::Multi(labels.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelValue::Single(label) => f.write_str(label),
            LabelValue::Multi(labels) => write!(f, "[{}]", labels.join("|")),
        }
    }
}

/// A labelled token or span inside a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanLabel {
    /// The annotated surface text (kept for traceability only)
    pub text: String,

    /// What the annotator tagged it as
    pub labels: LabelValue,
}

impl SpanLabel {
    #[cfg(test)]
    pub fn new(text: impl Into<String>, labels: LabelValue) -> Self {
        Self {
            text: text.into(),
            labels,
        }
    }
}

/// One position in a sentence: either a full span object
/// or a label that was stored without its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceItem {
    Span(SpanLabel),
    Bare(LabelValue),
}

impl SentenceItem {
    /// The label carried by this position, whatever its shape.
    #[cfg(test)]
    pub fn label(&self) -> &LabelValue {
        match self {
            SentenceItem::Span(span) => &span.labels,
            SentenceItem::Bare(label) => label,
        }
    }

    pub fn into_label(self) -> LabelValue {
        match self {
            SentenceItem::Span(span) => span.labels,
            SentenceItem::Bare(label) => label,
        }
    }
}

/// All labelled positions of one sentence, in file order.
pub type Sentence = Vec<SentenceItem>;

/// Identifier of a classified item (image ID, document ID, ...).
///
/// Files mix numeric and string identifiers, so the ordering is
/// total across both: every `Int` sorts before every `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(id) => write!(f, "{id}"),
            ItemId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId::Int(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Text(id.to_string())
    }
}

/// One annotator's item -> label assignments.
///
/// `None` marks an item that was rated with a non-string scalar
/// (`null`, a number, a bool): present, but matching no label.
pub type AnnotatorLabels = HashMap<ItemId, Option<String>>;

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_value_accepts_string_or_list() {
        let single: LabelValue = serde_json::from_str(r#""B-PER""#).unwrap();
        let multi: LabelValue = serde_json::from_str(r#"["B-PER", "NAME"]"#).unwrap();

        assert_eq!(single, LabelValue::single("B-PER"));
        assert_eq!(multi, LabelValue::multi(["B-PER", "NAME"]));
    }

    #[test]
    fn test_multi_label_display() {
        assert_eq!(LabelValue::multi(["A", "B"]).to_string(), "[A|B]");
        assert_eq!(LabelValue::single("O").to_string(), "O");
    }

    #[test]
    fn test_item_id_ordering_is_total() {
        let mut ids = vec![
            ItemId::from("img_b"),
            ItemId::from(10),
            ItemId::from("img_a"),
            ItemId::from(2),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                ItemId::from(2),
                ItemId::from(10),
                ItemId::from("img_a"),
                ItemId::from("img_b"),
            ]
        );
    }

    #[test]
    fn test_item_id_from_json() {
        let n: ItemId = serde_json::from_str("42").unwrap();
        let s: ItemId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(n, ItemId::Int(42));
        assert_eq!(s, ItemId::Text("42".into()));
        assert_ne!(n, s);
    }

    #[test]
    fn test_sentence_item_label() {
        let span = SentenceItem::Span(SpanLabel::new("John", LabelValue::single("B-PER")));
        let bare = SentenceItem::Bare(LabelValue::single("O"));
        assert_eq!(span.label(), &LabelValue::single("B-PER"));
        assert_eq!(bare.into_label(), LabelValue::single("O"));
    }
}
