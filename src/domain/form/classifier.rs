//! Field classifier - maps a free-text field label to an input type.
//!
//! Classification is case-insensitive substring matching against an
//! ordered keyword table. The first matching rule wins, so the more
//! specific cues ("message", "comment") sit above the generic "name" cue.

use serde::{Deserialize, Serialize};

use super::field::FieldType;

/// Outcome of classifying a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "type")]
pub enum Classification {
    Known(FieldType),
    Unknown,
}

impl Classification {
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Self::Known(t) => Some(*t),
            Self::Unknown => None,
        }
    }
}

/// Port for turning a label into a field type.
///
/// Must be total and pure: every string classifies, and the same input
/// always yields the same answer.
pub trait FieldClassifier: Send + Sync {
    fn classify(&self, label: &str) -> Classification;
}

/// Ordered keyword rules. Order is significant.
const RULES: &[(&[&str], FieldType)] = &[
    (&["email", "e-mail"], FieldType::Email),
    (&["phone", "telephone", "mobile"], FieldType::Tel),
    (&["message", "comment", "description", "bio"], FieldType::Textarea),
    (&["name", "title", "subject"], FieldType::Text),
    (&["age", "number", "count"], FieldType::Number),
    (&["date", "birth", "dob"], FieldType::Date),
    (&["agree", "consent", "terms"], FieldType::Checkbox),
    (&["country", "state", "size", "type", "category"], FieldType::Select),
];

/// The fixed keyword-table classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl FieldClassifier for KeywordClassifier {
    fn classify(&self, label: &str) -> Classification {
        classify(label)
    }
}

/// Classifies a label with the keyword table.
pub fn classify(label: &str) -> Classification {
    let lowered = label.to_lowercase();
    RULES
        .iter()
        .find(|(cues, _)| cues.iter().any(|cue| lowered.contains(cue)))
        .map(|(_, field_type)| Classification::Known(*field_type))
        .unwrap_or(Classification::Unknown)
}
