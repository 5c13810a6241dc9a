//! Field collector - turns a comma-separated field list into field specs.
//!
//! Labels the classifier can type on its own become `FieldSpec`s straight
//! away. The rest are returned in order as `unresolved` so the dialogue can
//! ask the user about each one. A dropdown cannot exist without its options,
//! so labels classified as `select` are also handed back for clarification.

use super::classifier::{Classification, FieldClassifier, KeywordClassifier};
use super::field::{FieldSpec, FieldType};

/// Result of collecting a raw field list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedFields {
    pub resolved: Vec<FieldSpec>,
    pub unresolved: Vec<String>,
}

impl CollectedFields {
    /// Returns true if the input contained no usable labels.
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty() && self.unresolved.is_empty()
    }
}

/// Splits on commas, trims, and drops empty tokens.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classifies field labels and partitions them into resolved and unresolved.
#[derive(Debug, Clone, Default)]
pub struct FieldCollector<C = KeywordClassifier> {
    classifier: C,
}

impl FieldCollector<KeywordClassifier> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: FieldClassifier> FieldCollector<C> {
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Collects a comma-separated list of field labels.
    pub fn collect(&self, raw: &str) -> CollectedFields {
        let mut collected = CollectedFields::default();
        for label in split_list(raw) {
            match self.resolve(&label) {
                Some(field) => collected.resolved.push(field),
                None => collected.unresolved.push(label),
            }
        }
        collected
    }

    fn resolve(&self, label: &str) -> Option<FieldSpec> {
        match self.classifier.classify(label) {
            Classification::Unknown | Classification::Known(FieldType::Select) => None,
            // The label doubles as the checkbox text until the user says otherwise.
            Classification::Known(FieldType::Checkbox) => FieldSpec::checkbox(label, label).ok(),
            Classification::Known(field_type) => FieldSpec::simple(label, field_type).ok(),
        }
    }
}
