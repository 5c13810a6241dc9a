//! Form module - form definitions and field inference.
//!
//! - `field` - `FieldSpec`, `FieldType` and the placeholder table
//! - `configuration` - `FormDraft` (in-progress) and `FormConfiguration` (validated snapshot)
//! - `classifier` - keyword-table label classification
//! - `collector` - comma-separated list to classified fields

mod classifier;
mod collector;
mod configuration;
mod field;

pub use classifier::{classify, Classification, FieldClassifier, KeywordClassifier};
pub use collector::{split_list, CollectedFields, FieldCollector};
pub use configuration::{FormConfiguration, FormDraft, Theme};
pub use field::{
    machine_name, placeholder_for, FieldSpec, FieldType, GDPR_CONSENT_TEXT, GDPR_FIELD_LABEL,
    GDPR_FIELD_NAME,
};
