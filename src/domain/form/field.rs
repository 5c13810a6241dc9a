//! Form field value objects.
//!
//! A `FieldSpec` is one input on a form. Type-specific metadata lives on
//! the field itself: dropdowns carry their options, checkboxes carry the
//! text shown next to the box.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Machine name of the synthesized privacy consent field.
pub const GDPR_FIELD_NAME: &str = "gdpr_consent";

/// Label of the synthesized privacy consent field.
pub const GDPR_FIELD_LABEL: &str = "Privacy Consent";

/// Text shown next to the synthesized privacy consent checkbox.
pub const GDPR_CONSENT_TEXT: &str =
    "I agree to the processing of my personal data in accordance with the privacy policy";

/// The input type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Email,
    Tel,
    Number,
    Date,
    Checkbox,
    /// A dropdown with a fixed option list.
    Select,
    Textarea,
}

impl FieldType {
    /// Returns the lowercase wire name, also used in configuration summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Number => "number",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::Textarea => "textarea",
        }
    }

    /// Returns true if fields of this type need human-supplied metadata
    /// (options or checkbox text) before they are complete.
    pub fn needs_metadata(&self) -> bool {
        matches!(self, Self::Select | Self::Checkbox)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placeholder text for a field, from the fixed per-type table.
///
/// Dropdowns and checkboxes have no placeholder.
pub fn placeholder_for(field_type: FieldType, label: &str) -> Option<String> {
    let lowered = label.to_lowercase();
    match field_type {
        FieldType::Email => Some("your@email.com".to_string()),
        FieldType::Tel => Some("+1 (555) 123-4567".to_string()),
        FieldType::Textarea => Some(format!("Enter your {}...", lowered)),
        FieldType::Number => Some("Enter a number".to_string()),
        FieldType::Date => Some("YYYY-MM-DD".to_string()),
        FieldType::Text => Some(format!("Enter your {}", lowered)),
        FieldType::Select | FieldType::Checkbox => None,
    }
}

/// Derives a machine name from a display label.
///
/// Lowercases, keeps ASCII alphanumerics and collapses everything else
/// into single underscores. "E-mail Address" becomes `e_mail_address`.
pub fn machine_name(label: &str) -> String {
    let mut name = String::with_capacity(label.len());
    let mut pending_sep = false;
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !name.is_empty() {
                name.push('_');
            }
            pending_sep = false;
            name.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    if name.is_empty() {
        "field".to_string()
    } else {
        name
    }
}

/// One field of a form.
///
/// # Invariants
///
/// - `label` is non-empty
/// - `options` is non-empty iff `field_type` is `Select`
/// - `checkbox_text` is set iff `field_type` is `Checkbox`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    name: String,
    label: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    checkbox_text: Option<String>,
}

impl FieldSpec {
    /// Creates a required field of a type that needs no extra metadata.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the label is blank
    /// - `InvalidFormat` for `Select`/`Checkbox`, which have dedicated constructors
    pub fn simple(label: impl Into<String>, field_type: FieldType) -> Result<Self, ValidationError> {
        if field_type.needs_metadata() {
            return Err(ValidationError::invalid_format(
                "type",
                format!("{} fields need dedicated metadata", field_type),
            ));
        }
        let label = Self::clean_label(label)?;
        Ok(Self {
            name: Self::field_name(&label),
            placeholder: placeholder_for(field_type, &label),
            label,
            field_type,
            required: true,
            options: Vec::new(),
            checkbox_text: None,
        })
    }

    /// Creates a required dropdown field.
    ///
    /// Blank options are dropped; at least one must remain.
    pub fn dropdown<I, S>(label: impl Into<String>, options: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label = Self::clean_label(label)?;
        let options: Vec<String> = options
            .into_iter()
            .map(Into::into)
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        if options.is_empty() {
            return Err(ValidationError::empty_field("options"));
        }
        Ok(Self {
            name: Self::field_name(&label),
            label,
            field_type: FieldType::Select,
            required: true,
            placeholder: None,
            options,
            checkbox_text: None,
        })
    }

    /// Creates a required checkbox field with the text shown beside it.
    pub fn checkbox(
        label: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let label = Self::clean_label(label)?;
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(ValidationError::empty_field("checkbox_text"));
        }
        Ok(Self {
            name: Self::field_name(&label),
            label,
            field_type: FieldType::Checkbox,
            required: true,
            placeholder: None,
            options: Vec::new(),
            checkbox_text: Some(text),
        })
    }

    /// The synthesized privacy consent checkbox.
    pub fn gdpr_consent() -> Self {
        Self {
            name: GDPR_FIELD_NAME.to_string(),
            label: GDPR_FIELD_LABEL.to_string(),
            field_type: FieldType::Checkbox,
            required: true,
            placeholder: None,
            options: Vec::new(),
            checkbox_text: Some(GDPR_CONSENT_TEXT.to_string()),
        }
    }

    /// Machine name for a user-declared field. The consent field's name is
    /// reserved, so a user label that derives it gets a suffix.
    fn field_name(label: &str) -> String {
        let name = machine_name(label);
        if name == GDPR_FIELD_NAME {
            format!("{}_1", name)
        } else {
            name
        }
    }

    fn clean_label(label: impl Into<String>) -> Result<String, ValidationError> {
        let label = label.into().trim().to_string();
        if label.is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        Ok(label)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn checkbox_text(&self) -> Option<&str> {
        self.checkbox_text.as_deref()
    }

    /// Returns true if this is the synthesized privacy consent field.
    pub fn is_gdpr_consent(&self) -> bool {
        self.name == GDPR_FIELD_NAME && self.field_type == FieldType::Checkbox
    }

    /// Checks the type/metadata invariants.
    ///
    /// Deserialized specs skip the constructors, so stores call this before trusting them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        let is_select = self.field_type == FieldType::Select;
        if is_select != !self.options.is_empty() {
            return Err(ValidationError::invalid_format(
                "options",
                format!("'{}' options must be present only on select fields", self.label),
            ));
        }
        let is_checkbox = self.field_type == FieldType::Checkbox;
        if is_checkbox != self.checkbox_text.is_some() {
            return Err(ValidationError::invalid_format(
                "checkbox_text",
                format!("'{}' checkbox text must be present only on checkboxes", self.label),
            ));
        }
        Ok(())
    }

    /// One-line rendering for configuration summaries.
    ///
    /// Dropdowns list their options (`Size (S/M/L)`), everything else its type.
    pub fn summary(&self) -> String {
        if self.field_type == FieldType::Select {
            format!("{} ({})", self.label, self.options.join("/"))
        } else {
            format!("{} ({})", self.label, self.field_type)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_name_collapses_separators() {
        assert_eq!(machine_name("E-mail Address"), "e_mail_address");
        assert_eq!(machine_name("  Full   Name "), "full_name");
        assert_eq!(machine_name("!!!"), "field");
    }

    #[test]
    fn placeholder_table_matches_types() {
        assert_eq!(placeholder_for(FieldType::Email, "Email").as_deref(), Some("your@email.com"));
        assert_eq!(placeholder_for(FieldType::Tel, "Phone").as_deref(), Some("+1 (555) 123-4567"));
        assert_eq!(
            placeholder_for(FieldType::Textarea, "Message").as_deref(),
            Some("Enter your message...")
        );
        assert_eq!(placeholder_for(FieldType::Number, "Age").as_deref(), Some("Enter a number"));
        assert_eq!(placeholder_for(FieldType::Date, "DOB").as_deref(), Some("YYYY-MM-DD"));
        assert_eq!(placeholder_for(FieldType::Text, "Full Name").as_deref(), Some("Enter your full name"));
        assert_eq!(placeholder_for(FieldType::Select, "Size"), None);
    }

    #[test]
    fn simple_field_is_required_with_placeholder() {
        let field = FieldSpec::simple("Email", FieldType::Email).unwrap();
        assert!(field.required());
        assert_eq!(field.name(), "email");
        assert_eq!(field.placeholder(), Some("your@email.com"));
        assert!(field.validate().is_ok());
    }

    #[test]
    fn simple_rejects_metadata_types() {
        assert!(FieldSpec::simple("Size", FieldType::Select).is_err());
        assert!(FieldSpec::simple("Terms", FieldType::Checkbox).is_err());
    }

    #[test]
    fn simple_rejects_blank_label() {
        assert!(matches!(
            FieldSpec::simple("  ", FieldType::Text),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn dropdown_trims_and_drops_blank_options() {
        let field = FieldSpec::dropdown("Shoe Size", [" S", "", "M ", "L"]).unwrap();
        assert_eq!(field.field_type(), FieldType::Select);
        assert_eq!(field.options(), ["S", "M", "L"]);
        assert!(field.validate().is_ok());
    }

    #[test]
    fn dropdown_requires_an_option() {
        assert!(FieldSpec::dropdown("Size", [" ", ""]).is_err());
    }

    #[test]
    fn checkbox_carries_text() {
        let field = FieldSpec::checkbox("Newsletter", "Send me news").unwrap();
        assert_eq!(field.checkbox_text(), Some("Send me news"));
        assert!(field.options().is_empty());
        assert!(field.validate().is_ok());
    }

    #[test]
    fn gdpr_consent_field_is_fixed() {
        let field = FieldSpec::gdpr_consent();
        assert!(field.is_gdpr_consent());
        assert_eq!(field.label(), GDPR_FIELD_LABEL);
        assert_eq!(field.checkbox_text(), Some(GDPR_CONSENT_TEXT));
    }

    #[test]
    fn user_fields_never_take_the_consent_name() {
        let checkbox = FieldSpec::checkbox("GDPR Consent", "I consent").unwrap();
        assert_eq!(checkbox.name(), "gdpr_consent_1");
        assert!(!checkbox.is_gdpr_consent());

        let text = FieldSpec::simple("gdpr-consent", FieldType::Text).unwrap();
        assert_eq!(text.name(), "gdpr_consent_1");
    }

    #[test]
    fn validate_catches_options_on_non_select() {
        let json = r#"{"name":"x","label":"X","type":"text","required":true,"options":["a"]}"#;
        let field: FieldSpec = serde_json::from_str(json).unwrap();
        assert!(field.validate().is_err());
    }

    #[test]
    fn validate_catches_checkbox_without_text() {
        let json = r#"{"name":"x","label":"X","type":"checkbox","required":true}"#;
        let field: FieldSpec = serde_json::from_str(json).unwrap();
        assert!(field.validate().is_err());
    }

    #[test]
    fn serializes_type_key_and_skips_empty_metadata() {
        let field = FieldSpec::simple("Name", FieldType::Text).unwrap();
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "text");
        assert!(json.get("options").is_none());
        assert!(json.get("checkbox_text").is_none());
    }

    #[test]
    fn summary_lists_dropdown_options() {
        let dropdown = FieldSpec::dropdown("Size", ["S", "M"]).unwrap();
        assert_eq!(dropdown.summary(), "Size (S/M)");
        let text = FieldSpec::simple("Name", FieldType::Text).unwrap();
        assert_eq!(text.summary(), "Name (text)");
    }
}
