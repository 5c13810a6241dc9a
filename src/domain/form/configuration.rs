//! Form configuration: the dialogue's accumulated output.
//!
//! `FormDraft` is the mutable, partially-filled configuration carried by a
//! session while the dialogue runs. `FormConfiguration` is the validated,
//! immutable snapshot produced from it and handed to the form store.

use serde::{Deserialize, Serialize};

use super::field::FieldSpec;
use crate::domain::foundation::DomainError;

/// Visual theme applied to a rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Modern,
    Professional,
    Elegant,
    Creative,
    Minimal,
}

impl Theme {
    /// All themes in menu order.
    pub const ALL: [Theme; 5] = [
        Theme::Modern,
        Theme::Professional,
        Theme::Elegant,
        Theme::Creative,
        Theme::Minimal,
    ];

    /// Maps a 1-based menu number to a theme.
    pub fn from_menu_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    /// Human-readable name shown in summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Modern => "Modern",
            Self::Professional => "Professional",
            Self::Elegant => "Elegant",
            Self::Creative => "Creative",
            Self::Minimal => "Minimal",
        }
    }

    /// Short description shown in the theme menu.
    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Modern => "Purple-Blue Gradients",
            Self::Professional => "Blue Corporate",
            Self::Elegant => "Luxury Purple",
            Self::Creative => "Colorful & Vibrant",
            Self::Minimal => "Clean & Simple",
        }
    }
}

/// Partially-built form configuration owned by a dialogue session.
///
/// Grows monotonically until the session restarts, at which point it is
/// replaced by an empty draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    fields: Vec<FieldSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gdpr_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn gdpr_enabled(&self) -> Option<bool> {
        self.gdpr_enabled
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    /// Returns true if nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into().trim().to_string());
    }

    /// Appends user-declared fields, keeping any consent field last.
    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = FieldSpec>) {
        let consent = self.take_consent();
        self.fields.extend(fields);
        if let Some(consent) = consent {
            self.fields.push(consent);
        }
    }

    /// Records the GDPR answer; enabling it appends exactly one consent field.
    pub fn set_gdpr(&mut self, enabled: bool) {
        self.take_consent();
        if enabled {
            self.fields.push(FieldSpec::gdpr_consent());
        }
        self.gdpr_enabled = Some(enabled);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn take_consent(&mut self) -> Option<FieldSpec> {
        let pos = self.fields.iter().position(FieldSpec::is_gdpr_consent)?;
        Some(self.fields.remove(pos))
    }

    /// Produces the immutable, validated configuration snapshot.
    ///
    /// Unanswered GDPR defaults to disabled and an unpicked theme to `Modern`.
    /// The dialogue never asks for a description, so the snapshot has none.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if the name is missing or the fields are invalid
    pub fn finalize(&self) -> Result<FormConfiguration, DomainError> {
        let name = self
            .name
            .clone()
            .ok_or_else(|| DomainError::invalid_configuration("name", "Form name is missing"))?;
        FormConfiguration::new(
            name,
            None,
            self.theme.unwrap_or_default(),
            self.gdpr_enabled.unwrap_or(false),
            self.fields.clone(),
        )
    }
}

/// A complete, validated form definition.
///
/// # Invariants
///
/// - `name` is non-empty
/// - `fields` is non-empty and every field satisfies its own invariants
/// - if `gdpr_enabled`, the last field is the only consent field;
///   otherwise there is no consent field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfiguration {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    theme: Theme,
    gdpr_enabled: bool,
    fields: Vec<FieldSpec>,
}

impl FormConfiguration {
    /// Creates a configuration, checking all invariants.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        theme: Theme,
        gdpr_enabled: bool,
        fields: Vec<FieldSpec>,
    ) -> Result<Self, DomainError> {
        let config = Self {
            name: name.into().trim().to_string(),
            description,
            theme,
            gdpr_enabled,
            fields,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn gdpr_enabled(&self) -> bool {
        self.gdpr_enabled
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Checks the configuration invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::invalid_configuration("name", "Form name is missing"));
        }
        if self.fields.is_empty() {
            return Err(DomainError::invalid_configuration(
                "fields",
                "A form needs at least one field",
            ));
        }
        for field in &self.fields {
            field
                .validate()
                .map_err(|e| DomainError::invalid_configuration("fields", e.to_string()))?;
        }

        let consent_count = self.fields.iter().filter(|f| f.is_gdpr_consent()).count();
        let consent_is_last = self.fields.last().is_some_and(FieldSpec::is_gdpr_consent);
        let consistent = if self.gdpr_enabled {
            consent_count == 1 && consent_is_last
        } else {
            consent_count == 0
        };
        if !consistent {
            return Err(DomainError::invalid_configuration(
                "gdpr",
                "GDPR consent field must appear exactly once, after all other fields, when enabled",
            ));
        }
        Ok(())
    }
}
