//! Dialogue state machine.
//!
//! `DialogueState` is the full state of a conversation, with each variant
//! carrying only the data it needs. `DialogueStep` is its flat name, used
//! on the wire and for checking transitions against the table.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FormId, StateMachine};

/// Name of a dialogue state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStep {
    FormName,
    Fields,
    FieldType,
    DropdownOptions,
    CheckboxText,
    Gdpr,
    Theme,
    Confirmation,
    Modify,
    Completed,
}

impl DialogueStep {
    /// Returns the snake_case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FormName => "form_name",
            Self::Fields => "fields",
            Self::FieldType => "field_type",
            Self::DropdownOptions => "dropdown_options",
            Self::CheckboxText => "checkbox_text",
            Self::Gdpr => "gdpr",
            Self::Theme => "theme",
            Self::Confirmation => "confirmation",
            Self::Modify => "modify",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for DialogueStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for DialogueStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    // Every state may loop on itself: that is how re-asks are expressed.
    fn valid_transitions(&self) -> Vec<Self> {
        use DialogueStep::*;
        match self {
            FormName => vec![FormName, Fields],
            Fields => vec![Fields, FieldType, Gdpr],
            FieldType => vec![FieldType, DropdownOptions, CheckboxText, Gdpr],
            DropdownOptions => vec![DropdownOptions, FieldType, Gdpr],
            CheckboxText => vec![CheckboxText, FieldType, Gdpr],
            Gdpr => vec![Gdpr, Theme],
            Theme => vec![Theme, Confirmation],
            Confirmation => vec![Confirmation, Completed, Modify],
            Modify => vec![Modify, FormName, Completed],
            Completed => vec![Completed],
        }
    }
}

/// Queue of field labels awaiting a user-chosen type, with a cursor on
/// the one currently being asked about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingFields {
    queue: Vec<String>,
    cursor: usize,
}

impl PendingFields {
    /// Starts at the first label. Returns `None` for an empty queue.
    pub fn new(queue: Vec<String>) -> Option<Self> {
        if queue.is_empty() {
            None
        } else {
            Some(Self { queue, cursor: 0 })
        }
    }

    /// The label currently being clarified.
    pub fn current(&self) -> Option<&str> {
        self.queue.get(self.cursor).map(String::as_str)
    }

    /// Moves to the next label, or `None` once the queue is exhausted.
    pub fn advance(&self) -> Option<Self> {
        let cursor = self.cursor + 1;
        (cursor < self.queue.len()).then(|| Self {
            queue: self.queue.clone(),
            cursor,
        })
    }
}

/// Full dialogue state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum DialogueState {
    /// Waiting for the form name.
    #[default]
    FormName,

    /// Waiting for the comma-separated field list.
    Fields,

    /// Asking which type the current pending label is.
    FieldType { pending: PendingFields },

    /// Collecting options for a dropdown named `label`.
    DropdownOptions { pending: PendingFields, label: String },

    /// Collecting the text shown beside a checkbox named `label`.
    CheckboxText { pending: PendingFields, label: String },

    /// Asking whether to add a GDPR consent checkbox.
    Gdpr,

    /// Asking which theme to use.
    Theme,

    /// Showing the summary and waiting for yes/no.
    Confirmation,

    /// The user declined the summary.
    Modify,

    /// Form materialized; read-only from here.
    Completed { form_id: FormId },
}

impl DialogueState {
    /// Returns the flat step name.
    pub fn step(&self) -> DialogueStep {
        match self {
            Self::FormName => DialogueStep::FormName,
            Self::Fields => DialogueStep::Fields,
            Self::FieldType { .. } => DialogueStep::FieldType,
            Self::DropdownOptions { .. } => DialogueStep::DropdownOptions,
            Self::CheckboxText { .. } => DialogueStep::CheckboxText,
            Self::Gdpr => DialogueStep::Gdpr,
            Self::Theme => DialogueStep::Theme,
            Self::Confirmation => DialogueStep::Confirmation,
            Self::Modify => DialogueStep::Modify,
            Self::Completed { .. } => DialogueStep::Completed,
        }
    }

    /// Returns the materialized form id once completed.
    pub fn form_id(&self) -> Option<FormId> {
        match self {
            Self::Completed { form_id } => Some(*form_id),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}
