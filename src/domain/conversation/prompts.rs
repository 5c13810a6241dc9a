//! Bot prompt text.
//!
//! Every prompt is a pure function of the state data it mentions, so a
//! scripted transcript always produces the same replies.

use crate::domain::form::{FieldSpec, FieldType, FormDraft, Theme};
use crate::domain::foundation::FormId;

/// Field-type menu, in the order the user picks from (1-based).
pub const FIELD_TYPE_MENU: [(FieldType, &str); 6] = [
    (FieldType::Text, "Text (free input)"),
    (FieldType::Number, "Number"),
    (FieldType::Date, "Date"),
    (FieldType::Checkbox, "Yes/No (checkbox)"),
    (FieldType::Select, "Dropdown (multiple options)"),
    (FieldType::Textarea, "Long text (textarea)"),
];

pub const WELCOME: &str = "👋 Hi! I'm your TiD Forms assistant. I'll help you create a form \
through a short conversation. What would you like to name your form?";

pub const NAME_REASK: &str = "Please tell me what you'd like to name your form.";

pub const FIELDS_REASK: &str = "I didn't catch any field names. Please list the fields \
separated by commas, for example: Name, Email, Message.";

pub const FIELD_TYPE_REASK: &str = "Please enter a number between 1 and 6.";

pub const OPTIONS_REASK: &str =
    "Please list at least one option, separated by commas (e.g., Small, Medium, Large).";

pub const CHECKBOX_TEXT_REASK: &str = "Please enter the text to show next to the checkbox.";

pub const GDPR_REASK: &str = "Should I add a GDPR consent checkbox? Please answer yes or no.";

pub const THEME_REASK: &str = "Please enter a number between 1 and 5.";

pub const CONFIRMATION_REASK: &str =
    "Reply \"yes\" to create your form, or \"no\" to make changes.";

pub const MODIFY: &str = "No problem! What would you like to change? You can say \
\"start over\" to begin again, or reply anything else to create the form as it is and \
edit it later.";

pub const RESTART: &str = "Let's start fresh! What would you like to name your new form?";

pub const INCOMPLETE: &str = "Something is missing from this form, so I can't create it yet. \
Say \"start over\" to begin again.";

pub const MATERIALIZE_FAILED: &str = "Sorry, I couldn't create your form just now. \
Your answers are saved - reply \"yes\" to try again.";

pub fn name_accepted(name: &str) -> String {
    format!(
        "Perfect! \"{}\" is a great name. Now, what data fields do you want to collect? \
         (For example: Name, Email, Phone, Company, Message)",
        name
    )
}

fn field_type_menu() -> String {
    FIELD_TYPE_MENU
        .iter()
        .enumerate()
        .map(|(i, (_, label))| format!("{}. {}", i + 1, label))
        .collect::<Vec<_>>()
        .join("\n")
}

fn field_labels(fields: &[FieldSpec]) -> String {
    fields
        .iter()
        .map(FieldSpec::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// First clarification question after the field list was collected.
pub fn first_type_question(resolved: &[FieldSpec], label: &str) -> String {
    let understood = if resolved.is_empty() {
        "Great!".to_string()
    } else {
        format!("Great! I understand these fields: {}.", field_labels(resolved))
    };
    format!(
        "{}\n\nI need help with \"{}\" - what type of field is this?\n{}\n\nJust reply with the number.",
        understood,
        label,
        field_type_menu()
    )
}

/// Clarification question for every label after the first.
pub fn next_type_question(label: &str) -> String {
    format!(
        "Got it! Now I need help with \"{}\" - what type of field is this?\n{}\n\nJust reply with the number.",
        label,
        field_type_menu()
    )
}

pub fn options_question(label: &str) -> String {
    format!(
        "What options should \"{}\" have? (separate with commas, e.g., Small, Medium, Large)",
        label
    )
}

pub fn checkbox_text_question(label: &str) -> String {
    format!(
        "What should the checkbox text for \"{}\" say? (e.g., \"I agree to the terms and conditions\")",
        label
    )
}

pub fn gdpr_question(fields: &[FieldSpec]) -> String {
    format!(
        "Perfect! I've set up these fields: {}.\n\nFor GDPR compliance, should I add a consent checkbox? (yes/no)",
        field_labels(fields)
    )
}

pub fn theme_menu(gdpr_enabled: bool) -> String {
    let ack = if gdpr_enabled {
        "Great! GDPR consent will be included."
    } else {
        "Understood, no GDPR consent checkbox will be added."
    };
    let icons = ["🌟", "💼", "✨", "🎨", "🤍"];
    let menu = Theme::ALL
        .iter()
        .zip(icons)
        .enumerate()
        .map(|(i, (theme, icon))| {
            format!("{}. {} {} ({})", i + 1, icon, theme.display_name(), theme.tagline())
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{}\n\nNow choose your form theme:\n{}\n\nJust enter the number of your choice.",
        ack, menu
    )
}

/// Configuration summary shown before confirmation.
pub fn summary(draft: &FormDraft) -> String {
    let fields = draft
        .fields()
        .iter()
        .map(FieldSpec::summary)
        .collect::<Vec<_>>()
        .join(", ");
    let gdpr = if draft.gdpr_enabled().unwrap_or(false) {
        "✅ **GDPR:** Consent checkbox included"
    } else {
        "❌ **GDPR:** No consent checkbox"
    };
    format!(
        "Perfect! Here's your form configuration:\n\n📝 **Form Name:** {}\n📋 **Fields:** {}\n{}\n🎨 **Theme:** {}\n\n\
         Does this look correct? Reply \"yes\" to create your form, or \"no\" to make changes.",
        draft.name().unwrap_or_default(),
        fields,
        gdpr,
        draft.theme().unwrap_or_default().display_name()
    )
}

pub fn completed(form_name: &str, form_id: FormId, links: &FormLinks) -> String {
    format!(
        "🎉 **Form Created Successfully!**\n\nYour \"{}\" form is ready! Here are your integration options:\n\n\
         **📋 Form ID:** {}\n**🔗 Direct Link:** {}\n**👁️ Preview:** {}\n\n**💻 Embed Code:**\n{}",
        form_name,
        form_id,
        links.direct_link(form_id),
        links.preview_link(form_id),
        links.embed_code(form_id)
    )
}

/// Completion reached from `modify`: the form is created as it stands.
pub fn completed_after_modify(form_name: &str, form_id: FormId, links: &FormLinks) -> String {
    format!(
        "I understand you want to make changes. For now I've created the form so you can edit it later.\n\n{}",
        completed(form_name, form_id, links)
    )
}

pub fn already_completed(form_id: FormId) -> String {
    format!(
        "This conversation is already completed - your form was created with ID {}. \
         Start a new conversation to build another form.",
        form_id
    )
}

/// Public URLs for a materialized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLinks {
    base_url: String,
}

impl FormLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn direct_link(&self, form_id: FormId) -> String {
        format!("{}/form/{}", self.base_url, form_id)
    }

    pub fn preview_link(&self, form_id: FormId) -> String {
        format!("{}/form/{}/preview", self.base_url, form_id)
    }

    /// The iframe snippet a site owner pastes into their page.
    pub fn embed_code(&self, form_id: FormId) -> String {
        format!(
            "<iframe src=\"{}/embed/{}\" width=\"100%\" height=\"600\" frameborder=\"0\"></iframe>",
            self.base_url, form_id
        )
    }
}

impl Default for FormLinks {
    fn default() -> Self {
        Self::new("https://forms.tid.com")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_menu_lists_six_numbered_entries() {
        let menu = field_type_menu();
        assert!(menu.starts_with("1. Text (free input)"));
        assert!(menu.contains("5. Dropdown (multiple options)"));
        assert!(menu.ends_with("6. Long text (textarea)"));
    }

    #[test]
    fn first_type_question_mentions_resolved_fields() {
        let resolved = vec![FieldSpec::simple("Name", FieldType::Text).unwrap()];
        let prompt = first_type_question(&resolved, "Shoe Size");
        assert!(prompt.contains("I understand these fields: Name."));
        assert!(prompt.contains("\"Shoe Size\""));
    }

    #[test]
    fn first_type_question_without_resolved_fields() {
        let prompt = first_type_question(&[], "Company");
        assert!(!prompt.contains("I understand these fields"));
    }

    #[test]
    fn theme_menu_has_five_themes() {
        let menu = theme_menu(true);
        assert!(menu.starts_with("Great! GDPR consent will be included."));
        assert!(menu.contains("1. 🌟 Modern (Purple-Blue Gradients)"));
        assert!(menu.contains("5. 🤍 Minimal (Clean & Simple)"));
    }

    #[test]
    fn summary_renders_fields_gdpr_and_theme() {
        let mut draft = FormDraft::new();
        draft.set_name("Shop");
        draft.add_fields([
            FieldSpec::simple("Name", FieldType::Text).unwrap(),
            FieldSpec::dropdown("Size", ["S", "M", "L"]).unwrap(),
        ]);
        draft.set_gdpr(false);
        draft.set_theme(Theme::Creative);

        let text = summary(&draft);
        assert!(text.contains("**Form Name:** Shop"));
        assert!(text.contains("**Fields:** Name (text), Size (S/M/L)"));
        assert!(text.contains("No consent checkbox"));
        assert!(text.contains("**Theme:** Creative"));
    }

    #[test]
    fn links_strip_trailing_slash() {
        let links = FormLinks::new("https://example.com/");
        assert_eq!(links.direct_link(FormId::new(7)), "https://example.com/form/7");
        assert_eq!(links.preview_link(FormId::new(7)), "https://example.com/form/7/preview");
    }

    #[test]
    fn embed_code_embeds_form_id_verbatim() {
        let code = FormLinks::default().embed_code(FormId::new(42));
        assert_eq!(
            code,
            "<iframe src=\"https://forms.tid.com/embed/42\" width=\"100%\" height=\"600\" frameborder=\"0\"></iframe>"
        );
    }

    #[test]
    fn completed_message_contains_id_and_links() {
        let links = FormLinks::default();
        let text = completed("Contact Us", FormId::new(9), &links);
        assert!(text.contains("**📋 Form ID:** 9"));
        assert!(text.contains("https://forms.tid.com/form/9"));
        assert!(text.contains("\"Contact Us\""));
        assert!(text.contains(&links.embed_code(FormId::new(9))));
    }
}
