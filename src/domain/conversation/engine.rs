//! Dialogue engine.
//!
//! The engine is a pure transition function: given a session and one line
//! of user input it returns the next state, the updated draft and the bot
//! reply. The one side effect in the whole dialogue, materializing the
//! form, is returned to the caller as [`Advance::Materialize`] instead of
//! being performed here. The caller runs it and reports back through
//! [`DialogueEngine::completion`] or [`DialogueEngine::materialize_failed`].

use super::prompts::{self, FormLinks, FIELD_TYPE_MENU};
use super::session::Session;
use super::state::{DialogueState, PendingFields};
use crate::domain::form::{
    split_list, FieldClassifier, FieldCollector, FieldSpec, FieldType, FormConfiguration,
    FormDraft, KeywordClassifier, Theme,
};
use crate::domain::foundation::FormId;

/// Answers to the GDPR question that enable the consent checkbox.
const GDPR_YES: [&str; 4] = ["yes", "y", "true", "1"];

/// Answers to the summary that create the form.
const CONFIRM_YES: [&str; 4] = ["yes", "y", "confirm", "create"];

const START_OVER: &str = "start over";

/// Outcome of one engine step that needs no collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub state: DialogueState,
    pub draft: FormDraft,
    pub reply: String,
}

impl Turn {
    fn new(state: DialogueState, draft: FormDraft, reply: impl Into<String>) -> Self {
        Self {
            state,
            draft,
            reply: reply.into(),
        }
    }
}

/// What the caller must do after feeding input to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Record the turn as-is.
    Reply(Turn),
    /// Persist this configuration, then ask the engine for the completion turn.
    Materialize(FormConfiguration),
}

/// Scripted form-building dialogue.
#[derive(Debug, Clone, Default)]
pub struct DialogueEngine<C = KeywordClassifier> {
    collector: FieldCollector<C>,
    links: FormLinks,
}

impl DialogueEngine<KeywordClassifier> {
    pub fn new(links: FormLinks) -> Self {
        Self {
            collector: FieldCollector::new(),
            links,
        }
    }
}

impl<C: FieldClassifier> DialogueEngine<C> {
    pub fn with_collector(collector: FieldCollector<C>, links: FormLinks) -> Self {
        Self { collector, links }
    }

    pub fn links(&self) -> &FormLinks {
        &self.links
    }

    /// Runs one step of the dialogue.
    ///
    /// Never fails: malformed input yields a re-ask in the same state with
    /// the draft unchanged.
    pub fn advance(&self, session: &Session, input: &str) -> Advance {
        let state = session.state();
        let draft = session.draft();

        let input = input.trim();
        if input.is_empty() || state.is_completed() {
            return Advance::Reply(self.reask(state, draft));
        }

        match state {
            DialogueState::FormName => {
                let mut draft = draft.clone();
                draft.set_name(input);
                Advance::Reply(Turn::new(
                    DialogueState::Fields,
                    draft,
                    prompts::name_accepted(input),
                ))
            }
            DialogueState::Fields => Advance::Reply(self.on_fields(draft, input)),
            DialogueState::FieldType { pending } => {
                Advance::Reply(self.on_field_type(state, pending, draft, input))
            }
            DialogueState::DropdownOptions { pending, label } => {
                let turn = match FieldSpec::dropdown(label.as_str(), split_list(input)) {
                    Ok(field) => self.with_field(pending, draft, field),
                    Err(_) => self.reask(state, draft),
                };
                Advance::Reply(turn)
            }
            DialogueState::CheckboxText { pending, label } => {
                let turn = match FieldSpec::checkbox(label.as_str(), input) {
                    Ok(field) => self.with_field(pending, draft, field),
                    Err(_) => self.reask(state, draft),
                };
                Advance::Reply(turn)
            }
            DialogueState::Gdpr => {
                let enabled = GDPR_YES.contains(&input.to_lowercase().as_str());
                let mut draft = draft.clone();
                draft.set_gdpr(enabled);
                Advance::Reply(Turn::new(
                    DialogueState::Theme,
                    draft,
                    prompts::theme_menu(enabled),
                ))
            }
            DialogueState::Theme => match input.parse().ok().and_then(Theme::from_menu_choice) {
                Some(theme) => {
                    let mut draft = draft.clone();
                    draft.set_theme(theme);
                    let reply = prompts::summary(&draft);
                    Advance::Reply(Turn::new(DialogueState::Confirmation, draft, reply))
                }
                None => Advance::Reply(self.reask(state, draft)),
            },
            DialogueState::Confirmation => {
                if CONFIRM_YES.contains(&input.to_lowercase().as_str()) {
                    self.finalize(draft)
                } else {
                    Advance::Reply(Turn::new(DialogueState::Modify, draft.clone(), prompts::MODIFY))
                }
            }
            DialogueState::Modify => {
                if input.to_lowercase().contains(START_OVER) {
                    Advance::Reply(Turn::new(
                        DialogueState::FormName,
                        FormDraft::new(),
                        prompts::RESTART,
                    ))
                } else {
                    self.finalize(draft)
                }
            }
            DialogueState::Completed { .. } => Advance::Reply(self.reask(state, draft)),
        }
    }

    /// Turn recorded after the materializer returned `form_id`.
    pub fn completion(&self, session: &Session, form_id: FormId) -> Turn {
        let draft = session.draft().clone();
        let name = draft.name().unwrap_or_default().to_string();
        let reply = match session.state() {
            DialogueState::Modify => prompts::completed_after_modify(&name, form_id, &self.links),
            _ => prompts::completed(&name, form_id, &self.links),
        };
        Turn::new(DialogueState::Completed { form_id }, draft, reply)
    }

    /// Turn recorded when the materializer failed: nothing moves.
    pub fn materialize_failed(&self, session: &Session) -> Turn {
        Turn::new(
            session.state().clone(),
            session.draft().clone(),
            prompts::MATERIALIZE_FAILED,
        )
    }

    fn on_fields(&self, draft: &FormDraft, input: &str) -> Turn {
        let collected = self.collector.collect(input);
        if collected.is_empty() {
            return self.reask(&DialogueState::Fields, draft);
        }

        let mut next = draft.clone();
        next.add_fields(collected.resolved.iter().cloned());

        match PendingFields::new(collected.unresolved) {
            Some(pending) => {
                let label = pending.current().unwrap_or_default().to_string();
                Turn::new(
                    DialogueState::FieldType { pending },
                    next,
                    prompts::first_type_question(&collected.resolved, &label),
                )
            }
            None => {
                let reply = prompts::gdpr_question(next.fields());
                Turn::new(DialogueState::Gdpr, next, reply)
            }
        }
    }

    fn on_field_type(
        &self,
        state: &DialogueState,
        pending: &PendingFields,
        draft: &FormDraft,
        input: &str,
    ) -> Turn {
        let Some(label) = pending.current() else {
            return self.next_pending(pending, draft.clone());
        };
        let choice = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| FIELD_TYPE_MENU.get(i))
            .map(|(field_type, _)| *field_type);

        match choice {
            None => self.reask(state, draft),
            Some(FieldType::Select) => Turn::new(
                DialogueState::DropdownOptions {
                    pending: pending.clone(),
                    label: label.to_string(),
                },
                draft.clone(),
                prompts::options_question(label),
            ),
            Some(FieldType::Checkbox) => Turn::new(
                DialogueState::CheckboxText {
                    pending: pending.clone(),
                    label: label.to_string(),
                },
                draft.clone(),
                prompts::checkbox_text_question(label),
            ),
            Some(field_type) => match FieldSpec::simple(label, field_type) {
                Ok(field) => self.with_field(pending, draft, field),
                Err(_) => self.reask(state, draft),
            },
        }
    }

    fn with_field(&self, pending: &PendingFields, draft: &FormDraft, field: FieldSpec) -> Turn {
        let mut draft = draft.clone();
        draft.add_fields([field]);
        self.next_pending(pending, draft)
    }

    /// Moves to the next unresolved label, or on to the GDPR question.
    fn next_pending(&self, pending: &PendingFields, draft: FormDraft) -> Turn {
        match pending.advance() {
            Some(next) => {
                let reply = prompts::next_type_question(next.current().unwrap_or_default());
                Turn::new(DialogueState::FieldType { pending: next }, draft, reply)
            }
            None => {
                let reply = prompts::gdpr_question(draft.fields());
                Turn::new(DialogueState::Gdpr, draft, reply)
            }
        }
    }

    fn finalize(&self, draft: &FormDraft) -> Advance {
        match draft.finalize() {
            Ok(config) => Advance::Materialize(config),
            Err(_) => Advance::Reply(Turn::new(
                DialogueState::Modify,
                draft.clone(),
                prompts::INCOMPLETE,
            )),
        }
    }

    /// Same state, same draft, the state's re-ask text. A completed
    /// session only ever answers with the already-completed notice.
    fn reask(&self, state: &DialogueState, draft: &FormDraft) -> Turn {
        let reply = match state {
            DialogueState::FormName => prompts::NAME_REASK.to_string(),
            DialogueState::Fields => prompts::FIELDS_REASK.to_string(),
            DialogueState::FieldType { .. } => prompts::FIELD_TYPE_REASK.to_string(),
            DialogueState::DropdownOptions { .. } => prompts::OPTIONS_REASK.to_string(),
            DialogueState::CheckboxText { .. } => prompts::CHECKBOX_TEXT_REASK.to_string(),
            DialogueState::Gdpr => prompts::GDPR_REASK.to_string(),
            DialogueState::Theme => prompts::THEME_REASK.to_string(),
            DialogueState::Confirmation => prompts::CONFIRMATION_REASK.to_string(),
            DialogueState::Modify => prompts::MODIFY.to_string(),
            DialogueState::Completed { form_id } => prompts::already_completed(*form_id),
        };
        Turn::new(state.clone(), draft.clone(), reply)
    }
}
