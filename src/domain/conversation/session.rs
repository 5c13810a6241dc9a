//! Session aggregate.
//!
//! A session is one user's form-building conversation: the current
//! dialogue state, the draft configuration collected so far, and the
//! append-only message log.

use serde::{Deserialize, Serialize};

use super::engine::Turn;
use super::message::ChatMessage;
use super::prompts;
use super::state::DialogueState;
use crate::domain::form::FormDraft;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, StateMachine, Timestamp};

/// Session aggregate.
///
/// # Invariants
///
/// - `messages` only ever grows
/// - every change of `state` follows the dialogue transition table
/// - once `Completed`, `draft` no longer changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    state: DialogueState,
    draft: FormDraft,
    messages: Vec<ChatMessage>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Session {
    /// Starts a conversation in `form_name` with the welcome prompt logged.
    pub fn start(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            state: DialogueState::default(),
            draft: FormDraft::new(),
            messages: vec![ChatMessage::bot(prompts::WELCOME)],
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> &DialogueState {
        &self.state
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records one exchange: the user's text, then the engine's reply, and
    /// moves to the turn's state and draft.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the turn's state is not reachable from
    ///   the current one; the session is left untouched
    pub fn apply_turn(&mut self, user_text: &str, turn: Turn) -> Result<(), DomainError> {
        let from = self.state.step();
        let to = turn.state.step();
        if !from.can_transition_to(&to) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot move dialogue from {} to {}", from, to),
            ));
        }
        if self.state.is_completed() && (turn.state != self.state || turn.draft != self.draft) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Completed conversations cannot change",
            ));
        }

        self.messages.push(ChatMessage::user(user_text));
        self.messages.push(ChatMessage::bot(turn.reply));
        self.state = turn.state;
        self.draft = turn.draft;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
