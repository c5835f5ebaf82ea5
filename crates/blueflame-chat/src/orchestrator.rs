//! Chat orchestrator: ensures a session, stores both sides of the turn, and
//! composes the reply.
//!
//! Stateless between calls; all continuity goes through the document store.
//! The session insert and the two message inserts are independent writes
//! with no rollback.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use blueflame_core::config::ChatConfig;
use blueflame_core::store::{insert_record, query_records, DocumentStore, Filter, Stored};
use blueflame_core::types::{ChatMessage, ChatSession, Language, Mode, Role};

use crate::error::ChatError;
use crate::reply::ReplyGenerator;
use crate::suggestions::suggestions;
use crate::tone::wrap;

/// One inbound chat turn, already validated at the boundary.
#[derive(Debug, Clone, Default)]
pub struct ChatTurn {
    pub message: String,
    /// Continue this session. `None` or blank opens a new one.
    pub session_id: Option<String>,
    pub mode: Mode,
    pub language: Language,
    /// Title for a newly opened session. Ignored when continuing.
    pub title: Option<String>,
}

impl ChatTurn {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn in_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// Composed result of a chat turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurnResult {
    pub session_id: String,
    pub reply: String,
    pub suggestions: Vec<String>,
    pub mode: Mode,
    /// ISO-8601 UTC timestamp of the turn.
    pub created_at: String,
}

/// Coordinates session continuity, reply generation and persistence.
pub struct ChatOrchestrator {
    store: Arc<dyn DocumentStore>,
    generator: ReplyGenerator,
    config: ChatConfig,
}

impl ChatOrchestrator {
    pub fn new(store: Arc<dyn DocumentStore>, config: ChatConfig) -> Self {
        Self {
            store,
            generator: ReplyGenerator::new(),
            config,
        }
    }

    /// Handle one chat turn.
    ///
    /// Writes, in order: the session (only when none was given), the user
    /// message, the assistant message. A failed write aborts the turn and
    /// leaves earlier writes in place.
    pub fn handle_message(&self, turn: ChatTurn) -> Result<ChatTurnResult, ChatError> {
        if turn.message.chars().count() > self.config.max_message_chars {
            return Err(ChatError::MessageTooLong(self.config.max_message_chars));
        }

        let now = Utc::now();
        let mode = turn.mode;

        let session_id = match turn
            .session_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(id) => id.to_string(),
            None => {
                let session = match turn.title.as_deref().map(str::trim) {
                    Some(title) if !title.is_empty() => ChatSession::new(title, mode),
                    _ => ChatSession::titled_at(now, mode),
                };
                let id = insert_record(self.store.as_ref(), &session)?;
                debug!(session_id = %id, title = %session.title, mode = %mode, "Chat session created");
                id
            }
        };

        let user_msg = ChatMessage::new(&session_id, Role::User, &turn.message, Some(mode));
        insert_record(self.store.as_ref(), &user_msg)?;

        let core = self.generator.generate(&turn.message, mode, turn.language);
        let reply = wrap(&core, mode);

        let assistant_msg = ChatMessage::new(&session_id, Role::Assistant, &reply, Some(mode));
        if let Err(e) = insert_record(self.store.as_ref(), &assistant_msg) {
            warn!(
                session_id = %session_id,
                error = %e,
                "Assistant reply not persisted; user message left unanswered"
            );
            return Err(e.into());
        }

        info!(session_id = %session_id, mode = %mode, language = %turn.language, "Chat turn handled");

        Ok(ChatTurnResult {
            session_id,
            reply,
            suggestions: suggestions(mode),
            mode,
            created_at: now.to_rfc3339_opts(SecondsFormat::Micros, true),
        })
    }

    /// List stored sessions in insertion order.
    pub fn list_sessions(&self, limit: usize) -> Result<Vec<Stored<ChatSession>>, ChatError> {
        Ok(query_records(self.store.as_ref(), &Filter::new(), limit)?)
    }

    /// List messages of one session in insertion order.
    ///
    /// Unknown sessions yield an empty list.
    pub fn list_messages(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<Stored<ChatMessage>>, ChatError> {
        let mut filter = Filter::new();
        filter.insert(
            "session_id".to_string(),
            Value::String(session_id.to_string()),
        );
        Ok(query_records(self.store.as_ref(), &filter, limit)?)
    }
}
