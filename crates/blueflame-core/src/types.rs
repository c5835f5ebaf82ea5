//! Domain types shared across the BlueFlame crates.
//!
//! The enums here are closed sets. Anything outside them is rejected at the
//! HTTP boundary, so the chat core only ever sees valid values.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BlueflameError;
use crate::store::Record;

// =============================================================================
// Mode
// =============================================================================

/// Reply style and decoration category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Qa,
    Writing,
    Translation,
    Summary,
    Student,
    Professional,
    Fun,
}

impl Mode {
    /// All modes in canonical order.
    pub const ALL: [Mode; 7] = [
        Mode::Qa,
        Mode::Writing,
        Mode::Translation,
        Mode::Summary,
        Mode::Student,
        Mode::Professional,
        Mode::Fun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Qa => "qa",
            Mode::Writing => "writing",
            Mode::Translation => "translation",
            Mode::Summary => "summary",
            Mode::Student => "student",
            Mode::Professional => "professional",
            Mode::Fun => "fun",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = BlueflameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| BlueflameError::Validation(format!("unknown mode '{}'", s)))
    }
}

// =============================================================================
// Language
// =============================================================================

/// Target language for translation replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ur,
    Hi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Ur, Language::Hi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ur => "ur",
            Language::Hi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = BlueflameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| BlueflameError::Validation(format!("unknown language '{}'", s)))
    }
}

// =============================================================================
// Role
// =============================================================================

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Stored records
// =============================================================================

/// Conversation thread metadata. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Short human-readable title.
    pub title: String,
    /// Mode the session was opened with.
    #[serde(default)]
    pub mode: Mode,
}

impl ChatSession {
    pub fn new(title: impl Into<String>, mode: Mode) -> Self {
        Self {
            title: title.into(),
            mode,
        }
    }

    /// Session titled after its creation time, e.g. `Chat – 14:05`.
    pub fn titled_at(at: DateTime<Utc>, mode: Mode) -> Self {
        Self::new(format!("Chat – {}", at.format("%H:%M")), mode)
    }
}

impl Record for ChatSession {
    const COLLECTION: &'static str = "chatsession";
}

/// A single message in a session. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Owning session id. Not checked against the session collection.
    pub session_id: String,
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub mode: Option<Mode>,
    /// Free-form metadata, unused by the reply pipeline.
    #[serde(default)]
    pub meta: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ChatMessage {
    pub fn new(
        session_id: impl Into<String>,
        role: Role,
        content: impl Into<String>,
        mode: Option<Mode>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            role,
            content: content.into(),
            mode,
            meta: None,
        }
    }
}

impl Record for ChatMessage {
    const COLLECTION: &'static str = "chatmessage";
}

/// Audit entry for an image placeholder request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRequestRecord {
    pub prompt: String,
    #[serde(default)]
    pub style: Option<String>,
}

impl Record for ImageRequestRecord {
    const COLLECTION: &'static str = "imagerequest";
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_mode_round_trips_through_str() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_mode_rejects_unknown() {
        let err = "poetry".parse::<Mode>().unwrap_err();
        assert!(matches!(err, BlueflameError::Validation(_)));
        assert!("QA".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&Mode::Professional).unwrap(),
            "\"professional\""
        );
        let mode: Mode = serde_json::from_str("\"fun\"").unwrap();
        assert_eq!(mode, Mode::Fun);
        assert!(serde_json::from_str::<Mode>("\"unknown\"").is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Mode::default(), Mode::Qa);
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("ur".parse::<Language>().unwrap(), Language::Ur);
        assert_eq!("hi".parse::<Language>().unwrap(), Language::Hi);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        assert!(serde_json::from_str::<Role>("\"bot\"").is_err());
    }

    #[test]
    fn test_session_title_from_time() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 59).unwrap();
        let session = ChatSession::titled_at(at, Mode::Summary);
        assert_eq!(session.title, "Chat – 14:05");
        assert_eq!(session.mode, Mode::Summary);
    }

    #[test]
    fn test_collection_names() {
        assert_eq!(ChatSession::COLLECTION, "chatsession");
        assert_eq!(ChatMessage::COLLECTION, "chatmessage");
        assert_eq!(ImageRequestRecord::COLLECTION, "imagerequest");
    }

    #[test]
    fn test_message_serializes_optional_fields_as_null() {
        let msg = ChatMessage::new("s1", Role::User, "hi", None);
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["role"], "user");
        assert!(value["mode"].is_null());
        assert!(value["meta"].is_null());
    }
}
