//! Error types for the conversational core.

use blueflame_core::error::BlueflameError;

/// Errors from the chat engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("document store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("storage error: {0}")]
    StorageError(String),
}

impl From<BlueflameError> for ChatError {
    fn from(err: BlueflameError) -> Self {
        match err {
            BlueflameError::StoreUnavailable(reason) => ChatError::StoreUnavailable(reason),
            other => ChatError::StorageError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(
            ChatError::MessageTooLong(5000).to_string(),
            "message exceeds maximum length of 5000 characters"
        );
        assert_eq!(
            ChatError::StorageError("disk full".to_string()).to_string(),
            "storage error: disk full"
        );
        assert_eq!(
            ChatError::StoreUnavailable("offline".to_string()).to_string(),
            "document store unavailable: offline"
        );
    }

    #[test]
    fn test_unavailable_store_keeps_its_kind() {
        let err: ChatError = BlueflameError::StoreUnavailable("no db".to_string()).into();
        assert!(matches!(err, ChatError::StoreUnavailable(ref r) if r == "no db"));
    }

    #[test]
    fn test_other_errors_become_storage_errors() {
        let err: ChatError = BlueflameError::Storage("connection lost".to_string()).into();
        assert!(matches!(err, ChatError::StorageError(_)));
        assert!(err.to_string().contains("connection lost"));

        let err: ChatError = BlueflameError::Serialization("bad row".to_string()).into();
        assert!(matches!(err, ChatError::StorageError(_)));
    }
}
