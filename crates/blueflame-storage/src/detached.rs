//! Placeholder store used when no database is reachable.

use blueflame_core::error::{BlueflameError, Result};
use blueflame_core::store::{Document, DocumentStore, Filter};

/// A store with no backing database. Every operation fails with
/// [`BlueflameError::StoreUnavailable`].
#[derive(Debug, Clone)]
pub struct DetachedStore {
    reason: String,
}

impl DetachedStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl DocumentStore for DetachedStore {
    fn insert(&self, _collection: &str, _document: Document) -> Result<String> {
        Err(BlueflameError::StoreUnavailable(self.reason.clone()))
    }

    fn query(&self, _collection: &str, _filter: &Filter, _limit: usize) -> Result<Vec<Document>> {
        Err(BlueflameError::StoreUnavailable(self.reason.clone()))
    }

    fn collections(&self) -> Result<Vec<String>> {
        Err(BlueflameError::StoreUnavailable(self.reason.clone()))
    }
}
