//! Document store seam.
//!
//! The persistence engine is an opaque collaborator offering insert and
//! query over named collections of JSON documents. Typed records cross this
//! boundary through [`insert_record`] and [`query_records`].

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BlueflameError, Result};

/// A stored document: a JSON object.
pub type Document = serde_json::Map<String, Value>;

/// Equality filter over top-level document fields.
pub type Filter = serde_json::Map<String, Value>;

/// Insert/query access to named document collections.
///
/// Implementations must be safe to share across request handlers.
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return its store-assigned id.
    fn insert(&self, collection: &str, document: Document) -> Result<String>;

    /// Return up to `limit` documents matching every field in `filter`,
    /// in insertion order. Each document carries its id under `_id` as a
    /// plain string.
    fn query(&self, collection: &str, filter: &Filter, limit: usize) -> Result<Vec<Document>>;

    /// Names of collections that hold at least one document.
    fn collections(&self) -> Result<Vec<String>>;
}

/// A typed record persisted in its own collection.
pub trait Record: Serialize + DeserializeOwned {
    /// Collection name: the entity type name, lower-cased.
    const COLLECTION: &'static str;
}

/// A record as returned by the store, with its id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<R> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub record: R,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Serialize `record` and insert it into its collection.
pub fn insert_record<R: Record>(store: &dyn DocumentStore, record: &R) -> Result<String> {
    match serde_json::to_value(record)? {
        Value::Object(document) => store.insert(R::COLLECTION, document),
        other => Err(BlueflameError::Serialization(format!(
            "{} record is not a JSON object: {}",
            R::COLLECTION,
            other
        ))),
    }
}

/// Query a record collection and decode each document.
pub fn query_records<R: Record>(
    store: &dyn DocumentStore,
    filter: &Filter,
    limit: usize,
) -> Result<Vec<Stored<R>>> {
    store
        .query(R::COLLECTION, filter, limit)?
        .into_iter()
        .map(|doc| serde_json::from_value(Value::Object(doc)).map_err(BlueflameError::from))
        .collect()
}
