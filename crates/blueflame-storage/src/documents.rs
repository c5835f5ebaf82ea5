//! SQLite-backed document store.
//!
//! Every collection lives in the single `documents` table; bodies are JSON
//! objects and filters compile to `json_extract` equality predicates.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use rusqlite::types::Value as SqlValue;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use blueflame_core::error::{BlueflameError, Result};
use blueflame_core::store::{Document, DocumentStore, Filter};

/// Document store over a shared [`Database`](crate::Database).
pub struct SqliteDocumentStore {
    db: Arc<crate::Database>,
}

impl SqliteDocumentStore {
    pub fn new(db: Arc<crate::Database>) -> Self {
        Self { db }
    }
}

impl DocumentStore for SqliteDocumentStore {
    fn insert(&self, collection: &str, mut document: Document) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let stamp = Value::String(now.to_rfc3339_opts(SecondsFormat::Micros, true));

        document.remove("_id");
        document.insert("created_at".to_string(), stamp.clone());
        document.insert("updated_at".to_string(), stamp);
        let body = serde_json::to_string(&document)?;

        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO documents (id, collection, body, created_at) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![id, collection, body, now.timestamp()],
            )
            .map_err(|e| BlueflameError::Storage(format!("Failed to insert document: {}", e)))?;
            Ok(())
        })?;

        debug!(collection, id = %id, "Document inserted");
        Ok(id)
    }

    fn query(&self, collection: &str, filter: &Filter, limit: usize) -> Result<Vec<Document>> {
        let (predicates, mut params) = compile_filter(filter)?;

        let mut sql = String::from("SELECT id, body FROM documents WHERE collection = ?");
        for predicate in &predicates {
            sql.push_str(" AND ");
            sql.push_str(predicate);
        }
        sql.push_str(" ORDER BY seq ASC LIMIT ?");

        params.insert(0, SqlValue::Text(collection.to_string()));
        params.push(SqlValue::Integer(i64::try_from(limit).unwrap_or(i64::MAX)));

        let rows = self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(&sql)
                .map_err(|e| BlueflameError::Storage(e.to_string()))?;
            let rows = stmt
                .query_map(rusqlite::params_from_iter(params.iter()), |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
                })
                .map_err(|e| BlueflameError::Storage(e.to_string()))?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row.map_err(|e| BlueflameError::Storage(e.to_string()))?);
            }
            Ok(out)
        })?;

        rows.into_iter()
            .map(|(id, body)| {
                let mut document: Document = serde_json::from_str(&body)?;
                document.insert("_id".to_string(), Value::String(id));
                Ok(document)
            })
            .collect()
    }

    fn collections(&self) -> Result<Vec<String>> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare("SELECT DISTINCT collection FROM documents ORDER BY collection")
                .map_err(|e| BlueflameError::Storage(e.to_string()))?;
            let names = stmt
                .query_map([], |row| row.get::<_, String>(0))
                .map_err(|e| BlueflameError::Storage(e.to_string()))?
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| BlueflameError::Storage(e.to_string()))?;
            Ok(names)
        })
    }
}

/// Translate an equality filter into SQL predicates and bound parameters.
///
/// `_id` matches the store-assigned id; other keys match top-level body
/// fields. `null` matches a null or missing field.
fn compile_filter(filter: &Filter) -> Result<(Vec<String>, Vec<SqlValue>)> {
    let mut predicates = Vec::with_capacity(filter.len());
    let mut params = Vec::with_capacity(filter.len() * 2);

    for (key, value) in filter {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(BlueflameError::Validation(format!(
                "invalid filter field '{}'",
                key
            )));
        }

        if key == "_id" {
            let Value::String(id) = value else {
                return Err(BlueflameError::Validation(
                    "'_id' filter must be a string".to_string(),
                ));
            };
            predicates.push("id = ?".to_string());
            params.push(SqlValue::Text(id.clone()));
            continue;
        }

        let path = SqlValue::Text(format!("$.{}", key));
        let bound = match value {
            Value::Null => {
                predicates.push("json_extract(body, ?) IS NULL".to_string());
                params.push(path);
                continue;
            }
            Value::String(s) => SqlValue::Text(s.clone()),
            Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => SqlValue::Integer(i),
                None => SqlValue::Real(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::Array(_) | Value::Object(_) => {
                return Err(BlueflameError::Validation(format!(
                    "unsupported filter value for '{}'",
                    key
                )));
            }
        };
        predicates.push("json_extract(body, ?) = ?".to_string());
        params.push(path);
        params.push(bound);
    }

    Ok((predicates, params))
}
