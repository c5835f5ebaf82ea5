//! BlueFlame storage crate - SQLite document store.
//!
//! Provides a WAL-mode SQLite database with migrations, the
//! `SqliteDocumentStore` implementation of the document store seam, and a
//! `DetachedStore` used when no database could be opened.

pub mod db;
pub mod detached;
pub mod documents;
pub mod migrations;

pub use db::Database;
pub use detached::DetachedStore;
pub use documents::SqliteDocumentStore;
