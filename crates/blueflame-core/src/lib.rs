pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use config::BlueflameConfig;
pub use error::{BlueflameError, Result};
pub use store::{insert_record, query_records, Document, DocumentStore, Filter, Record, Stored};
pub use types::*;
