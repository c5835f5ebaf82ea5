//! BlueFlame API crate - axum HTTP server and route handlers.
//!
//! Exposes chat, session/message listing, placeholder images, mode listing
//! and store diagnostics over JSON.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
