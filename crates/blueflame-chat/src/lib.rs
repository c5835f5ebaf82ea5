//! Conversational core for BlueFlame.
//!
//! Generates deterministic local replies, decorates them by tone, ranks
//! follow-up suggestions, and persists each turn through the document store.

pub mod error;
pub mod orchestrator;
pub mod reply;
pub mod suggestions;
pub mod tone;

pub use error::ChatError;
pub use orchestrator::{ChatOrchestrator, ChatTurn, ChatTurnResult};
pub use reply::ReplyGenerator;
pub use suggestions::{suggestions, suggestions_for_label};
pub use tone::wrap;
