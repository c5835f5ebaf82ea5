//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use blueflame_chat::ChatOrchestrator;
use blueflame_core::config::BlueflameConfig;
use blueflame_core::store::DocumentStore;
use blueflame_image::ImagePlaceholderGenerator;

/// Shared application state. Every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<BlueflameConfig>,
    /// Document store, also handed to the chat and image services.
    pub store: Arc<dyn DocumentStore>,
    /// Conversation orchestrator.
    pub chat: Arc<ChatOrchestrator>,
    /// Placeholder image generator.
    pub images: Arc<ImagePlaceholderGenerator>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Wire the services around a single injected store.
    pub fn new(config: BlueflameConfig, store: Arc<dyn DocumentStore>) -> Self {
        let chat = ChatOrchestrator::new(Arc::clone(&store), config.chat.clone());
        let images = ImagePlaceholderGenerator::new(Arc::clone(&store));
        Self {
            config: Arc::new(config),
            store,
            chat: Arc::new(chat),
            images: Arc::new(images),
            start_time: Instant::now(),
        }
    }
}
