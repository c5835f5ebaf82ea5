//! HTTP route handlers for all API endpoints.
//!
//! Each handler extracts parameters, calls the chat or image service, and
//! returns JSON responses. Request bodies that fail to decode are answered
//! with 422.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use blueflame_chat::{ChatTurn, ChatTurnResult};
use blueflame_core::error::BlueflameError;
use blueflame_core::store::Stored;
use blueflame_core::types::{ChatMessage, ChatSession, Language, Mode};

use crate::error::ApiError;
use crate::state::AppState;

/// Brand name reported by `GET /`.
pub const BRAND: &str = "Shahbaz AI";
/// Engine name reported by `GET /`.
pub const POWERED_BY: &str = "BlueFlame Intelligence";
/// Most collection names listed in a diagnostics response.
const MAX_LISTED_COLLECTIONS: usize = 10;

// =============================================================================
// Request / Response types
// =============================================================================

/// Response body for GET /.
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub brand: String,
    pub powered_by: String,
    pub status: String,
}

/// Response body for GET /health and GET /test.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "running" when the process answers.
    pub backend: String,
    /// "connected", "unavailable" or "error".
    pub database: String,
    /// "Connected" or "Not Connected".
    pub connection_status: String,
    /// Up to ten collection names present in the store.
    pub collections: Vec<String>,
    pub uptime_secs: u64,
    pub version: String,
}

/// Response body for GET /api/modes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModesResponse {
    pub modes: Vec<Mode>,
}

/// Request body for POST /api/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
    /// Defaults to `qa` when absent or null.
    #[serde(default)]
    pub mode: Option<Mode>,
    /// Defaults to `en` when absent or null.
    #[serde(default)]
    pub language: Option<Language>,
    /// Title for a newly created session.
    #[serde(default)]
    pub title: Option<String>,
}

/// Response body for POST /api/chat.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub reply: String,
    pub suggestions: Vec<String>,
    pub mode: Mode,
    pub created_at: String,
}

impl From<ChatTurnResult> for ChatResponse {
    fn from(result: ChatTurnResult) -> Self {
        Self {
            session_id: result.session_id,
            reply: result.reply,
            suggestions: result.suggestions,
            mode: result.mode,
            created_at: result.created_at,
        }
    }
}

/// Query parameters for the listing endpoints.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
}

/// Response body for GET /api/sessions.
#[derive(Debug, Serialize)]
pub struct SessionsResponse {
    pub sessions: Vec<Stored<ChatSession>>,
}

/// Response body for GET /api/messages/{session_id}.
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<Stored<ChatMessage>>,
}

/// Request body for POST /api/image.
#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
    #[serde(default)]
    pub style: Option<String>,
}

/// Response body for POST /api/image.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImageResponse {
    /// `data:image/svg+xml;base64,...`
    pub image: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET / - brand banner.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        brand: BRAND.to_string(),
        powered_by: POWERED_BY.to_string(),
        status: "ok".to_string(),
    })
}

/// GET /health, GET /test - backend and store diagnostics.
///
/// Always answers 200; store problems show up in the body.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (database, connection_status, collections) = match state.store.collections() {
        Ok(mut names) => {
            names.truncate(MAX_LISTED_COLLECTIONS);
            ("connected", "Connected", names)
        }
        Err(BlueflameError::StoreUnavailable(reason)) => {
            tracing::warn!(reason = %reason, "Health check: document store unavailable");
            ("unavailable", "Not Connected", Vec::new())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Health check: document store error");
            ("error", "Not Connected", Vec::new())
        }
    };

    Json(HealthResponse {
        backend: "running".to_string(),
        database: database.to_string(),
        connection_status: connection_status.to_string(),
        collections,
        uptime_secs: state.start_time.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/modes - the seven modes in canonical order.
pub async fn modes() -> Json<ModesResponse> {
    Json(ModesResponse {
        modes: Mode::ALL.to_vec(),
    })
}

/// POST /api/chat - handle one chat turn.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::UnprocessableEntity(e.body_text()))?;

    let turn = ChatTurn {
        message: req.message,
        session_id: req.session_id,
        mode: req.mode.unwrap_or_default(),
        language: req.language.unwrap_or_default(),
        title: req.title,
    };

    let result = state.chat.handle_message(turn)?;
    Ok(Json(result.into()))
}

/// GET /api/sessions - list sessions in insertion order.
pub async fn sessions(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<SessionsResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let storage = &state.config.storage;
    let limit = storage.clamp_limit(params.limit, storage.default_session_limit);

    let sessions = state.chat.list_sessions(limit)?;
    Ok(Json(SessionsResponse { sessions }))
}

/// GET /api/messages/{session_id} - list one session's messages.
pub async fn messages(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let storage = &state.config.storage;
    let limit = storage.clamp_limit(params.limit, storage.default_message_limit);

    let messages = state.chat.list_messages(&session_id, limit)?;
    Ok(Json(MessagesResponse { messages }))
}

/// POST /api/image - placeholder image for a prompt.
pub async fn image(
    State(state): State<AppState>,
    payload: Result<Json<ImageRequest>, JsonRejection>,
) -> Result<Json<ImageResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::UnprocessableEntity(e.body_text()))?;
    let image = state.images.make_image(&req.prompt, req.style.as_deref());
    Ok(Json(ImageResponse { image }))
}
