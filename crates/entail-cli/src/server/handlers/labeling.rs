//! Label, navigation and keyboard handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use entail::{Direction, Label};

use super::session::SessionResponse;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for labeling the current item.
#[derive(Deserialize)]
pub struct LabelRequest {
    pub label: String,
}

/// Request body for navigation.
#[derive(Deserialize)]
pub struct NavigateRequest {
    /// -1 or 1.
    pub direction: i64,
}

/// Response after a keyboard shortcut.
#[derive(Serialize)]
pub struct KeyResponse {
    pub handled: bool,
    #[serde(flatten)]
    pub state: SessionResponse,
}

/// POST /api/label
pub async fn select_label(
    State(state): State<AppState>,
    Json(req): Json<LabelRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let label = Label::from_wire(&req.label)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown label: {}", req.label)))?;

    let mut manager = state.manager.write().await;
    if !manager.is_active() {
        return Err(ApiError::NoSession);
    }

    manager.select_label(label);
    Ok(Json(SessionResponse::from_view(manager.view())))
}

/// POST /api/navigate
pub async fn navigate(
    State(state): State<AppState>,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let direction = Direction::try_from(req.direction)?;

    let mut manager = state.manager.write().await;
    if !manager.is_active() {
        return Err(ApiError::NoSession);
    }

    manager.navigate(direction);
    Ok(Json(SessionResponse::from_view(manager.view())))
}

/// POST /api/keys/:key
pub async fn press_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<KeyResponse>, ApiError> {
    let mut manager = state.manager.write().await;
    let handled = manager.handle_key(&key);

    Ok(Json(KeyResponse {
        handled,
        state: SessionResponse::from_view(manager.view()),
    }))
}
