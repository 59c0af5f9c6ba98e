//! Session state handler.

use axum::{Json, extract::State};
use serde::Serialize;

use entail::{Item, Label, SessionView};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Everything the UI needs to draw the labeling screen.
#[derive(Serialize)]
pub struct SessionResponse {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionInfo>,
}

#[derive(Serialize)]
pub struct SessionInfo {
    pub file_name: String,
    pub total: usize,
    pub cursor: usize,
    pub position: usize,
    pub item: Item,
    pub label: Option<Label>,
    pub labeled_count: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub progress: f64,
}

impl From<SessionView<'_>> for SessionInfo {
    fn from(view: SessionView<'_>) -> Self {
        Self {
            file_name: view.file_name.to_string(),
            total: view.total,
            cursor: view.cursor,
            position: view.position,
            item: view.item.clone(),
            label: view.label,
            labeled_count: view.labeled_count,
            can_go_previous: view.can_go_previous,
            can_go_next: view.can_go_next,
            progress: view.progress,
        }
    }
}

impl SessionResponse {
    /// Snapshot the manager's current view.
    pub fn from_view(view: Option<SessionView<'_>>) -> Self {
        Self {
            active: view.is_some(),
            session: view.map(SessionInfo::from),
        }
    }
}

/// GET /api/session - Get the current labeling state.
pub async fn get_session(State(state): State<AppState>) -> Result<Json<SessionResponse>, ApiError> {
    let manager = state.manager.read().await;
    Ok(Json(SessionResponse::from_view(manager.view())))
}
