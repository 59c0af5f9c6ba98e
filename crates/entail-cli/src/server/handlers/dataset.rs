//! Dataset upload and export handlers.

use std::path::Path;

use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use entail::{Item, LabelError, format_file_size, is_json_path};

use super::session::SessionResponse;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body carrying a file the browser has read as text.
#[derive(Deserialize)]
pub struct UploadRequest {
    pub file_name: String,
    pub content: String,
}

impl UploadRequest {
    fn check_type(&self) -> Result<(), ApiError> {
        if is_json_path(Path::new(&self.file_name)) {
            Ok(())
        } else {
            Err(LabelError::UnsupportedFormat(self.file_name.clone()).into())
        }
    }
}

/// Response for load and replace: the new state plus the uploaded size.
#[derive(Serialize)]
pub struct UploadResponse {
    /// Human-readable size of the uploaded file, e.g. `1.5 KB`.
    pub file_size: String,
    #[serde(flatten)]
    pub state: SessionResponse,
}

/// Response for the export endpoint.
#[derive(Serialize)]
pub struct ExportResponse {
    /// Suggested download name.
    pub file_name: String,
    pub labeled_count: usize,
    pub items: Vec<Item>,
}

/// POST /api/load - Start a new session from an uploaded file.
pub async fn load_dataset(
    State(state): State<AppState>,
    Json(req): Json<UploadRequest>,
) -> Result<Json<UploadResponse>, ApiError> {
    req.check_type()?;
    let file_size = format_file_size(req.content.len() as u64);
    let mut manager = state.manager.write().await;
    manager.load(&req.content, req.file_name)?;
    Ok(Json(UploadResponse {
        file_size,
        state: SessionResponse::from_view(manager.view()),
    }))
}

/// POST /api/replace - Replace the dataset of the current session.
pub async fn replace_dataset(
    State(state): State<AppState>,
    Json(req): Json<UploadRequest>,
) -> Result<Json<UploadResponse>, ApiError> {
    req.check_type()?;
    let file_size = format_file_size(req.content.len() as u64);
    let mut manager = state.manager.write().await;
    manager.replace(&req.content, req.file_name)?;
    Ok(Json(UploadResponse {
        file_size,
        state: SessionResponse::from_view(manager.view()),
    }))
}

/// GET /api/export - Labeled items plus a download name.
pub async fn export_dataset(
    State(state): State<AppState>,
) -> Result<Json<ExportResponse>, ApiError> {
    let manager = state.manager.read().await;
    let items = manager.export()?;
    let session = manager.session().ok_or(ApiError::NoSession)?;

    Ok(Json(ExportResponse {
        file_name: session.export_file_name(Utc::now()),
        labeled_count: session.labeled_count(),
        items,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use entail::{FileStore, SessionManager};

    fn app_state(dir: &tempfile::TempDir) -> AppState {
        AppState::new(SessionManager::new(FileStore::new(dir.path())))
    }

    fn upload(file_name: &str, content: String) -> Json<UploadRequest> {
        Json(UploadRequest {
            file_name: file_name.to_string(),
            content,
        })
    }

    #[tokio::test]
    async fn test_load_reports_formatted_size() {
        let dir = tempfile::TempDir::new().unwrap();
        let state = app_state(&dir);

        let item = r#"{"premise":"p","hypothesis":"h"}"#;
        let mut content = format!("[{}", item);
        while content.len() < 1536 - item.len() - 2 {
            content.push(',');
            content.push_str(item);
        }
        content.push_str(&" ".repeat(1535 - content.len()));
        content.push(']');
        assert_eq!(content.len(), 1536);

        let Json(response) = load_dataset(State(state.clone()), upload("pairs.json", content))
            .await
            .unwrap();
        assert_eq!(response.file_size, "1.5 KB");
        assert!(response.state.active);

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["file_size"], "1.5 KB");
        assert_eq!(body["session"]["file_name"], "pairs.json");
    }

    #[tokio::test]
    async fn test_replace_rejects_non_json_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let state = app_state(&dir);

        let result = replace_dataset(
            State(state),
            upload("pairs.csv", r#"[{"premise":"p","hypothesis":"h"}]"#.to_string()),
        )
        .await;
        assert!(matches!(
            result,
            Err(ApiError::Label(LabelError::UnsupportedFormat(_)))
        ));
    }
}
