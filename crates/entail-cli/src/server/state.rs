//! Application state for the web server.

use std::sync::Arc;
use tokio::sync::RwLock;

use entail::{FileStore, SessionManager};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The one labeling session, shared by all handlers.
    pub manager: Arc<RwLock<SessionManager<FileStore>>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(manager: SessionManager<FileStore>) -> Self {
        Self {
            manager: Arc::new(RwLock::new(manager)),
        }
    }

    /// Write the current session snapshot.
    pub async fn save(&self) -> Result<(), entail::LabelError> {
        let mut manager = self.manager.write().await;
        manager.persist()
    }
}
