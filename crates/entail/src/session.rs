//! Labeling session state and its manager.
//!
//! A [`Session`] is the working set of one labeling pass: the loaded items,
//! the labels assigned so far, the cursor and the source file name. The
//! [`SessionManager`] owns the session together with a [`SnapshotStore`] and
//! writes a snapshot after every change, so a later process (or a page
//! reload in the web UI) can pick up where the user left off.
//!
//! # Example
//!
//! ```
//! use entail::{Label, MemoryStore, SessionManager};
//!
//! let mut manager = SessionManager::new(MemoryStore::new());
//! manager
//!     .load(r#"[{"premise":"P1","hypothesis":"H1"},{"premise":"P2","hypothesis":"H2"}]"#, "pairs.json")
//!     .unwrap();
//!
//! manager.select_label(Label::Entailment);
//! assert_eq!(manager.session().unwrap().cursor(), 1);
//!
//! let exported = manager.export().unwrap();
//! assert_eq!(exported[0].recognized_label(), Some(Label::Entailment));
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::dataset::{Item, parse_dataset};
use crate::error::{LabelError, Result, SchemaError};
use crate::label::{Direction, Label, Shortcut};
use crate::source::{SourceFile, export_file_name};
use crate::store::SnapshotStore;

/// Key under which the session snapshot is stored.
pub const STORAGE_KEY: &str = "labelingToolState";

/// The in-memory working set of a labeling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    items: Vec<Item>,
    labels: BTreeMap<usize, Label>,
    cursor: usize,
    file_name: String,
}

impl Session {
    /// Build a session from validated items. Returns `None` for an empty dataset.
    ///
    /// The label map is seeded from every item carrying a recognized label.
    pub fn new(items: Vec<Item>, file_name: impl Into<String>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let labels = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| item.recognized_label().map(|label| (index, label)))
            .collect();

        Some(Self {
            items,
            labels,
            cursor: 0,
            file_name: file_name.into(),
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn labels(&self) -> &BTreeMap<usize, Label> {
        &self.labels
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Number of items in the dataset.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: sessions never hold an empty dataset.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item under the cursor.
    pub fn current_item(&self) -> &Item {
        &self.items[self.cursor]
    }

    /// The label assigned to the item under the cursor.
    pub fn current_label(&self) -> Option<Label> {
        self.label_at(self.cursor)
    }

    pub fn label_at(&self, index: usize) -> Option<Label> {
        self.labels.get(&index).copied()
    }

    /// Number of items with a label.
    pub fn labeled_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.items.len()
    }

    /// Items in original order with assigned labels written into them.
    pub fn export(&self) -> Vec<Item> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let mut out = item.clone();
                if let Some(label) = self.label_at(index) {
                    out.set_label(label);
                }
                out
            })
            .collect()
    }

    /// Download name for an export made at `now`.
    pub fn export_file_name(&self, now: DateTime<Utc>) -> String {
        export_file_name(&self.file_name, now)
    }

    fn assign(&mut self, label: Label) {
        self.labels.insert(self.cursor, label);
        if !self.is_last() {
            self.cursor += 1;
        }
    }

    fn step(&mut self, direction: Direction) -> bool {
        let Some(target) = self.cursor.checked_add_signed(direction.offset()) else {
            return false;
        };
        if target >= self.items.len() {
            return false;
        }
        self.cursor = target;
        true
    }

    fn from_snapshot(snapshot: Snapshot) -> Option<Self> {
        let items = snapshot.data.filter(|data| !data.is_empty())?;
        let last = items.len() - 1;

        let mut labels = snapshot.labels.unwrap_or_default();
        labels.retain(|index, _| *index <= last);

        let mut cursor = snapshot.current_index.unwrap_or(0);
        if cursor > last {
            debug!(cursor, last, "Clamping restored cursor");
            cursor = last;
        }

        Some(Self {
            items,
            labels,
            cursor,
            file_name: snapshot.file_name.unwrap_or_default(),
        })
    }
}

/// Stored form of a session.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    #[serde(default)]
    data: Option<Vec<Item>>,
    #[serde(default)]
    labels: Option<BTreeMap<usize, Label>>,
    #[serde(default)]
    current_index: Option<usize>,
    #[serde(default)]
    file_name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a> {
    data: &'a [Item],
    labels: &'a BTreeMap<usize, Label>,
    current_index: usize,
    file_name: &'a str,
}

impl<'a> From<&'a Session> for SnapshotRef<'a> {
    fn from(session: &'a Session) -> Self {
        Self {
            data: &session.items,
            labels: &session.labels,
            current_index: session.cursor,
            file_name: &session.file_name,
        }
    }
}

fn write_snapshot<S: SnapshotStore>(store: &mut S, session: &Session) -> Result<()> {
    let blob = serde_json::to_string(&SnapshotRef::from(session))?;
    store.set(STORAGE_KEY, &blob)?;
    debug!(bytes = blob.len(), cursor = session.cursor, "Persisted session");
    Ok(())
}

/// What the presentation layer needs to draw the current state.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView<'a> {
    pub file_name: &'a str,
    pub total: usize,
    /// 0-based cursor.
    pub cursor: usize,
    /// 1-based position for display.
    pub position: usize,
    pub item: &'a Item,
    pub label: Option<Label>,
    pub labeled_count: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// Fraction of the dataset up to and including the cursor.
    pub progress: f64,
}

impl<'a> From<&'a Session> for SessionView<'a> {
    fn from(session: &'a Session) -> Self {
        Self {
            file_name: session.file_name(),
            total: session.len(),
            cursor: session.cursor(),
            position: session.cursor() + 1,
            item: session.current_item(),
            label: session.current_label(),
            labeled_count: session.labeled_count(),
            can_go_previous: !session.is_first(),
            can_go_next: !session.is_last(),
            progress: (session.cursor() + 1) as f64 / session.len() as f64,
        }
    }
}

/// Owns the session and keeps its snapshot in a store up to date.
#[derive(Debug)]
pub struct SessionManager<S: SnapshotStore> {
    store: S,
    session: Option<Session>,
}

impl<S: SnapshotStore> SessionManager<S> {
    /// Create a manager with no session loaded.
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: None,
        }
    }

    /// Create a manager and restore any saved session from the store.
    pub fn restored(store: S) -> Self {
        let mut manager = Self::new(store);
        manager.restore();
        manager
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether a dataset is loaded.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Render snapshot of the current state.
    pub fn view(&self) -> Option<SessionView<'_>> {
        self.session.as_ref().map(SessionView::from)
    }

    /// Load a dataset from raw JSON text, discarding any previous session.
    ///
    /// On failure the previous session is left untouched.
    pub fn load(&mut self, raw: &str, file_name: impl Into<String>) -> Result<&Session> {
        let session = self.install(raw, file_name.into())?;
        info!(
            items = session.len(),
            labeled = session.labeled_count(),
            file = session.file_name(),
            "Loaded dataset"
        );
        Ok(session)
    }

    /// Replace the current dataset mid-session. Same rules as [`load`](Self::load).
    pub fn replace(&mut self, raw: &str, file_name: impl Into<String>) -> Result<&Session> {
        let session = self.install(raw, file_name.into())?;
        info!(
            items = session.len(),
            labeled = session.labeled_count(),
            file = session.file_name(),
            "Replaced dataset"
        );
        Ok(session)
    }

    /// Load a dataset read by the file adapter, using its file name.
    pub fn load_source(&mut self, source: &SourceFile) -> Result<&Session> {
        self.load(&source.content, source.name.clone())
    }

    /// Replace the dataset with one read by the file adapter.
    pub fn replace_source(&mut self, source: &SourceFile) -> Result<&Session> {
        self.replace(&source.content, source.name.clone())
    }

    /// Label the item under the cursor, then advance unless it is the last one.
    ///
    /// No-op without a dataset.
    pub fn select_label(&mut self, label: Label) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let index = session.cursor;
        session.assign(label);
        debug!(index, %label, cursor = session.cursor, "Selected label");
        persist_or_warn(&mut self.store, session);
    }

    /// Move the cursor one step. Moves past either end are ignored.
    pub fn navigate(&mut self, direction: Direction) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.step(direction) {
            debug!(cursor = session.cursor, "Navigated");
            persist_or_warn(&mut self.store, session);
        }
    }

    /// Dispatch a keyboard key. Returns whether it triggered an action.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_active() {
            return false;
        }
        match Shortcut::from_key(key) {
            Some(Shortcut::Select(label)) => {
                self.select_label(label);
                true
            }
            Some(Shortcut::Navigate(direction)) => {
                self.navigate(direction);
                true
            }
            None => false,
        }
    }

    /// Items with their assigned labels, in original order.
    pub fn export(&self) -> Result<Vec<Item>> {
        let session = self.session.as_ref().ok_or(LabelError::EmptyExport)?;
        let items = session.export();
        info!(
            items = items.len(),
            labeled = session.labeled_count(),
            "Exported dataset"
        );
        Ok(items)
    }

    /// The export as 2-space indented JSON.
    pub fn export_json(&self) -> Result<String> {
        let items = self.export()?;
        Ok(serde_json::to_string_pretty(&items)?)
    }

    /// Write the current session to the store. No-op without a session.
    pub fn persist(&mut self) -> Result<()> {
        match self.session.as_ref() {
            Some(session) => write_snapshot(&mut self.store, session),
            None => Ok(()),
        }
    }

    /// Reload the session saved in the store.
    ///
    /// A snapshot that does not parse is deleted. A missing or empty dataset
    /// leaves the manager without a session.
    pub fn restore(&mut self) -> Option<&Session> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Could not read saved session");
                return None;
            }
        };

        let snapshot: Snapshot = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Discarding corrupt saved session");
                if let Err(e) = self.store.remove(STORAGE_KEY) {
                    warn!(error = %e, "Could not remove corrupt saved session");
                }
                return None;
            }
        };

        let session = Session::from_snapshot(snapshot)?;
        info!(
            items = session.len(),
            cursor = session.cursor,
            file = session.file_name(),
            "Restored saved session"
        );
        Some(&*self.session.insert(session))
    }

    fn install(&mut self, raw: &str, file_name: String) -> Result<&Session> {
        let items = parse_dataset(raw)?;
        let session = Session::new(items, file_name).ok_or(SchemaError::Empty)?;
        let session = self.session.insert(session);
        persist_or_warn(&mut self.store, session);
        Ok(session)
    }
}

fn persist_or_warn<S: SnapshotStore>(store: &mut S, session: &Session) {
    if let Err(e) = write_snapshot(store, session) {
        warn!(error = %e, "Failed to persist session");
    }
}
