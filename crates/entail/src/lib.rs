//! Entail: labeling sessions for text-entailment datasets.
//!
//! A dataset is a JSON array of premise/hypothesis pairs. Each pair gets one
//! of three labels (contradiction, neutral, entailment) and the labeled array
//! is exported back to JSON.
//!
//! # Core Principles
//!
//! - **Lossless**: Fields the tool does not know about are exported unchanged
//! - **Resumable**: Every change is snapshotted to a key-value store
//! - **Explicit state**: One owned [`SessionManager`], no global instance
//!
//! # Example
//!
//! ```no_run
//! use entail::{FileStore, Label, SessionManager, SourceFile};
//!
//! let mut manager = SessionManager::restored(FileStore::new(".entail"));
//! let source = SourceFile::read("snli_dev.json").unwrap();
//! manager.load_source(&source).unwrap();
//!
//! manager.select_label(Label::Neutral);
//! println!("{}", manager.export_json().unwrap());
//! ```

pub mod dataset;
pub mod error;
pub mod label;
pub mod session;
pub mod source;
pub mod store;

pub use dataset::{Item, parse_dataset};
pub use error::{LabelError, Result, SchemaError};
pub use label::{Direction, Label, Shortcut};
pub use session::{STORAGE_KEY, Session, SessionManager, SessionView};
pub use source::{SourceFile, export_file_name, format_file_size, is_json_path, write_export};
pub use store::{FileStore, MemoryStore, SnapshotStore};
