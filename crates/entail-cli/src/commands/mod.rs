//! CLI command implementations.

pub mod export;
pub mod key;
pub mod label;
pub mod load;
pub mod nav;
pub mod replace;
pub mod serve;
pub mod status;

use std::path::PathBuf;

use colored::Colorize;
use entail::{FileStore, Session, SessionManager};

/// Resolve the session store directory.
///
/// Uses the explicit flag if given, then `<local data dir>/entail`, then
/// `.entail` in the working directory.
pub fn store_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }

    if let Some(mut path) = dirs::data_local_dir() {
        path.push("entail");
        return path;
    }

    PathBuf::from(".entail")
}

/// Open the manager and pick up the saved session, if any.
pub fn open_manager(store: PathBuf) -> SessionManager<FileStore> {
    SessionManager::restored(FileStore::new(store))
}

/// Error for commands that need a loaded dataset.
pub fn no_session_error() -> Box<dyn std::error::Error> {
    "No dataset loaded. Run 'entail load <FILE>' first.".into()
}

/// Print the item under the cursor.
pub fn print_current(session: &Session) {
    let item = session.current_item();
    let label = session
        .current_label()
        .map(|l| l.as_str().green().bold().to_string())
        .unwrap_or_else(|| "unlabeled".dimmed().to_string());

    println!(
        "{} {}/{}  [{}]",
        "Item".cyan().bold(),
        (session.cursor() + 1).to_string().white().bold(),
        session.len(),
        label
    );
    println!("  {} {}", "Premise:   ".yellow(), item.premise);
    println!("  {} {}", "Hypothesis:".yellow(), item.hypothesis);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_dir_prefers_flag() {
        assert_eq!(
            store_dir(Some(PathBuf::from("custom"))),
            PathBuf::from("custom")
        );
    }

    #[test]
    fn test_open_manager_without_snapshot() {
        let dir = tempfile::TempDir::new().unwrap();
        let manager = open_manager(dir.path().join("state"));
        assert!(!manager.is_active());
    }
}
