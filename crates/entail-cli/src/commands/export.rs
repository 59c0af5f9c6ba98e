//! Export command - write the labeled dataset to disk.

use std::path::PathBuf;

use chrono::Utc;
use colored::Colorize;
use entail::{LabelError, write_export};

use super::open_manager;

pub fn run(output: PathBuf, store: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let manager = open_manager(store);
    let session = manager.session().ok_or(LabelError::EmptyExport)?;

    let text = manager.export_json()?;
    let file_name = session.export_file_name(Utc::now());
    let path = write_export(&output, &file_name, &text)?;

    println!(
        "{} Successfully exported {} items with {} labels.",
        "✓".green().bold(),
        session.len().to_string().white().bold(),
        session.labeled_count().to_string().green().bold()
    );
    println!("  Saved to {}", path.display().to_string().cyan());

    Ok(())
}
