//! Replace command - swap the dataset of the current session.

use std::path::PathBuf;

use colored::Colorize;
use entail::SourceFile;

use super::{open_manager, print_current};

pub fn run(
    file: PathBuf,
    name: Option<String>,
    store: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut source = SourceFile::read(&file)?;
    if let Some(name) = name {
        source.name = name;
    }

    let mut manager = open_manager(store);
    if verbose {
        if let Some(previous) = manager.session() {
            println!(
                "Replacing {} ({} items, {} labeled)",
                previous.file_name().white(),
                previous.len(),
                previous.labeled_count()
            );
        }
    }

    let session = manager.replace_source(&source)?;

    println!(
        "{} Successfully replaced dataset with {} new items.",
        "✓".green().bold(),
        session.len().to_string().white().bold()
    );
    println!("  Current file: {}", session.file_name().cyan());
    println!();
    print_current(session);

    Ok(())
}
