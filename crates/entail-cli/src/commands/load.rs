//! Load command - start a new session from a dataset file.

use std::path::PathBuf;

use colored::Colorize;
use entail::SourceFile;

use super::{open_manager, print_current};

pub fn run(file: PathBuf, store: PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = SourceFile::read(&file)?;

    println!(
        "{} {} ({})",
        "File:".cyan().bold(),
        source.name.white(),
        source.formatted_size()
    );

    let mut manager = open_manager(store);
    if verbose && manager.is_active() {
        println!("{} discarding the previous session", "Note:".yellow());
    }

    let session = manager.load_source(&source)?;

    println!(
        "{} Successfully loaded {} items for labeling.",
        "✓".green().bold(),
        session.len().to_string().white().bold()
    );
    if session.labeled_count() > 0 {
        println!(
            "  {} items already carry a label",
            session.labeled_count().to_string().green()
        );
    }
    println!();
    print_current(session);

    Ok(())
}
