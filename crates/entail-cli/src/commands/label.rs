//! Label command - label the current item.

use std::path::PathBuf;

use colored::Colorize;
use entail::Label;

use super::{no_session_error, open_manager, print_current};

pub fn run(label: String, store: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let label: Label = label.parse()?;

    let mut manager = open_manager(store);
    let index = manager.session().ok_or_else(no_session_error)?.cursor();

    manager.select_label(label);

    let session = manager.session().ok_or_else(no_session_error)?;
    println!(
        "Item {} labeled {}",
        (index + 1).to_string().white().bold(),
        label.as_str().green().bold()
    );
    println!(
        "Labeled: {}/{}",
        session.labeled_count().to_string().green(),
        session.len()
    );
    println!();
    print_current(session);

    Ok(())
}
