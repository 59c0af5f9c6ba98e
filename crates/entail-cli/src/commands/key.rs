//! Key command - forward a keyboard shortcut to the session.

use std::path::PathBuf;

use colored::Colorize;

use super::{no_session_error, open_manager, print_current};

pub fn run(key: String, store: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = open_manager(store);
    if !manager.is_active() {
        return Err(no_session_error());
    }

    if !manager.handle_key(&key) {
        println!(
            "{} '{}' is not a shortcut. Use 1, 2, 3, ArrowLeft or ArrowRight.",
            "Warning:".yellow(),
            key
        );
    }

    let session = manager.session().ok_or_else(no_session_error)?;
    print_current(session);

    Ok(())
}
