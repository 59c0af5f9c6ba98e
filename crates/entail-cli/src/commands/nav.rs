//! Nav command - move between items.

use std::path::PathBuf;

use colored::Colorize;
use entail::Direction;

use super::{no_session_error, open_manager, print_current};

pub fn run(direction: Direction, store: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = open_manager(store);
    let before = manager.session().ok_or_else(no_session_error)?.cursor();

    manager.navigate(direction);

    let session = manager.session().ok_or_else(no_session_error)?;
    if session.cursor() == before {
        let edge = match direction {
            Direction::Previous => "first",
            Direction::Next => "last",
        };
        println!("{} Already at the {} item.", "Note:".yellow(), edge);
    }
    print_current(session);

    Ok(())
}
