//! Status command - show the current item and labeling progress.

use std::path::PathBuf;

use colored::Colorize;
use entail::Label;

use super::{open_manager, print_current};

pub fn run(store: PathBuf, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let manager = open_manager(store);

    let Some(view) = manager.view() else {
        if json_output {
            println!("{}", serde_json::json!({ "active": false }));
        } else {
            println!("No dataset loaded.");
            println!(
                "Run {} to start labeling.",
                "entail load <FILE>".cyan().bold()
            );
        }
        return Ok(());
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let Some(session) = manager.session() else {
        return Ok(());
    };

    println!(
        "{} {}",
        "Labeling status for".cyan().bold(),
        if view.file_name.is_empty() {
            "Unknown file".white()
        } else {
            view.file_name.white()
        }
    );
    println!();

    // Progress bar
    let bar_width = 30;
    let filled = (view.progress * bar_width as f64).round() as usize;
    let bar: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);
    println!(
        "Position: {} {}/{}",
        bar.cyan(),
        view.position.to_string().white().bold(),
        view.total
    );
    println!(
        "Labeled:  {}/{}",
        view.labeled_count.to_string().green().bold(),
        view.total
    );
    println!();

    println!("{}", "Labels:".yellow().bold());
    for label in Label::ALL {
        let count = session.labels().values().filter(|l| **l == label).count();
        println!(
            "  [{}] {:<14} {}",
            label.shortcut_key(),
            label.as_str(),
            count.to_string().white()
        );
    }
    println!();

    print_current(session);

    Ok(())
}
