//! Serve command - open the web UI for interactive labeling.

use std::path::PathBuf;

use colored::Colorize;

use crate::server::{app, state::AppState};

use super::open_manager;

pub fn run(port: u16, no_open: bool, store: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let manager = open_manager(store);

    if let Some(session) = manager.session() {
        println!(
            "Resuming {} at item {}/{}",
            session.file_name().white().bold(),
            session.cursor() + 1,
            session.len()
        );
    }

    let store_dir = manager.store().dir().display().to_string();
    let state = AppState::new(manager);

    // Print server info
    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting labeling server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Session store: {}", store_dir);
    println!("  Shortcuts: 1 contradiction, 2 neutral, 3 entailment, ←/→ navigate");
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    // Open browser if requested
    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        // Every change is already persisted; shutdown only has to flush once more.
        let state_clone = state.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            if let Err(e) = state_clone.save().await {
                eprintln!("Error saving: {}", e);
            }
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
