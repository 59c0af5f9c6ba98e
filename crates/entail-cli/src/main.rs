//! Entail CLI - label entailment datasets from the terminal or a browser.

mod cli;
mod commands;
mod logging;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let store = commands::store_dir(cli.store);

    let result = match cli.command {
        Commands::Load { file } => commands::load::run(file, store, cli.verbose),

        Commands::Replace { file, name } => commands::replace::run(file, name, store, cli.verbose),

        Commands::Label { label } => commands::label::run(label, store),

        Commands::Nav { direction } => commands::nav::run(direction, store),

        Commands::Key { key } => commands::key::run(key, store),

        Commands::Status { json } => commands::status::run(store, json),

        Commands::Export { output } => commands::export::run(output, store),

        Commands::Serve { port, no_open } => commands::serve::run(port, no_open, store),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
