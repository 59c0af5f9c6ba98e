//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use entail::Direction;

/// Entail: label premise/hypothesis pairs for entailment datasets
#[derive(Parser)]
#[command(name = "entail")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the saved session (default: local data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a dataset, starting a new session
    Load {
        /// Path to the dataset (JSON array of premise/hypothesis objects)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Replace the dataset of the current session
    Replace {
        /// Path to the new dataset
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// File name to record for the session (default: the file's name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Label the current item and move to the next one
    Label {
        /// contradiction, neutral, entailment (or 1, 2, 3)
        #[arg(value_name = "LABEL")]
        label: String,
    },

    /// Move to the previous or next item
    Nav {
        /// next or prev (also 1 or -1)
        #[arg(value_name = "DIRECTION", allow_hyphen_values = true)]
        direction: Direction,
    },

    /// Send a keyboard shortcut (1, 2, 3, ArrowLeft, ArrowRight)
    Key {
        #[arg(value_name = "KEY", allow_hyphen_values = true)]
        key: String,
    },

    /// Show the current item and labeling progress
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the labeled dataset to a timestamped JSON file
    Export {
        /// Directory for the export file
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Open the web UI for interactive labeling
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "3142")]
        port: u16,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nav_direction() {
        let cli = Cli::try_parse_from(["entail", "nav", "prev"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Nav {
                direction: Direction::Previous
            }
        ));
    }

    #[test]
    fn test_global_store_flag() {
        let cli = Cli::try_parse_from(["entail", "status", "--store", "/tmp/s", "-v"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/s")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_replace_name() {
        let cli =
            Cli::try_parse_from(["entail", "replace", "b.json", "--name", "round2.json"]).unwrap();
        match cli.command {
            Commands::Replace { file, name } => {
                assert_eq!(file, PathBuf::from("b.json"));
                assert_eq!(name.as_deref(), Some("round2.json"));
            }
            _ => panic!("expected replace"),
        }
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["entail", "serve"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Serve {
                port: 3142,
                no_open: false
            }
        ));
    }
}
