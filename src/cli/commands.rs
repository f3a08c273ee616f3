//! CLI command definitions using clap.
//!
//! - repl: read commands from stdin (default)
//! - run: replay a command script and print the final list

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// todolist - an ordered todo list driven by line commands
#[derive(Parser, Debug)]
#[command(name = "todolist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read commands from stdin and print the list after each change
    Repl,

    /// Replay a command script against an empty list
    Run {
        /// Script file, one command per line
        script: PathBuf,

        /// Print the final list as JSON
        #[arg(short, long)]
        json: bool,

        /// Report failing lines and continue instead of stopping
        #[arg(short, long)]
        keep_going: bool,
    },
}
