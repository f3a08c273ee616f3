//! CLI module for todolist - command-line interface and subcommands.

pub mod commands;
pub mod render;

pub use commands::Cli;
