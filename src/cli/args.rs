//! Defines the command-line arguments and subcommands for the koan runner.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "koan-runner",
    version,
    about = "Run the date/time koans and report progress."
)]
pub struct KoanArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the course and print a progress report.
    Run {
        /// Only run exercises whose name contains this substring.
        #[arg(long)]
        filter: Option<String>,
        /// Emit the report as JSON instead of text.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        no_color: bool,
    },
    /// List the course's exercises in running order.
    List,
}
