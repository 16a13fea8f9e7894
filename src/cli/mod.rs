//! The koan runner command-line interface.
//!
//! This module is the entry point for all CLI commands and orchestrates the
//! core library functions: discover the course, run it, render the report,
//! and gate the process exit code on failures.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use miette::Diagnostic;
use termcolor::{ColorChoice, StandardStream};
use thiserror::Error;

use crate::cli::args::{Command, KoanArgs};
use crate::errors::DiscoveryError;
use crate::exercise::discover;
use crate::{koans, report, runner};

pub mod args;

#[derive(Debug, Error, Diagnostic)]
enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("failed to write report")]
    #[diagnostic(code(koans::cli::io))]
    Io(#[from] io::Error),
}

/// The main entry point for the CLI.
pub fn run() -> ExitCode {
    let args = KoanArgs::parse();

    let result = match args.command {
        Command::Run {
            filter,
            json,
            no_color,
        } => handle_run(filter.as_deref(), json, no_color),
        Command::List => handle_list(),
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{:?}", miette::Report::new(error));
            ExitCode::from(2)
        }
    }
}

fn handle_run(filter: Option<&str>, json: bool, no_color: bool) -> Result<ExitCode, CliError> {
    let mut exercises = discover(koans::course())?;
    if let Some(filter) = filter {
        let needle = filter.to_lowercase();
        exercises.retain(|e| e.name.to_lowercase().contains(&needle));
    }

    let report = runner::run(exercises);

    if json {
        report::render_json(&report, &mut io::stdout())?;
    } else {
        let mut out = StandardStream::stdout(color_choice(no_color));
        report::render(&report, &mut out)?;
    }

    Ok(if report.failed_count > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn handle_list() -> Result<ExitCode, CliError> {
    let exercises = discover(koans::course())?;
    for exercise in &exercises {
        println!("{}", exercise.name);
    }
    Ok(ExitCode::SUCCESS)
}

fn color_choice(no_color: bool) -> ColorChoice {
    if no_color || !atty::is(atty::Stream::Stdout) {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}
