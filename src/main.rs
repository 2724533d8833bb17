//! tsinit: tsconfig.json Generator CLI Tool
//!
//! Asks a few questions about the project setup and writes a
//! tsconfig.json reflecting the answers.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tsinit::cli::{run_init, Cli, InitOutcome, TerminalPrompter};
use tsinit::error::failure_message;
use tsinit::report::InitSummary;
use tsinit::utils::{
    init_logging, print_banner, print_error, print_generated, print_info, print_success,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let mut prompter = TerminalPrompter;

    match run_init(&mut prompter, &cwd)? {
        InitOutcome::Written {
            answers,
            config,
            project_dir,
            path,
        } => {
            print_success(&format!("Wrote {}", path.display()));
            InitSummary::new(&answers, &config).display();
            print_generated(&project_dir);
            println!();
        }
        InitOutcome::Cancelled => {
            println!();
            print_info("Operation cancelled");
        }
    }

    Ok(())
}
