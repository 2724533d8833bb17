//! Command-line argument definitions using clap

use clap::{ArgAction, Parser};

/// tsinit - Generate a tsconfig.json by answering a few questions about your project
#[derive(Parser, Debug)]
#[command(name = "tsinit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter directive for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
