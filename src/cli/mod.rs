//! CLI module - argument parsing, interactive prompts and the init flow

mod args;
pub mod init;
pub mod prompts;

pub use args::Cli;
pub use init::*;
pub use prompts::*;
