//! Terminal styling utilities for prompts and status lines

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("tsinit").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!(
        "    {}",
        style("Answer a few questions to generate a tsconfig.json").dim()
    );
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("    {} {}", style("✗").red().bold(), style(message).red());
}

/// Print the line announcing where tsconfig.json was written
pub fn print_generated(project_dir: &Path) {
    println!();
    println!(
        "    {} tsconfig.json has been generated in {}{}",
        ROCKET,
        FOLDER,
        style(project_dir.display()).cyan().bold()
    );
}
