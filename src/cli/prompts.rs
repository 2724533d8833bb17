//! Interactive prompts using dialoguer

use dialoguer::{Confirm, Input, Select};
use tracing::debug;

use crate::error::InitError;
use crate::tsconfig::{AnswerRecord, Strictness, CURRENT_DIR_NAME};

/// Source of answers for the init questions.
///
/// Every method returns `Ok(None)` when the user backs out of the prompt.
pub trait Prompter {
    fn text(&mut self, message: &str, default: &str) -> Result<Option<String>, InitError>;
    fn select(
        &mut self,
        message: &str,
        items: &[&str],
        default: usize,
    ) -> Result<Option<usize>, InitError>;
    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>, InitError>;
}

/// Prompter backed by the user's terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&mut self, message: &str, default: &str) -> Result<Option<String>, InitError> {
        let value: String = Input::new()
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()?;
        Ok(Some(value))
    }

    fn select(
        &mut self,
        message: &str,
        items: &[&str],
        default: usize,
    ) -> Result<Option<usize>, InitError> {
        let selection = Select::new()
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact_opt()?;
        Ok(selection)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>, InitError> {
        let confirmed = Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact_opt()?;
        Ok(confirmed)
    }
}

/// Ask the six init questions in order and build the answer record.
///
/// Any cancelled prompt aborts the whole sequence with [`InitError::Cancelled`].
pub fn collect_answers<P: Prompter + ?Sized>(prompter: &mut P) -> Result<AnswerRecord, InitError> {
    let defaults = AnswerRecord::default();

    let project_name = answered(prompter.text(
        "What is the name of your project?",
        &defaults.project_name,
    )?)?;
    let project_name = normalize_project_name(&project_name);

    let labels: Vec<&str> = Strictness::ALL.iter().map(|s| s.label()).collect();
    let strictness_index = answered(prompter.select(
        "How strict should the typescript compiler be?",
        &labels,
        defaults.strictness.index(),
    )?)?;
    // Out-of-range indices cannot come from a real select; treat them as a cancel
    let strictness = Strictness::from_index(strictness_index).ok_or(InitError::Cancelled)?;

    let is_transpiler = answered(
        prompter.confirm("Are you transpiling using tsc?", defaults.is_transpiler)?,
    )?;
    let is_library =
        answered(prompter.confirm("Are you building a library?", defaults.is_library)?)?;
    let is_monorepo = answered(prompter.confirm(
        "Are you building for a library in a monorepo?",
        defaults.is_monorepo,
    )?)?;
    let is_dom = answered(prompter.confirm(
        "Is your project for a dom (browser) environment?",
        defaults.is_dom,
    )?)?;

    let answers = AnswerRecord {
        project_name,
        strictness,
        is_transpiler,
        is_library,
        is_monorepo,
        is_dom,
    };
    debug!(?answers, "collected answers");
    Ok(answers)
}

fn answered<T>(value: Option<T>) -> Result<T, InitError> {
    value.ok_or(InitError::Cancelled)
}

/// Trim the project name; blank input means the current directory
fn normalize_project_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        CURRENT_DIR_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
