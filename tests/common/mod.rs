//! Shared test utilities - a scripted prompter standing in for the terminal

#![allow(dead_code)]

use std::collections::VecDeque;

use tsinit::cli::Prompter;
use tsinit::error::InitError;
use tsinit::tsconfig::{AnswerRecord, Strictness};

/// One scripted reply; `Cancel` behaves like Esc on that prompt
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Select(usize),
    Confirm(bool),
    Default,
    Cancel,
    Interrupt,
}

/// Prompter that replays a fixed list of replies and records every message asked
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: replies.into(),
            asked: Vec::new(),
        }
    }

    /// Script that answers every prompt with the given record
    pub fn answering(answers: &AnswerRecord) -> Self {
        Self::new(vec![
            Reply::Text(answers.project_name.clone()),
            Reply::Select(answers.strictness.index()),
            Reply::Confirm(answers.is_transpiler),
            Reply::Confirm(answers.is_library),
            Reply::Confirm(answers.is_monorepo),
            Reply::Confirm(answers.is_dom),
        ])
    }

    fn next(&mut self, message: &str) -> Reply {
        self.asked.push(message.to_string());
        self.replies.pop_front().unwrap_or(Reply::Cancel)
    }
}

fn interrupted() -> InitError {
    dialoguer::Error::IO(std::io::Error::new(
        std::io::ErrorKind::Interrupted,
        "read interrupted",
    ))
    .into()
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, message: &str, default: &str) -> Result<Option<String>, InitError> {
        match self.next(message) {
            Reply::Text(value) => Ok(Some(value)),
            Reply::Default => Ok(Some(default.to_string())),
            Reply::Cancel => Ok(None),
            Reply::Interrupt => Err(interrupted()),
            other => panic!("unexpected reply {:?} for text prompt '{}'", other, message),
        }
    }

    fn select(
        &mut self,
        message: &str,
        _items: &[&str],
        default: usize,
    ) -> Result<Option<usize>, InitError> {
        match self.next(message) {
            Reply::Select(index) => Ok(Some(index)),
            Reply::Default => Ok(Some(default)),
            Reply::Cancel => Ok(None),
            Reply::Interrupt => Err(interrupted()),
            other => panic!("unexpected reply {:?} for select prompt '{}'", other, message),
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>, InitError> {
        match self.next(message) {
            Reply::Confirm(value) => Ok(Some(value)),
            Reply::Default => Ok(Some(default)),
            Reply::Cancel => Ok(None),
            Reply::Interrupt => Err(interrupted()),
            other => panic!("unexpected reply {:?} for confirm prompt '{}'", other, message),
        }
    }
}

/// Every combination of the five non-name answer fields (48 records)
pub fn all_answer_combinations() -> Vec<AnswerRecord> {
    let mut records = Vec::with_capacity(48);
    for strictness in Strictness::ALL {
        for bits in 0..16u8 {
            records.push(AnswerRecord {
                project_name: ".".to_string(),
                strictness,
                is_transpiler: bits & 1 != 0,
                is_library: bits & 2 != 0,
                is_monorepo: bits & 4 != 0,
                is_dom: bits & 8 != 0,
            });
        }
    }
    records
}
