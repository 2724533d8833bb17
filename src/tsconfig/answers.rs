//! Answer record collected from the interactive prompts

use std::fmt;

/// How many type-safety checks the compiler should enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Relaxed - no strict flags
    Off,
    /// Balanced - `strict` only
    #[default]
    On,
    /// Rigorous - `strict` plus indexed-access and override checks
    Strict,
}

impl Strictness {
    /// All levels in the order they are offered to the user
    pub const ALL: [Strictness; 3] = [Strictness::Off, Strictness::On, Strictness::Strict];

    /// Label shown in the selection prompt
    pub fn label(&self) -> &'static str {
        match self {
            Strictness::Off => "Relaxed (Few checks)",
            Strictness::On => "Balanced (Recommended)",
            Strictness::Strict => "Rigorous (Maximum safety)",
        }
    }

    /// Position of this level within [`Strictness::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Strictness::Off => 0,
            Strictness::On => 1,
            Strictness::Strict => 2,
        }
    }

    /// Map a selection index back to a level
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Strictness::Off => "off",
            Strictness::On => "on",
            Strictness::Strict => "strict",
        };
        write!(f, "{}", value)
    }
}

/// Project name meaning "use the current working directory"
pub const CURRENT_DIR_NAME: &str = ".";

/// Complete set of answers for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub project_name: String,
    pub strictness: Strictness,
    pub is_transpiler: bool,
    pub is_library: bool,
    pub is_monorepo: bool,
    pub is_dom: bool,
}

impl Default for AnswerRecord {
    /// The answers a user gets by accepting every prompt default
    fn default() -> Self {
        Self {
            project_name: CURRENT_DIR_NAME.to_string(),
            strictness: Strictness::default(),
            is_transpiler: true,
            is_library: false,
            is_monorepo: false,
            is_dom: false,
        }
    }
}
