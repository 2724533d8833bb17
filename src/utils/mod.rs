//! Utilities - terminal styling and logging

pub mod logging;
pub mod styling;

pub use logging::*;
pub use styling::*;
