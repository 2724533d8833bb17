//! Tsconfig module - answer types and the configuration generator

pub mod answers;
pub mod generate;

pub use answers::*;
pub use generate::*;
