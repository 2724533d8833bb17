//! Report module - summarizing the generated configuration

pub mod summary;

pub use summary::*;
