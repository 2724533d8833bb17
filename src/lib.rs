//! tsinit: tsconfig.json Generator Library
//!
//! A library for turning a handful of project-setup answers
//! into a TypeScript compiler settings document.

pub mod cli;
pub mod error;
pub mod report;
pub mod tsconfig;
pub mod utils;
