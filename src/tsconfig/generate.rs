//! Configuration generator - maps an answer record to a tsconfig document
//!
//! `generate` is pure: it performs no I/O and returns the same document for
//! the same answers. Field order in [`CompilerOptions`] is the key order of
//! the emitted JSON, so fields are declared in the order the rules apply.

use serde::Serialize;

use super::answers::{AnswerRecord, Strictness};

/// ECMAScript target used for `target` and the base `lib` entry
pub const ES_TARGET: &str = "es2022";

/// Output directory used when tsc is the transpiler
pub const OUT_DIR: &str = "dist";

/// Value of the `module` compiler option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModuleKind {
    #[serde(rename = "NodeNext")]
    NodeNext,
    #[serde(rename = "preserve")]
    Preserve,
}

/// The root document written to `tsconfig.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    pub compiler_options: CompilerOptions,
}

/// Compiler options; `None` fields are left out of the JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    // Base options, present in every document
    pub es_module_interop: bool,
    pub skip_lib_check: bool,
    pub target: &'static str,
    pub allow_js: bool,
    pub resolve_json_module: bool,
    pub module_detection: &'static str,
    pub isolated_modules: bool,
    pub verbatim_module_syntax: bool,

    // Strictness
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_unchecked_indexed_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_implicit_override: Option<bool>,

    // Transpiling
    pub module: ModuleKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_map: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_emit: Option<bool>,

    // Library
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<bool>,

    // Monorepo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration_map: Option<bool>,

    pub lib: Vec<&'static str>,
}

/// Build the tsconfig document for a set of answers
pub fn generate(answers: &AnswerRecord) -> TsConfig {
    let (strict, no_unchecked_indexed_access, no_implicit_override) = match answers.strictness {
        Strictness::Strict => (Some(true), Some(true), Some(true)),
        Strictness::On => (Some(true), None, None),
        Strictness::Off => (None, None, None),
    };

    let (module, out_dir, source_map, no_emit) = if answers.is_transpiler {
        (ModuleKind::NodeNext, Some(OUT_DIR), Some(true), None)
    } else {
        (ModuleKind::Preserve, None, None, Some(true))
    };

    let lib = if answers.is_dom {
        vec![ES_TARGET, "dom", "dom.iterable"]
    } else {
        vec![ES_TARGET]
    };

    TsConfig {
        compiler_options: CompilerOptions {
            es_module_interop: true,
            skip_lib_check: true,
            target: ES_TARGET,
            allow_js: true,
            resolve_json_module: true,
            module_detection: "force",
            isolated_modules: true,
            verbatim_module_syntax: true,
            strict,
            no_unchecked_indexed_access,
            no_implicit_override,
            module,
            out_dir,
            source_map,
            no_emit,
            declaration: answers.is_library.then_some(true),
            composite: answers.is_monorepo.then_some(true),
            declaration_map: answers.is_monorepo.then_some(true),
            lib,
        },
    }
}

impl TsConfig {
    /// Serialize as 2-space indented JSON, with no trailing newline
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
