//! Answer summary shown after tsconfig.json is written

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::tsconfig::{AnswerRecord, ModuleKind, TsConfig};

/// Summary of one init run
#[derive(Debug)]
pub struct InitSummary<'a> {
    pub answers: &'a AnswerRecord,
    pub config: &'a TsConfig,
}

impl<'a> InitSummary<'a> {
    pub fn new(answers: &'a AnswerRecord, config: &'a TsConfig) -> Self {
        Self { answers, config }
    }

    /// Build the table of answers and the options they produced
    pub fn table(&self) -> Table {
        let opts = &self.config.compiler_options;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Question").add_attribute(Attribute::Bold),
            Cell::new("Answer").add_attribute(Attribute::Bold),
            Cell::new("Result").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("Strictness"),
            Cell::new(self.answers.strictness.label()),
            Cell::new(format!("strict: {}", opts.strict.unwrap_or(false))),
        ]);

        let module = match opts.module {
            ModuleKind::NodeNext => "module: NodeNext",
            ModuleKind::Preserve => "module: preserve",
        };
        table.add_row(vec![
            Cell::new("Transpiling with tsc"),
            yes_no(self.answers.is_transpiler),
            Cell::new(module),
        ]);

        table.add_row(vec![
            Cell::new("Library"),
            yes_no(self.answers.is_library),
            Cell::new(format!("declaration: {}", opts.declaration.unwrap_or(false))),
        ]);

        table.add_row(vec![
            Cell::new("Monorepo"),
            yes_no(self.answers.is_monorepo),
            Cell::new(format!("composite: {}", opts.composite.unwrap_or(false))),
        ]);

        table.add_row(vec![
            Cell::new("DOM"),
            yes_no(self.answers.is_dom),
            Cell::new(format!("lib: {}", opts.lib.join(", "))),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());

        // Indent the table
        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }
    }
}

fn yes_no(value: bool) -> Cell {
    if value {
        Cell::new("Yes").fg(Color::Green)
    } else {
        Cell::new("No").fg(Color::DarkGrey)
    }
}
