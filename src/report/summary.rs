//! Ranked score summary table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::Selection;

/// Significance level used to colour p-values in the summary
const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Summary of a scoring and selection run
#[derive(Debug)]
pub struct ScoreSummary<'a> {
    pub selection: &'a Selection,
    pub n_samples: usize,
    pub n_classes: usize,
}

impl<'a> ScoreSummary<'a> {
    pub fn new(selection: &'a Selection, n_samples: usize, n_classes: usize) -> Self {
        Self {
            selection,
            n_samples,
            n_classes,
        }
    }

    /// Build the ranked table, best feature first
    pub fn table(&self) -> Table {
        let scores = &self.selection.scores;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Rank").add_attribute(Attribute::Bold),
            Cell::new("Index").add_attribute(Attribute::Bold),
            Cell::new("Feature").add_attribute(Attribute::Bold),
            Cell::new("Chi2").add_attribute(Attribute::Bold),
            Cell::new("P-value").add_attribute(Attribute::Bold),
            Cell::new("Kept").add_attribute(Attribute::Bold),
        ]);

        for (rank, j) in scores.ranking().into_iter().enumerate() {
            let kept = self.selection.is_selected(j);
            let p_value = scores.p_values[j];

            table.add_row(vec![
                Cell::new(rank + 1),
                Cell::new(j),
                Cell::new(&scores.names[j]),
                Cell::new(format!("{:.4}", scores.scores[j])),
                Cell::new(format!("{:.4e}", p_value)).fg(if p_value < SIGNIFICANCE_LEVEL {
                    Color::Green
                } else {
                    Color::Yellow
                }),
                if kept {
                    Cell::new("yes").fg(Color::Green).add_attribute(Attribute::Bold)
                } else {
                    Cell::new("no").fg(Color::White)
                },
            ]);
        }

        table
    }

    /// Print the summary to stderr
    pub fn display(&self) {
        eprintln!();
        eprintln!(
            "    {} {}",
            style("📋").cyan(),
            style("CHI-SQUARED SUMMARY").white().bold()
        );
        eprintln!("    {}", style("─".repeat(50)).dim());
        eprintln!(
            "      {} samples, {} classes, {} degree(s) of freedom",
            self.n_samples, self.n_classes, self.selection.scores.degrees_of_freedom
        );
        eprintln!();

        // Indent the table
        for line in self.table().to_string().lines() {
            eprintln!("    {}", line);
        }
    }
}
