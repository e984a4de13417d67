//! Plain-text score blocks written to stdout

use std::io::{self, Write};

use crate::pipeline::ChiSquareScores;

/// Label line preceding the statistic block
pub const STATS_LABEL: &str = "stats";

/// Label line preceding the p-value block
pub const PVAL_LABEL: &str = "pval";

/// Format a labeled block: the label line, then `"<index> <value>"` per
/// entry with the value rounded to two decimal places.
///
/// The width is fixed at two decimals for every value, so `1.0` prints as
/// `1.00` and a vanishing p-value as `0.00` rather than in shortest or
/// scientific form. Use the JSON export for full precision.
pub fn format_block(label: &str, values: &[f64]) -> String {
    let mut out = String::with_capacity(label.len() + 1 + values.len() * 12);
    out.push_str(label);
    out.push('\n');
    for (i, value) in values.iter().enumerate() {
        out.push_str(&format!("{} {:.2}\n", i, value));
    }
    out
}

/// Write one labeled block
pub fn write_block<W: Write>(writer: &mut W, label: &str, values: &[f64]) -> io::Result<()> {
    writer.write_all(format_block(label, values).as_bytes())
}

/// Write the statistic block followed by the p-value block
pub fn write_scores<W: Write>(writer: &mut W, scores: &ChiSquareScores) -> io::Result<()> {
    write_block(writer, STATS_LABEL, &scores.scores)?;
    write_block(writer, PVAL_LABEL, &scores.p_values)?;
    writer.flush()
}

/// Print both blocks to stdout
pub fn print_scores(scores: &ChiSquareScores) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_scores(&mut handle, scores)
}
