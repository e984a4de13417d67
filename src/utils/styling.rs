//! Terminal styling utilities for status output
//!
//! Everything here writes to stderr: stdout is reserved for the score blocks.

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    eprintln!();
    eprintln!(
        "    {} {}",
        style("χ²").magenta().bold(),
        style("chi-select: chi-squared feature scoring").dim()
    );
    eprintln!("    {}", style(format!("v{}", version)).dim());
    eprintln!("    {}", style("━".repeat(50)).dim());
}

/// Print the run configuration
pub fn print_config(input: &str, target: &str, top_k: &str) {
    eprintln!("      {} Input:  {}", FOLDER, truncate_string(input, 48));
    eprintln!("      {} Target: {}", TARGET, truncate_string(target, 48));
    eprintln!("      {} Top-K:  {}", CHART, style(top_k).yellow());
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    eprintln!();
    eprintln!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    eprintln!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("    {} {}", INFO, message);
}

/// Print dataset shape
pub fn print_dataset_stats(rows: usize, cols: usize, memory_mb: f64) {
    eprintln!("\n    {} Dataset Statistics:", style("✧").cyan());
    eprintln!("      Rows: {}", rows);
    eprintln!("      Columns: {}", cols);
    eprintln!("      Estimated memory: {:.2} MB", memory_mb);
}

/// Print the names of the kept features
pub fn print_selected(names: &[&str]) {
    eprintln!(
        "      Kept {} feature(s): {}",
        style(names.len()).yellow().bold(),
        style(names.join(", ")).cyan()
    );
}

/// Print where an export was written
pub fn print_saved(path: &std::path::Path) {
    eprintln!("    {} Saved to {}", SAVE, path.display());
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let tail: String = s
            .chars()
            .rev()
            .take(max_len - 3)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }
}
