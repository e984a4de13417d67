//! Command-line argument definitions using clap
//!
//! Every argument is optional: with none, the built-in iris dataset is
//! scored and the top two features are selected.

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::{TopK, IRIS_TARGET};

/// chi-select - Score features against a label with the chi-squared test
#[derive(Parser, Debug)]
#[command(name = "chiselect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet).
    /// If not provided, the built-in iris dataset is used.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Target (label) column name. Required with --input;
    /// defaults to 'species' for the built-in dataset.
    #[arg(short, long)]
    pub target: Option<String>,

    /// Number of top-scoring features to keep, or "all"
    #[arg(short = 'k', long, default_value = "2")]
    pub top_k: TopK,

    /// Columns to exclude from scoring (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub drop_columns: Vec<String>,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Print a ranked summary table to stderr
    #[arg(long, default_value = "false")]
    pub summary: bool,

    /// Write scores and the selection to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl Cli {
    /// Resolve the target column: explicit, or the built-in dataset's label.
    ///
    /// Returns `None` when an input file is given without a target.
    pub fn target_column(&self) -> Option<String> {
        match (&self.target, &self.input) {
            (Some(t), _) => Some(t.clone()),
            (None, None) => Some(IRIS_TARGET.to_string()),
            (None, Some(_)) => None,
        }
    }

    /// Human-readable description of the data source
    pub fn input_label(&self) -> String {
        self.input
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in iris dataset".to_string())
    }
}
