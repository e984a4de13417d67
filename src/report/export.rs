//! JSON export of chi-squared scores and the selection

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::pipeline::{Selection, TopK};

/// Metadata about the scoring run
#[derive(Debug, Serialize)]
pub struct ExportMetadata {
    /// chi-select version
    pub version: String,
    /// Input file path, or the built-in dataset name
    pub input: String,
    /// Target column name
    pub target_column: String,
    /// Requested number of features (a count or "all")
    pub top_k: String,
    pub n_samples: usize,
    pub classes: Vec<String>,
    pub degrees_of_freedom: usize,
}

/// One feature's score entry
#[derive(Debug, Serialize)]
pub struct FeatureEntry {
    pub index: usize,
    pub name: String,
    pub chi2: f64,
    pub p_value: f64,
    /// 1-based position in the descending score ranking
    pub rank: usize,
    pub selected: bool,
}

/// Complete export document
#[derive(Debug, Serialize)]
pub struct ScoreExport {
    pub metadata: ExportMetadata,
    /// Kept feature names, in column order
    pub selected: Vec<String>,
    /// Per-feature entries, in column order
    pub features: Vec<FeatureEntry>,
}

/// Parameters describing where the scores came from
pub struct ExportParams<'a> {
    pub input: &'a str,
    pub target_column: &'a str,
    pub top_k: TopK,
    pub n_samples: usize,
    pub classes: &'a [String],
}

impl ScoreExport {
    pub fn new(selection: &Selection, params: &ExportParams<'_>) -> Self {
        let scores = &selection.scores;

        let mut rank = vec![0usize; scores.len()];
        for (position, j) in scores.ranking().into_iter().enumerate() {
            rank[j] = position + 1;
        }

        let features = (0..scores.len())
            .map(|j| FeatureEntry {
                index: j,
                name: scores.names[j].clone(),
                chi2: scores.scores[j],
                p_value: scores.p_values[j],
                rank: rank[j],
                selected: selection.is_selected(j),
            })
            .collect();

        Self {
            metadata: ExportMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                input: params.input.to_string(),
                target_column: params.target_column.to_string(),
                top_k: params.top_k.to_string(),
                n_samples: params.n_samples,
                classes: params.classes.to_vec(),
                degrees_of_freedom: scores.degrees_of_freedom,
            },
            selected: selection
                .selected_names()
                .into_iter()
                .map(String::from)
                .collect(),
            features,
        }
    }
}

/// Write the scores and selection to a pretty-printed JSON file
pub fn export_scores(path: &Path, selection: &Selection, params: &ExportParams<'_>) -> Result<()> {
    let export = ScoreExport::new(selection, params);
    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize chi-squared scores to JSON")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write score export: {}", path.display()))?;
    Ok(())
}
