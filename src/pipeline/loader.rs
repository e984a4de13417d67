//! Dataset loader for CSV and Parquet files, and feature matrix extraction

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use super::matrix::FeatureMatrix;
use super::target::{encode_labels, Labels};

/// Load a dataset from a file (CSV or Parquet based on extension)
///
/// `infer_schema_length` applies to CSV only; 0 means a full table scan.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let schema_length = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let lf = match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(schema_length)
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, parquet",
            extension
        ),
    };

    lf.collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))
}

/// Split a DataFrame into a numeric feature matrix and an encoded label vector.
///
/// Every column other than `target` and the names in `drop_columns` is a
/// feature. Features must be numeric and contain no nulls; nothing is
/// imputed or coerced.
pub fn extract_features(
    df: &DataFrame,
    target: &str,
    drop_columns: &[String],
) -> Result<(FeatureMatrix, Labels)> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    if !column_names.iter().any(|c| c == target) {
        anyhow::bail!(
            "Target column '{}' not found in dataset. Available columns: {:?}",
            target,
            column_names
        );
    }

    for name in drop_columns {
        if !column_names.contains(name) {
            anyhow::bail!("Column '{}' listed in --drop-columns not found in dataset", name);
        }
    }

    let labels = encode_labels(df.column(target)?)?;

    let mut names = Vec::new();
    let mut columns = Vec::new();

    for name in &column_names {
        if name == target || drop_columns.contains(name) {
            continue;
        }

        let column = df.column(name)?;
        if !column.dtype().is_primitive_numeric() {
            anyhow::bail!(
                "Feature column '{}' has non-numeric type {}. Drop it with --drop-columns.",
                name,
                column.dtype()
            );
        }
        if column.null_count() > 0 {
            anyhow::bail!(
                "Feature column '{}' contains {} null value(s)",
                name,
                column.null_count()
            );
        }

        let values: Vec<f64> = column
            .cast(&DataType::Float64)
            .with_context(|| format!("Failed to cast feature column '{}' to Float64", name))?
            .f64()?
            .into_no_null_iter()
            .collect();

        names.push(name.clone());
        columns.push(values);
    }

    if columns.is_empty() {
        anyhow::bail!("Dataset has no feature columns besides target '{}'", target);
    }

    Ok((FeatureMatrix::from_columns(names, &columns)?, labels))
}

/// Estimated in-memory size of a DataFrame in megabytes
pub fn estimated_size_mb(df: &DataFrame) -> f64 {
    df.estimated_size() as f64 / (1024.0 * 1024.0)
}
