//! Target column encoding
//!
//! The chi-squared test treats the target as categorical: every distinct
//! non-null value becomes one class, whatever the column's dtype.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use polars::prelude::*;

/// Class-encoded label vector, aligned by row with a feature matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    classes: Vec<String>,
    codes: Vec<usize>,
}

impl Labels {
    /// Encode raw label values. Classes are the distinct values, sorted.
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Self {
        let index: BTreeMap<&str, usize> = values
            .iter()
            .map(|v| v.as_ref())
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();

        let codes = values.iter().map(|v| index[v.as_ref()]).collect();
        let classes = index.keys().map(|s| s.to_string()).collect();

        Self { classes, codes }
    }

    /// Sorted distinct class names
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Class index of every sample
    pub fn codes(&self) -> &[usize] {
        &self.codes
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Number of samples in each class, indexed by class code
    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.classes.len()];
        for &c in &self.codes {
            counts[c] += 1;
        }
        counts
    }
}

/// Encode a target column into class labels.
///
/// # Errors
/// Fails if the column is empty or contains null values.
pub fn encode_labels(col: &Column) -> Result<Labels> {
    let name = col.name().to_string();

    if col.len() == 0 {
        anyhow::bail!("Target column '{}' is empty", name);
    }

    let values = column_as_strings(col)
        .with_context(|| format!("Failed to read target column '{}'", name))?;

    let mut out = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        match value {
            Some(v) => out.push(v),
            None => anyhow::bail!(
                "Target column '{}' contains a null value at row {}",
                name,
                row
            ),
        }
    }

    Ok(Labels::from_values(&out))
}

/// Render every value of a column as a string, keeping nulls
fn column_as_strings(col: &Column) -> Result<Vec<Option<String>>> {
    let values: Vec<Option<String>> = match col.dtype() {
        DataType::String => col
            .str()?
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect(),
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => {
            let cast = col.cast(&DataType::Int64)?;
            cast.i64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => {
            let cast = col.cast(&DataType::UInt64)?;
            cast.u64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::Float32 | DataType::Float64 => {
            let cast = col.cast(&DataType::Float64)?;
            // Adding 0.0 folds -0.0 into 0.0 so both land in one class
            cast.f64()?
                .into_iter()
                .map(|v| v.map(|n| format!("{}", n + 0.0)))
                .collect()
        }
        DataType::Boolean => col
            .bool()?
            .into_iter()
            .map(|v| v.map(|b| b.to_string()))
            .collect(),
        _ => {
            let cast = col.cast(&DataType::String)?;
            cast.str()?
                .into_iter()
                .map(|v| v.map(|s| s.to_string()))
                .collect()
        }
    };

    Ok(values)
}
