//! Error types for chi-squared scoring and feature selection.
//!
//! Scoring and selection never repair their input: every variant here
//! describes a reason the test cannot be run on the data as given.

use thiserror::Error;

/// Errors that can occur when scoring or selecting features.
#[derive(Debug, Error)]
pub enum ChiSquareError {
    /// The feature matrix has no samples or no feature columns.
    #[error("Feature matrix is empty ({rows} rows x {cols} columns)")]
    EmptyInput { rows: usize, cols: usize },

    /// Feature matrix and label vector are not aligned by row.
    #[error("Feature matrix has {rows} rows but label vector has {labels} entries")]
    ShapeMismatch { rows: usize, labels: usize },

    /// The chi-squared test is only defined for non-negative features.
    #[error(
        "Feature '{feature}' contains negative value {value} at row {row}. \
         Chi-squared scoring requires non-negative features."
    )]
    NegativeValue {
        feature: String,
        row: usize,
        value: f64,
    },

    /// NaN or infinite entry in the feature matrix.
    #[error("Feature '{feature}' contains non-finite value {value} at row {row}")]
    NonFinite {
        feature: String,
        row: usize,
        value: f64,
    },

    /// Feature names and feature columns differ in number.
    #[error("Got {names} feature name(s) for {columns} feature column(s)")]
    NameCountMismatch { names: usize, columns: usize },

    /// Feature columns (or sample rows) of unequal length.
    #[error("Ragged feature data: entry {index} has length {found}, expected {expected}")]
    RaggedInput {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// The statistic exceeds the range of `f64`.
    #[error("Chi-squared statistic for feature '{feature}' overflows f64")]
    Overflow { feature: String },

    /// More features requested than the matrix has.
    #[error("Cannot select top {k} features: only {available} available")]
    InvalidK { k: usize, available: usize },

    /// The chi-squared distribution could not be constructed.
    #[error("Chi-squared distribution error: {0}")]
    Distribution(String),
}

/// Result alias for scoring and selection.
pub type Result<T> = std::result::Result<T, ChiSquareError>;
