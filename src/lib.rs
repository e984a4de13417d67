//! chi-select: Chi-squared Feature Scoring Library
//!
//! A library for scoring features against a categorical label with the
//! chi-squared test of independence and keeping the top-K features.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
