//! Top-K feature selection by chi-squared score

use std::fmt;
use std::str::FromStr;

use super::chi2::{chi2, ChiSquareScores};
use super::error::{ChiSquareError, Result};
use super::matrix::FeatureMatrix;
use super::target::Labels;

/// How many features to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopK {
    /// Keep the `n` highest-scoring features
    Count(usize),
    /// Keep every feature
    All,
}

impl Default for TopK {
    fn default() -> Self {
        TopK::Count(2)
    }
}

impl FromStr for TopK {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(TopK::All);
        }
        s.parse::<usize>()
            .map(TopK::Count)
            .map_err(|_| format!("'{}' is not a feature count or 'all'", s))
    }
}

impl fmt::Display for TopK {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopK::Count(n) => write!(f, "{}", n),
            TopK::All => write!(f, "all"),
        }
    }
}

/// Result of top-K selection
#[derive(Debug, Clone)]
pub struct Selection {
    /// Kept column indices in ascending (original) order
    pub indices: Vec<usize>,
    /// Feature matrix reduced to the kept columns
    pub matrix: FeatureMatrix,
    /// Scores of the full matrix the selection was made from
    pub scores: ChiSquareScores,
}

impl Selection {
    /// Names of the kept features, in original column order
    pub fn selected_names(&self) -> Vec<&str> {
        self.indices
            .iter()
            .map(|&j| self.scores.names[j].as_str())
            .collect()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }
}

/// Keep the `k` features with the highest chi-squared scores.
///
/// Ties are broken by original column order (earlier columns win) and the
/// kept columns are returned in their original order.
pub fn select_k_best(features: &FeatureMatrix, labels: &Labels, k: TopK) -> Result<Selection> {
    let scores = chi2(features, labels)?;
    let indices = top_k_indices(&scores, k)?;
    let matrix = features.select_columns(&indices);

    Ok(Selection {
        indices,
        matrix,
        scores,
    })
}

/// Indices of the `k` best features, ascending
pub fn top_k_indices(scores: &ChiSquareScores, k: TopK) -> Result<Vec<usize>> {
    let available = scores.len();
    let k = match k {
        TopK::All => available,
        TopK::Count(n) if n > available => {
            return Err(ChiSquareError::InvalidK { k: n, available })
        }
        TopK::Count(n) => n,
    };

    let mut indices: Vec<usize> = scores.ranking().into_iter().take(k).collect();
    indices.sort_unstable();
    Ok(indices)
}
