//! Chi-squared feature scoring
//!
//! Each feature column is treated as a vector of non-negative counts (or
//! frequencies). Summing the feature within each class gives the observed
//! table; the expected table spreads the feature's total over the classes in
//! proportion to class size. The statistic for feature `j` is
//!
//! ```text
//! chi2[j] = sum over classes c of (observed[c][j] - expected[c][j])^2 / expected[c][j]
//! ```
//!
//! and its p-value is the upper tail of the chi-squared distribution with
//! `n_classes - 1` degrees of freedom.
//!
//! The statistic is linear in the scale of a feature, so each column is
//! divided by its maximum before summing and the score is multiplied back
//! afterwards. Class sums then stay within `f64` range for any finite input.

use faer::Mat;
use rayon::prelude::*;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use super::error::{ChiSquareError, Result};
use super::matrix::FeatureMatrix;
use super::target::Labels;

/// Per-feature chi-squared statistics and p-values
#[derive(Debug, Clone)]
pub struct ChiSquareScores {
    /// Feature names, in column order
    pub names: Vec<String>,
    /// Chi-squared statistic per feature
    pub scores: Vec<f64>,
    /// Upper-tail p-value per feature
    pub p_values: Vec<f64>,
    /// Degrees of freedom used for every p-value
    pub degrees_of_freedom: usize,
}

impl ChiSquareScores {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Feature indices ordered by descending score.
    ///
    /// The sort is stable, so equal scores keep their original column order.
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by(|&a, &b| {
            self.scores[b]
                .partial_cmp(&self.scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order
    }
}

/// Compute chi-squared statistics between each feature and the label.
///
/// # Errors
/// - [`ChiSquareError::EmptyInput`] if the matrix has no rows or no columns
/// - [`ChiSquareError::ShapeMismatch`] if row count and label count differ
/// - [`ChiSquareError::NonFinite`] / [`ChiSquareError::NegativeValue`] on
///   invalid entries
/// - [`ChiSquareError::Overflow`] if a rescaled statistic exceeds `f64::MAX`
pub fn chi2(features: &FeatureMatrix, labels: &Labels) -> Result<ChiSquareScores> {
    let n_samples = features.n_samples();
    let n_features = features.n_features();

    if n_samples == 0 || n_features == 0 {
        return Err(ChiSquareError::EmptyInput {
            rows: n_samples,
            cols: n_features,
        });
    }
    if labels.len() != n_samples {
        return Err(ChiSquareError::ShapeMismatch {
            rows: n_samples,
            labels: labels.len(),
        });
    }

    validate_entries(features)?;

    let n_classes = labels.n_classes();
    let scales: Vec<f64> = (0..n_features).map(|j| column_scale(features, j)).collect();
    let scaled = Mat::from_fn(n_samples, n_features, |i, j| features.get(i, j) / scales[j]);
    let table = observed_table(&scaled, labels);

    // Per-feature rows of the class x feature table
    let observed: Vec<Vec<f64>> = (0..n_features)
        .map(|j| (0..n_classes).map(|c| table[(c, j)]).collect())
        .collect();

    let class_counts: Vec<f64> = labels
        .class_counts()
        .into_iter()
        .map(|count| count as f64)
        .collect();
    let n = n_samples as f64;

    let unit_scores: Vec<f64> = observed
        .par_iter()
        .map(|per_class| {
            let total: f64 = per_class.iter().sum();
            per_class
                .iter()
                .zip(&class_counts)
                .map(|(&obs, &count)| {
                    let expected = total * count / n;
                    // Zero expected implies zero observed for non-negative input
                    if expected > 0.0 {
                        let diff = obs - expected;
                        diff * diff / expected
                    } else {
                        0.0
                    }
                })
                .sum::<f64>()
        })
        .collect();

    let scores = unit_scores
        .into_iter()
        .zip(&scales)
        .enumerate()
        .map(|(j, (score, &scale))| {
            let score = score * scale;
            if score.is_finite() {
                Ok(score)
            } else {
                Err(ChiSquareError::Overflow {
                    feature: features.names()[j].clone(),
                })
            }
        })
        .collect::<Result<Vec<f64>>>()?;

    let degrees_of_freedom = n_classes.saturating_sub(1);
    let p_values = p_values(&scores, degrees_of_freedom)?;

    Ok(ChiSquareScores {
        names: features.names().to_vec(),
        scores,
        p_values,
        degrees_of_freedom,
    })
}

/// Reject negative and non-finite entries, reporting the first one found
fn validate_entries(features: &FeatureMatrix) -> Result<()> {
    for j in 0..features.n_features() {
        for i in 0..features.n_samples() {
            let value = features.get(i, j);
            if !value.is_finite() {
                return Err(ChiSquareError::NonFinite {
                    feature: features.names()[j].clone(),
                    row: i,
                    value,
                });
            }
            if value < 0.0 {
                return Err(ChiSquareError::NegativeValue {
                    feature: features.names()[j].clone(),
                    row: i,
                    value,
                });
            }
        }
    }
    Ok(())
}

/// Largest entry of a column, or 1 for an all-zero column
fn column_scale(features: &FeatureMatrix, col: usize) -> f64 {
    let max = (0..features.n_samples())
        .map(|i| features.get(i, col))
        .fold(0.0, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Class x feature table of per-class feature sums, computed as `Yᵀ·X`
/// where `Y` is the one-hot class indicator matrix
fn observed_table(data: &Mat<f64>, labels: &Labels) -> Mat<f64> {
    let codes = labels.codes();
    let indicator = Mat::from_fn(data.nrows(), labels.n_classes(), |i, c| {
        if codes[i] == c {
            1.0
        } else {
            0.0
        }
    });

    indicator.transpose() * data
}

/// Upper-tail chi-squared probabilities.
///
/// With fewer than two classes there is no variation to test: every score is
/// zero and every p-value is 1.
fn p_values(scores: &[f64], degrees_of_freedom: usize) -> Result<Vec<f64>> {
    if degrees_of_freedom == 0 {
        return Ok(vec![1.0; scores.len()]);
    }

    let dist = ChiSquared::new(degrees_of_freedom as f64)
        .map_err(|e| ChiSquareError::Distribution(e.to_string()))?;

    Ok(scores
        .iter()
        .map(|&s| dist.sf(s).clamp(0.0, 1.0))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[Vec<f64>]) -> FeatureMatrix {
        FeatureMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_observed_table_sums_per_class() {
        let m = matrix(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        let labels = Labels::from_values(&["a", "b", "a"]);
        let observed = observed_table(m.data(), &labels);

        assert_eq!(observed.nrows(), 2);
        assert_eq!(observed.ncols(), 2);
        assert_eq!(observed[(0, 0)], 6.0);
        assert_eq!(observed[(0, 1)], 8.0);
        assert_eq!(observed[(1, 0)], 3.0);
        assert_eq!(observed[(1, 1)], 4.0);
    }

    #[test]
    fn test_hand_computed_two_class_score() {
        // Feature totals 4, classes of 2 samples each: expected 2 per class.
        // Observed 4 and 0 gives (4-2)^2/2 + (0-2)^2/2 = 4.
        let m = matrix(&[vec![2.0], vec![2.0], vec![0.0], vec![0.0]]);
        let labels = Labels::from_values(&["1", "1", "0", "0"]);
        let result = chi2(&m, &labels).unwrap();

        assert!((result.scores[0] - 4.0).abs() < 1e-12);
        assert_eq!(result.degrees_of_freedom, 1);
        // P(chi2_1 > 4) = 0.0455002638963584
        assert!((result.p_values[0] - 0.045_500_263_896_358_4).abs() < 1e-9);
    }

    #[test]
    fn test_single_class_gives_unit_p_values() {
        let m = matrix(&[vec![1.0, 5.0], vec![2.0, 0.0]]);
        let labels = Labels::from_values(&["only", "only"]);
        let result = chi2(&m, &labels).unwrap();

        assert_eq!(result.scores, vec![0.0, 0.0]);
        assert_eq!(result.p_values, vec![1.0, 1.0]);
        assert_eq!(result.degrees_of_freedom, 0);
    }

    #[test]
    fn test_all_zero_column_scores_zero() {
        let m = matrix(&[vec![0.0, 1.0], vec![0.0, 3.0]]);
        let labels = Labels::from_values(&["a", "b"]);
        let result = chi2(&m, &labels).unwrap();

        assert_eq!(result.scores[0], 0.0);
        assert_eq!(result.p_values[0], 1.0);
    }

    #[test]
    fn test_near_max_entries_stay_finite() {
        let m = matrix(&[vec![1e308, 1e308], vec![1e308, 0.0], vec![1e308, 1e308]]);
        let labels = Labels::from_values(&["a", "b", "a"]);
        let result = chi2(&m, &labels).unwrap();

        // Constant column: observed equals expected
        assert_eq!(result.scores[0], 0.0);
        assert_eq!(result.p_values[0], 1.0);
        // Scaled column [1, 0, 1] scores 1, rescaled by 1e308
        assert!((result.scores[1] / 1e308 - 1.0).abs() < 1e-12);
        assert!((0.0..=1.0).contains(&result.p_values[1]));
    }

    #[test]
    fn test_statistic_beyond_f64_range_is_overflow() {
        // One sample of 1e308 in a class of 1 out of 10 scores 9e308
        let mut rows = vec![vec![1e308]];
        rows.extend((0..9).map(|_| vec![0.0]));
        let mut labels = vec!["a"];
        labels.extend(["b"; 9]);

        let err = chi2(&matrix(&rows), &Labels::from_values(&labels)).unwrap_err();
        assert!(matches!(err, ChiSquareError::Overflow { ref feature } if feature == "x0"));
    }

    #[test]
    fn test_nan_rejected() {
        let m = matrix(&[vec![1.0], vec![f64::NAN]]);
        let labels = Labels::from_values(&["a", "b"]);
        let err = chi2(&m, &labels).unwrap_err();
        assert!(matches!(err, ChiSquareError::NonFinite { row: 1, .. }));
    }

    #[test]
    fn test_ranking_is_stable_on_ties() {
        let scores = ChiSquareScores {
            names: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            scores: vec![1.0, 5.0, 5.0, 2.0],
            p_values: vec![0.5; 4],
            degrees_of_freedom: 1,
        };
        assert_eq!(scores.ranking(), vec![1, 2, 3, 0]);
    }
}
