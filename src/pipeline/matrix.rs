//! Dense feature matrix with named columns

use faer::Mat;

use super::error::{ChiSquareError, Result};

/// Samples x features matrix with one name per feature column
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    data: Mat<f64>,
    names: Vec<String>,
}

impl FeatureMatrix {
    /// Build a matrix from column-major feature vectors.
    ///
    /// # Errors
    /// - [`ChiSquareError::NameCountMismatch`] if there is not one name per column
    /// - [`ChiSquareError::RaggedInput`] if the columns differ in length
    pub fn from_columns(names: Vec<String>, columns: &[Vec<f64>]) -> Result<Self> {
        if names.len() != columns.len() {
            return Err(ChiSquareError::NameCountMismatch {
                names: names.len(),
                columns: columns.len(),
            });
        }
        let n_rows = columns.first().map_or(0, Vec::len);
        check_equal_lengths(columns, n_rows)?;

        let data = Mat::from_fn(n_rows, columns.len(), |i, j| columns[j][i]);
        Ok(Self { data, names })
    }

    /// Build a matrix from row-major sample vectors, naming columns `x0, x1, ...`
    ///
    /// # Errors
    /// [`ChiSquareError::RaggedInput`] if the rows differ in length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n_cols = rows.first().map_or(0, Vec::len);
        check_equal_lengths(rows, n_cols)?;

        let data = Mat::from_fn(rows.len(), n_cols, |i, j| rows[i][j]);
        let names = (0..n_cols).map(|j| format!("x{}", j)).collect();
        Ok(Self { data, names })
    }

    pub fn n_samples(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.data.ncols()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn data(&self) -> &Mat<f64> {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[(row, col)]
    }

    /// Copy out one feature column
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.n_samples()).map(|i| self.data[(i, col)]).collect()
    }

    /// New matrix holding only the given columns, in the order given
    pub fn select_columns(&self, indices: &[usize]) -> Self {
        let data = Mat::from_fn(self.n_samples(), indices.len(), |i, j| {
            self.data[(i, indices[j])]
        });
        let names = indices.iter().map(|&j| self.names[j].clone()).collect();
        Self { data, names }
    }
}

fn check_equal_lengths(vectors: &[Vec<f64>], expected: usize) -> Result<()> {
    match vectors.iter().position(|v| v.len() != expected) {
        Some(index) => Err(ChiSquareError::RaggedInput {
            index,
            expected,
            found: vectors[index].len(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_and_columns_agree() {
        let by_rows =
            FeatureMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        let by_cols = FeatureMatrix::from_columns(
            vec!["x0".to_string(), "x1".to_string()],
            &[vec![1.0, 3.0, 5.0], vec![2.0, 4.0, 6.0]],
        )
        .unwrap();

        assert_eq!(by_rows.n_samples(), 3);
        assert_eq!(by_rows.n_features(), 2);
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(by_rows.get(i, j), by_cols.get(i, j));
            }
        }
        assert_eq!(by_rows.names(), by_cols.names());
    }

    #[test]
    fn test_select_columns() {
        let m = FeatureMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let sub = m.select_columns(&[0, 2]);

        assert_eq!(sub.n_features(), 2);
        assert_eq!(sub.names(), &["x0".to_string(), "x2".to_string()]);
        assert_eq!(sub.column(1), vec![3.0, 6.0]);
    }

    #[test]
    fn test_empty_matrix() {
        let m = FeatureMatrix::from_rows(&[]).unwrap();
        assert_eq!(m.n_samples(), 0);
        assert_eq!(m.n_features(), 0);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = FeatureMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            ChiSquareError::RaggedInput {
                index: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let err = FeatureMatrix::from_columns(
            vec!["a".to_string(), "b".to_string()],
            &[vec![1.0, 2.0, 3.0], vec![4.0, 5.0]],
        )
        .unwrap_err();
        assert!(matches!(err, ChiSquareError::RaggedInput { index: 1, .. }));
    }

    #[test]
    fn test_name_count_mismatch_rejected() {
        let err = FeatureMatrix::from_columns(vec!["a".to_string()], &[vec![1.0], vec![2.0]])
            .unwrap_err();
        assert!(matches!(
            err,
            ChiSquareError::NameCountMismatch {
                names: 1,
                columns: 2
            }
        ));
    }
}
