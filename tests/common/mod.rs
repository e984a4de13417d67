//! Shared test utilities and fixture generators

#![allow(dead_code)]

use chiselect::pipeline::{FeatureMatrix, Labels};
use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Reference chi-squared statistics for the iris features
pub const IRIS_CHI2: [f64; 4] = [
    10.817_820_878_493_993,
    3.710_728_303_532_493,
    116.312_613_092_070_14,
    67.048_360_200_111_12,
];

/// Reference p-values for the iris features (2 degrees of freedom)
pub const IRIS_P_VALUES: [f64; 4] = [
    4.476_514_990_225_736_5e-3,
    0.156_395_980_431_625_6,
    5.533_972_277_194_137e-26,
    2.758_249_653_003_460_4e-15,
];

/// Stdout of a default run on the built-in dataset
pub const IRIS_REPORT: &str = "stats\n0 10.82\n1 3.71\n2 116.31\n3 67.05\npval\n0 0.00\n1 0.16\n2 0.00\n3 0.00\n";

/// Relative comparison for values spanning many orders of magnitude
pub fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
    let scale = expected.abs().max(f64::MIN_POSITIVE);
    assert!(
        ((actual - expected) / scale).abs() < rel_tol,
        "expected {:e}, got {:e} (relative tolerance {:e})",
        expected,
        actual,
        rel_tol
    );
}

/// Small three-class matrix with one informative, one uninformative
/// (class-proportional) and one weakly informative feature
///
/// - `informative`: concentrated in class `a`
/// - `proportional`: every sample has value 2, so class totals match class sizes
/// - `weak`: mild skew toward class `c`
pub fn create_three_class_fixture() -> (FeatureMatrix, Labels) {
    let labels = Labels::from_values(&["a", "a", "b", "b", "c", "c"]);
    let features = FeatureMatrix::from_columns(
        vec![
            "informative".to_string(),
            "proportional".to_string(),
            "weak".to_string(),
        ],
        &[
            vec![9.0, 8.0, 1.0, 0.0, 1.0, 1.0],
            vec![2.0, 2.0, 2.0, 2.0, 2.0, 2.0],
            vec![1.0, 1.0, 1.0, 1.0, 2.0, 2.0],
        ],
    )
    .unwrap();
    (features, labels)
}

/// Random non-negative count matrix with a random label vector
pub fn create_random_fixture(rows: usize, cols: usize, classes: usize, seed: u64) -> (FeatureMatrix, Labels) {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let columns: Vec<Vec<f64>> = (0..cols)
        .map(|_| (0..rows).map(|_| rng.gen_range(0..20) as f64).collect())
        .collect();
    let names = (0..cols).map(|j| format!("feature_{}", j)).collect();
    let label_values: Vec<String> = (0..rows)
        .map(|_| format!("class_{}", rng.gen_range(0..classes)))
        .collect();

    (
        FeatureMatrix::from_columns(names, &columns).unwrap(),
        Labels::from_values(&label_values),
    )
}

/// Labeled DataFrame for loader tests
pub fn create_labeled_dataframe() -> DataFrame {
    df! {
        "id" => [1i32, 2, 3, 4, 5, 6],
        "clicks" => [10i64, 12, 0, 1, 5, 6],
        "visits" => [1.0f64, 1.5, 3.0, 2.5, 2.0, 2.0],
        "target" => ["buy", "buy", "skip", "skip", "maybe", "maybe"],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}
