//! chi-select: Chi-squared Feature Scoring CLI Tool
//!
//! Scores every feature against a label with the chi-squared test, keeps the
//! top-K features, and prints the rounded scores and p-values.

use anyhow::Result;
use clap::Parser;

use chiselect::cli::Cli;
use chiselect::pipeline::{
    chi2, estimated_size_mb, extract_features, iris, load_dataset, select_k_best,
};
use chiselect::report::{export_scores, print_scores, ExportParams, ScoreSummary};
use chiselect::utils::{
    create_spinner, finish_with_success, print_banner, print_config, print_dataset_stats,
    print_info, print_saved, print_selected, print_step_header, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let target = cli.target_column().ok_or_else(|| {
        anyhow::anyhow!("Target column is required with --input. Use -t/--target to specify.")
    })?;
    let input_label = cli.input_label();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&input_label, &target, &cli.top_k.to_string());

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let df = match &cli.input {
        Some(path) => load_dataset(path, cli.infer_schema_length)?,
        None => iris()?,
    };
    let (rows, cols) = df.shape();
    print_dataset_stats(rows, cols, estimated_size_mb(&df));

    let (features, labels) = extract_features(&df, &target, &cli.drop_columns)?;
    print_success(&format!(
        "{} feature(s), {} class(es)",
        features.n_features(),
        labels.n_classes()
    ));

    // Step 2: Chi-squared scores
    print_step_header(2, "Chi-squared Scoring");
    let spinner = create_spinner("Computing chi-squared statistics...");
    let scores = chi2(&features, &labels)?;
    finish_with_success(&spinner, "Chi-squared scoring complete");

    // Step 3: Top-K selection
    print_step_header(3, "Top-K Selection");
    let selection = select_k_best(&features, &labels, cli.top_k)?;
    print_selected(&selection.selected_names());

    print_scores(&scores)?;

    if cli.summary {
        ScoreSummary::new(&selection, features.n_samples(), labels.n_classes()).display();
    }

    if let Some(path) = &cli.export {
        let params = ExportParams {
            input: &input_label,
            target_column: &target,
            top_k: cli.top_k,
            n_samples: features.n_samples(),
            classes: labels.classes(),
        };
        export_scores(path, &selection, &params)?;
        print_saved(path);
    } else {
        print_info("Use --export <file.json> to save scores");
    }

    Ok(())
}
