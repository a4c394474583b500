//! Command-line argument parsing for inference-report
//!
//! Uses clap derive macros for type-safe argument parsing. All argument
//! structures are unit-testable.

use std::path::PathBuf;

use clap::Parser;

use crate::config;

/// inference-report: cross-platform inference throughput reports
///
/// Aggregates per-model E2E `result.json` files from the iOS and Android
/// benchmark suites into ranked SVG charts, a combined JSON snapshot, and a
/// markdown report, optionally splicing the report into a README.
#[derive(Parser, Debug, Clone)]
#[command(name = "inference-report")]
#[command(version)]
#[command(about = "Build cross-platform inference throughput reports", long_about = None)]
pub struct Args {
    /// Directory of per-model iOS results (`<dir>/<model>/result.json`)
    #[arg(long, default_value = "artifacts/e2e/ios")]
    pub ios_dir: PathBuf,

    /// Directory of per-model Android results
    #[arg(long, default_value = "artifacts/e2e/android")]
    pub android_dir: PathBuf,

    /// Reference audio fixture (mono PCM WAV)
    #[arg(long, default_value = "artifacts/benchmarks/long_en_eval.wav")]
    pub audio: PathBuf,

    /// Output directory for report artifacts
    #[arg(long, default_value = "artifacts/benchmarks")]
    pub out_dir: PathBuf,

    /// Document to splice the report section into
    #[arg(long, default_value = "README.md")]
    pub readme: PathBuf,

    /// Update the README between the benchmark markers
    #[arg(long)]
    pub update_readme: bool,

    /// Override the canonical iOS model order (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ios_models: Option<Vec<String>>,

    /// Override the canonical Android model order (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub android_models: Option<Vec<String>>,
}

impl Args {
    /// Canonical iOS model order for this run
    #[must_use]
    pub fn ios_model_list(&self) -> Vec<String> {
        self.ios_models
            .clone()
            .unwrap_or_else(|| config::to_owned_list(config::DEFAULT_IOS_MODELS))
    }

    /// Canonical Android model order for this run
    #[must_use]
    pub fn android_model_list(&self) -> Vec<String> {
        self.android_models
            .clone()
            .unwrap_or_else(|| config::to_owned_list(config::DEFAULT_ANDROID_MODELS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["inference-report"]).expect("parse");
        assert_eq!(args.ios_dir, PathBuf::from("artifacts/e2e/ios"));
        assert_eq!(args.android_dir, PathBuf::from("artifacts/e2e/android"));
        assert_eq!(
            args.audio,
            PathBuf::from("artifacts/benchmarks/long_en_eval.wav")
        );
        assert_eq!(args.out_dir, PathBuf::from("artifacts/benchmarks"));
        assert_eq!(args.readme, PathBuf::from("README.md"));
        assert!(!args.update_readme);
        assert_eq!(args.ios_model_list().len(), config::DEFAULT_IOS_MODELS.len());
    }

    #[test]
    fn test_model_list_override() {
        let args = Args::try_parse_from([
            "inference-report",
            "--ios-models",
            "whisper-tiny,moonshine-base",
        ])
        .expect("parse");
        assert_eq!(
            args.ios_model_list(),
            vec!["whisper-tiny".to_string(), "moonshine-base".to_string()]
        );
        // Android list stays on defaults
        assert_eq!(
            args.android_model_list().len(),
            config::DEFAULT_ANDROID_MODELS.len()
        );
    }

    #[test]
    fn test_update_readme_flag() {
        let args =
            Args::try_parse_from(["inference-report", "--update-readme"]).expect("parse");
        assert!(args.update_readme);
    }
}
