//! Résumé Extractor - Entry point

use clap::Parser;
use resume_extractor::{run_with_config, ExtractorConfig, FailurePolicy, Strategy};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Extract résumé fields from PDF files into JSON
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directory containing the PDF files [default: data]
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory receiving one JSON file per PDF [default: output]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Extraction strategy [default: pattern]
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Failure handling (defaults: abort for keyword, continue for pattern)
    #[arg(long, value_enum)]
    on_error: Option<FailurePolicy>,

    /// Only process files whose name matches this glob
    #[arg(long)]
    pattern: Option<String>,

    /// Tesseract language code for scanned documents [default: eng]
    #[arg(long)]
    ocr_lang: Option<String>,

    /// Rendering resolution for OCR [default: 200]
    #[arg(long)]
    ocr_dpi: Option<u32>,

    /// Path to the tesseract binary [default: tesseract]
    #[arg(long)]
    tesseract: Option<PathBuf>,

    /// Question-answering inference endpoint
    #[arg(long, env = "RESUME_QA_ENDPOINT")]
    qa_endpoint: Option<String>,

    /// Bearer token for the question-answering endpoint
    #[arg(long, env = "RESUME_QA_TOKEN", hide_env_values = true)]
    qa_token: Option<String>,
}

impl From<Cli> for ExtractorConfig {
    fn from(cli: Cli) -> Self {
        let defaults = ExtractorConfig::default();
        Self {
            input_dir: cli.input.unwrap_or(defaults.input_dir),
            output_dir: cli.output.unwrap_or(defaults.output_dir),
            strategy: cli.strategy.unwrap_or(defaults.strategy),
            on_error: cli.on_error.or(defaults.on_error),
            file_pattern: cli.pattern.or(defaults.file_pattern),
            ocr_language: cli.ocr_lang.unwrap_or(defaults.ocr_language),
            ocr_dpi: cli.ocr_dpi.unwrap_or(defaults.ocr_dpi),
            tesseract_path: cli.tesseract.unwrap_or(defaults.tesseract_path),
            qa_endpoint: cli.qa_endpoint.unwrap_or(defaults.qa_endpoint),
            qa_api_token: cli.qa_token.or(defaults.qa_api_token),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_extractor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ExtractorConfig::from(Cli::parse());
    tracing::info!(
        strategy = ?config.strategy,
        input = %config.input_dir.display(),
        "starting résumé extraction"
    );

    let report = run_with_config(&config)?;
    for failed in &report.failed {
        tracing::warn!(file = %failed.source.display(), error = %failed.error, "not extracted");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_flags_take_config_defaults() {
        let cli = Cli::try_parse_from(["resume-extractor"]).unwrap();
        let config = ExtractorConfig::from(cli);
        let defaults = ExtractorConfig::default();

        assert_eq!(config.input_dir, defaults.input_dir);
        assert_eq!(config.output_dir, defaults.output_dir);
        assert_eq!(config.strategy, defaults.strategy);
        assert_eq!(config.ocr_language, defaults.ocr_language);
        assert_eq!(config.ocr_dpi, defaults.ocr_dpi);
        assert_eq!(config.tesseract_path, defaults.tesseract_path);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "resume-extractor",
            "--input",
            "cvs",
            "--strategy",
            "keyword",
            "--ocr-lang",
            "spa",
            "--ocr-dpi",
            "300",
        ])
        .unwrap();
        let config = ExtractorConfig::from(cli);

        assert_eq!(config.input_dir, PathBuf::from("cvs"));
        assert_eq!(config.strategy, Strategy::Keyword);
        assert_eq!(config.ocr_language, "spa");
        assert_eq!(config.ocr_dpi, 300);
        assert_eq!(config.output_dir, ExtractorConfig::default().output_dir);
    }
}
