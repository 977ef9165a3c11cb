//! Run configuration

use crate::error::{Error, Result};
use crate::extract::DEFAULT_OCR_DPI;
use crate::qa::DEFAULT_QA_ENDPOINT;
use std::path::PathBuf;

/// Extraction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
    /// Fixed headings delimit sections
    Keyword,
    /// Labelled lines, question answering and OCR fallback
    #[default]
    Pattern,
}

/// What a batch does when one file fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FailurePolicy {
    /// Stop the batch and return the error
    Abort,
    /// Log the error, record it in the report and move on
    Continue,
}

impl Strategy {
    pub fn default_failure_policy(self) -> FailurePolicy {
        match self {
            Strategy::Keyword => FailurePolicy::Abort,
            Strategy::Pattern => FailurePolicy::Continue,
        }
    }
}

/// Configuration of one extraction run
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Directory scanned for PDF files
    pub input_dir: PathBuf,
    /// Directory receiving one JSON file per PDF (created if missing)
    pub output_dir: PathBuf,
    pub strategy: Strategy,
    /// Overrides the strategy's default failure policy
    pub on_error: Option<FailurePolicy>,
    /// Glob applied to input file names (e.g. "cv_*.pdf")
    pub file_pattern: Option<String>,
    /// Tesseract language code
    pub ocr_language: String,
    /// Rasterization resolution for OCR
    pub ocr_dpi: u32,
    pub tesseract_path: PathBuf,
    /// Question-answering inference endpoint
    pub qa_endpoint: String,
    /// Bearer token for the question-answering endpoint
    pub qa_api_token: Option<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            strategy: Strategy::default(),
            on_error: None,
            file_pattern: None,
            ocr_language: "eng".to_string(),
            ocr_dpi: DEFAULT_OCR_DPI,
            tesseract_path: PathBuf::from("tesseract"),
            qa_endpoint: DEFAULT_QA_ENDPOINT.to_string(),
            qa_api_token: None,
        }
    }
}

impl ExtractorConfig {
    pub fn failure_policy(&self) -> FailurePolicy {
        self.on_error
            .unwrap_or_else(|| self.strategy.default_failure_policy())
    }

    /// Compiled file-name filter, `None` when no pattern is configured
    pub fn file_glob(&self) -> Result<Option<glob::Pattern>> {
        let Some(pattern) = self.file_pattern.as_deref() else {
            return Ok(None);
        };
        glob::Pattern::new(pattern)
            .map(Some)
            .map_err(|e| Error::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }
}
