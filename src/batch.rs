//! Directory batch processing
//!
//! Files are handled one at a time in sorted order. Each PDF yields one JSON
//! file; a file that fails yields none.

use crate::config::{ExtractorConfig, FailurePolicy, Strategy};
use crate::error::{Error, Result};
use crate::extract::{KeywordExtractor, PatternExtractor, ResumeExtractor};
use crate::ocr::TesseractOcr;
use crate::output::{output_path, write_record};
use crate::pdf::PdfiumBackend;
use crate::qa::HttpQuestionAnswerer;
use crate::source::list_pdfs;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Where a batch reads from and writes to
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub pattern: Option<glob::Pattern>,
    pub policy: FailurePolicy,
}

impl BatchOptions {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            pattern: None,
            policy: FailurePolicy::Continue,
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_pattern(mut self, pattern: Option<glob::Pattern>) -> Self {
        self.pattern = pattern;
        self
    }
}

/// A file the batch skipped because of an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub source: PathBuf,
    pub error: String,
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// JSON files written, in processing order
    pub written: Vec<PathBuf>,
    pub failed: Vec<FailedFile>,
}

impl BatchReport {
    pub fn processed_count(&self) -> usize {
        self.written.len() + self.failed.len()
    }
}

fn process_file<E: ResumeExtractor + ?Sized>(
    extractor: &E,
    pdf: &Path,
    json_path: &Path,
) -> Result<()> {
    let record = extractor.extract(pdf)?;
    write_record(&record, json_path)
}

/// Run `extractor` over every PDF in the input directory.
///
/// The output directory is created first, so an input directory without PDFs
/// still leaves an (empty) output directory behind. A PDF whose JSON name was
/// already produced by an earlier file in the batch (`cv.PDF` then `cv.pdf`)
/// fails with [`Error::DuplicateOutput`] instead of overwriting it.
pub fn run_batch<E: ResumeExtractor + ?Sized>(
    extractor: &E,
    options: &BatchOptions,
) -> Result<BatchReport> {
    std::fs::create_dir_all(&options.output_dir).map_err(|e| Error::InvalidDirectory {
        path: options.output_dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let pdfs = list_pdfs(&options.input_dir, options.pattern.as_ref())?;
    tracing::info!(
        input = %options.input_dir.display(),
        files = pdfs.len(),
        "starting batch"
    );

    let mut report = BatchReport::default();
    let mut claimed: HashSet<PathBuf> = HashSet::new();
    for pdf in pdfs {
        tracing::info!(file = %pdf.display(), "processing");

        let json_path = output_path(&options.output_dir, &pdf);
        let outcome = if claimed.insert(json_path.clone()) {
            process_file(extractor, &pdf, &json_path)
        } else {
            Err(Error::DuplicateOutput {
                path: json_path.display().to_string(),
            })
        };

        match outcome {
            Ok(()) => {
                tracing::info!(output = %json_path.display(), "saved");
                report.written.push(json_path);
            }
            Err(e) => match options.policy {
                FailurePolicy::Abort => {
                    tracing::error!(file = %pdf.display(), error = %e, "aborting batch");
                    return Err(e);
                }
                FailurePolicy::Continue => {
                    tracing::warn!(
                        file = %pdf.display(),
                        error = %e,
                        collaborator = e.is_collaborator_failure(),
                        "failed to process file"
                    );
                    report.failed.push(FailedFile {
                        source: pdf,
                        error: e.to_string(),
                    });
                }
            },
        }
    }

    tracing::info!(
        written = report.written.len(),
        failed = report.failed.len(),
        "batch finished"
    );
    Ok(report)
}

/// Build the configured strategy with its production collaborators and run it
pub fn run_with_config(config: &ExtractorConfig) -> Result<BatchReport> {
    let options = BatchOptions::new(&config.input_dir, &config.output_dir)
        .with_policy(config.failure_policy())
        .with_pattern(config.file_glob()?);

    match config.strategy {
        Strategy::Keyword => run_batch(&KeywordExtractor::new(PdfiumBackend), &options),
        Strategy::Pattern => {
            let ocr = TesseractOcr::new(&config.tesseract_path, &config.ocr_language);
            if !ocr.is_available() {
                tracing::warn!("tesseract unavailable; scanned PDFs will fail");
            }
            let answerer =
                HttpQuestionAnswerer::new(&config.qa_endpoint, config.qa_api_token.clone())?;
            let extractor =
                PatternExtractor::new(PdfiumBackend, ocr, answerer).with_ocr_dpi(config.ocr_dpi);
            run_batch(&extractor, &options)
        }
    }
}
