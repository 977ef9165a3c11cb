//! Résumé Extractor Library
//!
//! Reads every PDF in a directory and writes one JSON record per file using
//! one of two strategies:
//! - `keyword`: sections delimited by fixed headings
//! - `pattern`: labelled fields, question answering, OCR for scanned files

pub mod batch;
pub mod config;
pub mod error;
pub mod extract;
pub mod ocr;
pub mod output;
pub mod pdf;
pub mod qa;
pub mod record;
pub mod source;

pub use batch::{run_batch, run_with_config, BatchOptions, BatchReport, FailedFile};
pub use config::{ExtractorConfig, FailurePolicy, Strategy};
pub use error::{Error, Result};
pub use extract::{KeywordExtractor, PatternExtractor, ResumeExtractor};
pub use record::{KeywordContact, KeywordResume, PatternContact, PatternResume};
