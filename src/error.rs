//! Error types for the résumé extractor

use thiserror::Error;

/// Result type alias for the résumé extractor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the résumé extractor
#[derive(Error, Debug)]
pub enum Error {
    /// PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// Input or output directory is unusable
    #[error("Invalid directory {path}: {reason}")]
    InvalidDirectory { path: String, reason: String },

    /// File-name filter is not a valid glob
    #[error("Invalid file pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Two input files map to the same JSON file
    #[error("Output already written by another file in this batch: {path}")]
    DuplicateOutput { path: String },

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// OCR engine failure
    #[error("OCR failed: {reason}")]
    Ocr { reason: String },

    /// Question-answering service failure
    #[error("Question answering failed: {reason}")]
    QuestionAnswering { reason: String },

    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True for failures raised by an external collaborator (OCR, QA, HTTP),
    /// as opposed to problems with the input file itself.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            Error::Ocr { .. } | Error::QuestionAnswering { .. } | Error::HttpRequest(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PdfNotFound {
            path: "data/cv.pdf".to_string(),
        };
        assert_eq!(err.to_string(), "PDF not found: data/cv.pdf");

        let err = Error::Ocr {
            reason: "tesseract exited with status 1".to_string(),
        };
        assert_eq!(err.to_string(), "OCR failed: tesseract exited with status 1");
    }

    #[test]
    fn test_collaborator_failure_classification() {
        assert!(Error::QuestionAnswering {
            reason: "timeout".to_string()
        }
        .is_collaborator_failure());
        assert!(!Error::InvalidPdf {
            reason: "bad header".to_string()
        }
        .is_collaborator_failure());
    }
}
