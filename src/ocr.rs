//! Optical character recognition for scanned résumés

use crate::error::{Error, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// Recognize the text in one rendered page image (PNG bytes)
pub trait OcrEngine {
    fn recognize(&self, png: &[u8]) -> Result<String>;
}

/// OCR through the `tesseract` command-line engine
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: PathBuf,
    language: String,
}

impl TesseractOcr {
    pub fn new(binary: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }

    /// Whether the configured binary can be executed
    pub fn is_available(&self) -> bool {
        let available = Command::new(&self.binary)
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false);

        if !available {
            tracing::debug!(
                binary = %self.binary.display(),
                "tesseract not found - install tesseract-ocr for OCR support"
            );
        }
        available
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new("tesseract", "eng")
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, png: &[u8]) -> Result<String> {
        let mut image = tempfile::Builder::new()
            .prefix("resume-page-")
            .suffix(".png")
            .tempfile()?;
        image.write_all(png)?;
        image.flush()?;

        let output = Command::new(&self.binary)
            .arg(image.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|e| Error::Ocr {
                reason: format!("Failed to run {}: {}", self.binary.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Ocr {
                reason: format!("tesseract failed ({}): {}", output.status, stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
