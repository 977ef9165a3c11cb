//! Resolution of input PDF files

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// PDF bytes read from disk
pub struct ResolvedPdf {
    pub data: Vec<u8>,
    pub source_name: String,
}

/// Read a file and check it carries a PDF header
pub fn resolve_path<P: AsRef<Path>>(path: P) -> Result<ResolvedPdf> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::PdfNotFound {
            path: path.display().to_string(),
        });
    }

    let data = std::fs::read(path).map_err(Error::Io)?;

    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::InvalidPdf {
            reason: format!("{} is not a valid PDF file", path.display()),
        });
    }

    Ok(ResolvedPdf {
        data,
        source_name: path.display().to_string(),
    })
}

/// PDF files directly inside `dir`, sorted by path.
///
/// Subdirectories and files without a `.pdf` extension (any case) are
/// skipped. When `pattern` is given, only file names matching the glob are
/// kept.
pub fn list_pdfs(dir: &Path, pattern: Option<&glob::Pattern>) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::InvalidDirectory {
            path: dir.display().to_string(),
            reason: "not a directory".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = match entry {
            Ok(e) => e.path(),
            Err(_) => continue,
        };

        if !path.is_file() {
            continue;
        }

        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            continue;
        }

        if let Some(pat) = pattern {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if !pat.matches(&name) {
                continue;
            }
        }

        files.push(path);
    }

    files.sort();
    Ok(files)
}
