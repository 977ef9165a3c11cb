//! PDF processing layer
//!
//! Page text and page images come from PDFium. [`load_text`] and
//! [`load_text_with_ocr_fallback`] turn them into the working text of a
//! document.

mod reader;

pub use reader::{PdfBackend, PdfiumBackend};

use crate::error::Result;
use crate::ocr::OcrEngine;
use std::path::Path;

/// Direct text of a document: non-empty page texts joined by newlines
pub fn load_text<B: PdfBackend + ?Sized>(backend: &B, path: &Path) -> Result<String> {
    let pages = backend.page_texts(path)?;
    let text = pages
        .into_iter()
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(text)
}

/// Working text of a document, falling back to OCR for scanned files.
///
/// Each non-empty page contributes its text plus a trailing newline. When the
/// result is blank, every page is rendered at `dpi` and recognized, and the
/// recognized texts are concatenated in page order as they come back.
pub fn load_text_with_ocr_fallback<B, O>(
    backend: &B,
    ocr: &O,
    path: &Path,
    dpi: u32,
) -> Result<String>
where
    B: PdfBackend + ?Sized,
    O: OcrEngine + ?Sized,
{
    let mut text = String::new();
    for page in backend.page_texts(path)? {
        if !page.is_empty() {
            text.push_str(&page);
            text.push('\n');
        }
    }

    if !text.trim().is_empty() {
        return Ok(text);
    }

    tracing::info!(path = %path.display(), "no selectable text, using OCR");

    let mut recognized = String::new();
    for image in backend.render_pages(path, dpi)? {
        recognized.push_str(&ocr.recognize(&image)?);
    }
    Ok(recognized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;

    struct FakePdf {
        pages: Vec<&'static str>,
        rendered: Cell<usize>,
    }

    impl FakePdf {
        fn new(pages: Vec<&'static str>) -> Self {
            Self {
                pages,
                rendered: Cell::new(0),
            }
        }
    }

    impl PdfBackend for FakePdf {
        fn page_texts(&self, _path: &Path) -> Result<Vec<String>> {
            Ok(self.pages.iter().map(|p| p.to_string()).collect())
        }

        fn render_pages(&self, _path: &Path, _dpi: u32) -> Result<Vec<Vec<u8>>> {
            self.rendered.set(self.rendered.get() + 1);
            Ok((0..self.pages.len()).map(|i| vec![i as u8]).collect())
        }
    }

    /// "Recognizes" an image as the page number stored in its first byte
    struct PageNumberOcr;

    impl OcrEngine for PageNumberOcr {
        fn recognize(&self, png: &[u8]) -> Result<String> {
            Ok(format!("page {}\n", png[0] + 1))
        }
    }

    struct BrokenOcr;

    impl OcrEngine for BrokenOcr {
        fn recognize(&self, _png: &[u8]) -> Result<String> {
            Err(Error::Ocr {
                reason: "engine crashed".to_string(),
            })
        }
    }

    #[test]
    fn test_load_text_joins_non_empty_pages() {
        let pdf = FakePdf::new(vec!["ANA\nDEV", "", "IDIOMAS"]);
        let text = load_text(&pdf, Path::new("cv.pdf")).unwrap();
        assert_eq!(text, "ANA\nDEV\nIDIOMAS");
    }

    #[test]
    fn test_direct_text_skips_ocr() {
        let pdf = FakePdf::new(vec!["ANA", "", "IDIOMAS"]);
        let text = load_text_with_ocr_fallback(&pdf, &BrokenOcr, Path::new("cv.pdf"), 200)
            .unwrap();
        assert_eq!(text, "ANA\nIDIOMAS\n");
        assert_eq!(pdf.rendered.get(), 0);
    }

    #[test]
    fn test_whitespace_only_text_uses_ocr_in_page_order() {
        let pdf = FakePdf::new(vec!["  ", "\n\t", ""]);
        let text = load_text_with_ocr_fallback(&pdf, &PageNumberOcr, Path::new("scan.pdf"), 300)
            .unwrap();
        assert_eq!(text, "page 1\npage 2\npage 3\n");
        assert_eq!(pdf.rendered.get(), 1);
    }

    #[test]
    fn test_ocr_failure_propagates() {
        let pdf = FakePdf::new(vec![""]);
        let result = load_text_with_ocr_fallback(&pdf, &BrokenOcr, Path::new("scan.pdf"), 200);
        assert!(matches!(result, Err(Error::Ocr { .. })));
    }
}
