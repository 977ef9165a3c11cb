//! PDFium-backed page text extraction and rasterization

use crate::error::{Error, Result};
use crate::source::resolve_path;
use pdfium_render::prelude::*;
use std::path::Path;

/// Line tolerance and word gap when no glyph reports a height
const FALLBACK_THRESHOLDS: (f32, f32) = (5.0, 10.0);

/// Page-level access to a PDF file
pub trait PdfBackend {
    /// Text of every page in page order; pages without a text layer yield `""`
    fn page_texts(&self, path: &Path) -> Result<Vec<String>>;

    /// Every page rendered to PNG at `dpi`, in page order
    fn render_pages(&self, path: &Path, dpi: u32) -> Result<Vec<Vec<u8>>>;
}

/// Bind PDFium (a fresh binding per call; PDFium is not thread-safe)
fn create_pdfium() -> Result<Pdfium> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

fn map_pdfium_error(err: PdfiumError) -> Error {
    match err {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
            Error::InvalidPdf {
                reason: "PDF is password protected".to_string(),
            }
        }
        _ => Error::Pdfium {
            reason: format!("{}", err),
        },
    }
}

/// [`PdfBackend`] over the PDFium library
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfiumBackend;

impl PdfBackend for PdfiumBackend {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>> {
        let resolved = resolve_path(path)?;
        let pdfium = create_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(&resolved.data, None)
            .map_err(map_pdfium_error)?;

        let texts: Vec<String> = document
            .pages()
            .iter()
            .map(|page| page_text(&page))
            .collect();

        tracing::debug!(source = %resolved.source_name, pages = texts.len(), "extracted page text");
        Ok(texts)
    }

    fn render_pages(&self, path: &Path, dpi: u32) -> Result<Vec<Vec<u8>>> {
        let resolved = resolve_path(path)?;
        let pdfium = create_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(&resolved.data, None)
            .map_err(map_pdfium_error)?;

        let config = PdfRenderConfig::new()
            .scale_page_by_factor(dpi as f32 / 72.0)
            .render_form_data(true)
            .render_annotations(true);

        let mut rendered = Vec::new();
        for (index, page) in document.pages().iter().enumerate() {
            let page_num = index + 1;
            let bitmap = page.render_with_config(&config).map_err(|e| Error::Pdfium {
                reason: format!("Failed to render page {}: {}", page_num, e),
            })?;

            let mut png = Vec::new();
            bitmap
                .as_image()
                .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
                .map_err(|e| Error::Pdfium {
                    reason: format!("Failed to encode page {} as PNG: {}", page_num, e),
                })?;

            rendered.push(png);
        }

        tracing::debug!(path = %path.display(), pages = rendered.len(), dpi, "rendered pages");
        Ok(rendered)
    }
}

#[derive(Debug, Clone, Copy)]
struct Glyph {
    ch: char,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Glyph {
    fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Text of one page in reading order, or `""` when it has no text layer
fn page_text(page: &PdfPage) -> String {
    let Ok(text) = page.text() else {
        return String::new();
    };

    let mut glyphs = Vec::new();
    for segment in text.segments().iter() {
        let Ok(chars) = segment.chars() else {
            continue;
        };
        for c in chars.iter() {
            if let (Some(ch), Ok(bounds)) = (c.unicode_char(), c.loose_bounds()) {
                glyphs.push(Glyph {
                    ch,
                    x: bounds.left().value,
                    y: bounds.top().value,
                    width: bounds.width().value,
                    height: bounds.height().value,
                });
            }
        }
    }

    layout_text(glyphs)
}

/// Line tolerance and word gap scaled to the median glyph height
fn layout_thresholds(glyphs: &[Glyph]) -> (f32, f32) {
    let mut heights: Vec<f32> = glyphs
        .iter()
        .map(|g| g.height)
        .filter(|h| *h > 0.0)
        .collect();
    if heights.is_empty() {
        return FALLBACK_THRESHOLDS;
    }

    heights.sort_by(|a, b| a.total_cmp(b));
    let median = heights[heights.len() / 2];
    ((median * 0.4).max(2.0), (median * 0.3).max(3.0))
}

/// Arrange glyphs into lines: top to bottom, then left to right.
///
/// PDF y grows upwards. Glyphs whose tops are close to the first glyph of a
/// line share that line. A space is inserted where the gap between one
/// glyph's right edge and the next glyph's left edge exceeds the word gap.
fn layout_text(mut glyphs: Vec<Glyph>) -> String {
    let (line_tolerance, word_gap) = layout_thresholds(&glyphs);
    glyphs.sort_by(|a, b| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)));

    let mut lines: Vec<Vec<Glyph>> = Vec::new();
    let mut line_y: Option<f32> = None;
    for glyph in glyphs {
        let same_line = line_y.is_some_and(|y| (y - glyph.y).abs() <= line_tolerance);
        if same_line {
            if let Some(line) = lines.last_mut() {
                line.push(glyph);
                continue;
            }
        }
        lines.push(vec![glyph]);
        line_y = Some(glyph.y);
    }

    let mut out = String::new();
    for mut line in lines {
        line.sort_by(|a, b| a.x.total_cmp(&b.x));

        let mut prev: Option<Glyph> = None;
        for glyph in line {
            let gap = prev.is_some_and(|p| glyph.x - p.right() > word_gap && p.ch != ' ');
            if gap && glyph.ch != ' ' {
                out.push(' ');
            }
            out.push(glyph.ch);
            prev = Some(glyph);
        }
        out.push('\n');
    }

    out.trim_end().to_string()
}
