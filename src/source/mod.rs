//! Input file resolution

pub mod resolver;

pub use resolver::{list_pdfs, resolve_path, ResolvedPdf};
