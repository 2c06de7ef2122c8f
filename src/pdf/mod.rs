//! PDF decoding and per-file analysis

pub mod analyze;
pub mod decoder;

// Re-export commonly used items
pub use analyze::{analyze_file, analyze_pages, tally_pages};
pub use decoder::{normalize_rotation, LopdfDecoder, LopdfDocument, PageSource, PdfDecoder};
