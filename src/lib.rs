//! PDF Page Sizes Library
//!
//! Scans a directory for PDF files and tallies how many pages of each size
//! (in inches, with rotation) they contain. This library provides:
//! - Page size formatting (`8.5 x 11.0 in rot: 0`)
//! - Per-file page size analysis on top of `lopdf`
//! - Tally merging across files
//! - A non-recursive directory scanner with a plain-text report
//!
//! # Example
//!
//! ```no_run
//! use pdf_page_sizes::{Config, Scanner};
//!
//! let config = Config::for_dir("handouts");
//! let overall = Scanner::new()
//!     .scan(&config, &mut std::io::stdout())
//!     .expect("Failed to scan directory");
//!
//! println!("{} pages in {} sizes", overall.total_pages(), overall.len());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pdf;
pub mod report;
pub mod scan;
pub mod size;
pub mod tally;

// Re-export commonly used items
pub use config::{Config, DecodeErrorPolicy};
pub use error::{Error, Result};
pub use scan::{is_pdf_file_name, DirectoryLister, FsLister, ScanSummary, Scanner};
pub use size::{format_size, points_to_inches, PageSize, POINTS_PER_INCH};
pub use tally::SizeTally;
