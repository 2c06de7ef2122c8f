//! Directory scanning
//!
//! Lists the PDF files directly inside a directory, analyzes each one, prints
//! its page size tally and folds it into a tally for the whole directory.

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use crate::config::{Config, DecodeErrorPolicy};
use crate::error::{Error, Result};
use crate::pdf::{analyze_pages, tally_pages, LopdfDecoder, PdfDecoder};
use crate::report::{write_pages, write_tally};
use crate::tally::SizeTally;

/// PDF files extension
pub const PDF_EXTENSION: &str = ".pdf";

/// True when `name` ends in `.pdf`, ignoring case
pub fn is_pdf_file_name(name: &str) -> bool {
    name.to_lowercase().ends_with(PDF_EXTENSION)
}

/// Lists the files directly inside a directory
pub trait DirectoryLister {
    /// Paths of the files in `dir` whose names satisfy `filter`
    fn list(&self, dir: &Path, filter: fn(&str) -> bool) -> Result<Vec<PathBuf>>;
}

/// [`DirectoryLister`] over the real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path, filter: fn(&str) -> bool) -> Result<Vec<PathBuf>> {
        let access_error = |source: std::io::Error| Error::DirectoryAccess {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(access_error)? {
            let entry = entry.map_err(access_error)?;
            let path = entry.path();
            if filter(&entry.file_name().to_string_lossy()) && path.is_file() {
                paths.push(path);
            }
        }
        Ok(paths)
    }
}

/// Outcome of a directory scan
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSummary {
    /// Page sizes across every analyzed file
    pub overall: SizeTally,
    pub files_analyzed: usize,
    /// Files left out under [`DecodeErrorPolicy::Skip`], with the reason
    pub skipped: Vec<(PathBuf, String)>,
}

/// Scans directories for PDF files and reports their page sizes
#[derive(Debug, Clone, Default)]
pub struct Scanner<D = LopdfDecoder, L = FsLister> {
    decoder: D,
    lister: L,
}

impl Scanner {
    /// Scanner over real PDF files on disk
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: PdfDecoder, L: DirectoryLister> Scanner<D, L> {
    pub fn with_parts(decoder: D, lister: L) -> Self {
        Self { decoder, lister }
    }

    /// Scan `config.dir`, writing the report to `out`, and return the overall tally
    pub fn scan<W: Write>(&self, config: &Config, out: &mut W) -> Result<SizeTally> {
        self.scan_with_summary(config, out).map(|summary| summary.overall)
    }

    /// Like [`Scanner::scan`], also reporting which files were analyzed or skipped
    pub fn scan_with_summary<W: Write>(&self, config: &Config, out: &mut W) -> Result<ScanSummary> {
        let dir = config.dir.as_path();
        let mut files = self.lister.list(dir, is_pdf_file_name)?;
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!(dir = %dir.display(), count = files.len(), "found PDF files");

        let mut summary = ScanSummary::default();
        for file in &files {
            let sizes = match analyze_pages(&self.decoder, file) {
                Ok(sizes) => sizes,
                Err(e) if e.is_decode() && config.on_decode_error == DecodeErrorPolicy::Skip => {
                    warn!(file = %file.display(), error = %e, "skipping file");
                    summary.skipped.push((file.clone(), e.to_string()));
                    continue;
                }
                Err(e) => return Err(e),
            };

            let tally = tally_pages(&sizes);
            write_tally(out, &display_name(file), &tally)?;
            if config.list_pages {
                write_pages(out, &sizes)?;
            }

            summary.overall.merge(&tally);
            summary.files_analyzed += 1;
        }

        write_tally(out, &display_name(dir), &summary.overall)?;
        info!(
            dir = %dir.display(),
            files = summary.files_analyzed,
            skipped = summary.skipped.len(),
            pages = summary.overall.total_pages(),
            "scan complete"
        );

        Ok(summary)
    }
}

/// Last path component, or the whole path when it has none (`.`, `/`)
fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
