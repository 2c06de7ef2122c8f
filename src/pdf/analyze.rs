//! Per-file page size analysis

use std::path::Path;
use tracing::debug;
use crate::error::{Error, Result};
use crate::pdf::decoder::{PageSource, PdfDecoder};
use crate::size::PageSize;
use crate::tally::SizeTally;

/// Read every page size of the PDF at `path`, in page order
///
/// Any failure, including a single malformed page, fails the whole file.
pub fn analyze_pages<D: PdfDecoder>(decoder: &D, path: &Path) -> Result<Vec<PageSize>> {
    let document = decoder.open(path)?;
    let page_count = document.page_count();
    debug!(path = %path.display(), page_count, "analyzing file");

    (1..=page_count)
        .map(|index| document.page_size(index).map_err(|e| as_decode_error(path, e)))
        .collect()
}

/// Tally the page sizes of the PDF at `path`
pub fn analyze_file<D: PdfDecoder>(decoder: &D, path: &Path) -> Result<SizeTally> {
    let sizes = analyze_pages(decoder, path)?;
    Ok(tally_pages(&sizes))
}

/// Count pages by their formatted size
pub fn tally_pages(sizes: &[PageSize]) -> SizeTally {
    sizes.iter().map(PageSize::key).collect()
}

// Page-level failures are reported against the file they came from.
fn as_decode_error(path: &Path, err: Error) -> Error {
    if err.is_decode() {
        err
    } else {
        Error::decode(path, err)
    }
}
