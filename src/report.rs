//! Plain-text report output

use std::io::{self, Write};
use crate::size::PageSize;
use crate::tally::SizeTally;

/// Write one result block: a header naming `name`, then one line per size
pub fn write_tally<W: Write>(out: &mut W, name: &str, tally: &SizeTally) -> io::Result<()> {
    writeln!(out, "**** Results for {}", name)?;
    for (key, count) in tally.iter() {
        writeln!(out, "\t{}\t{}", key, count)?;
    }
    Ok(())
}

/// Write the size of every page, numbered from 1
pub fn write_pages<W: Write>(out: &mut W, sizes: &[PageSize]) -> io::Result<()> {
    for (i, size) in sizes.iter().enumerate() {
        writeln!(out, "\tpage {}: {}", i + 1, size)?;
    }
    Ok(())
}
