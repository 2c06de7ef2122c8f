//! PDF Page Sizes CLI tool
//!
//! Prints how many pages of each size the PDF files in a directory contain.

use std::process;

use pdf_page_sizes::cli;
use pdf_page_sizes::Scanner;

fn main() {
    let code = cli::run(std::env::args_os(), &Scanner::new());
    process::exit(code);
}
