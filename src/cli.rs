//! Command-line front end
//!
//! Accepts the single-dash long options `-dir <path>` and `-help` alongside
//! the usual `--dir` and `--help` spellings.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use anyhow::Context;
use clap::{ArgAction, Parser};
use crate::config::{Config, DecodeErrorPolicy};
use crate::logging;
use crate::pdf::PdfDecoder;
use crate::scan::{DirectoryLister, Scanner};

/// Tally the page sizes of the PDF files in a directory
#[derive(Parser, Debug)]
#[command(name = "pdf-page-sizes")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Analyze the current directory
    pdf-page-sizes

    # Analyze another directory, listing every page
    pdf-page-sizes -dir ~/scans --pages

    # Keep going past files that are not valid PDFs
    pdf-page-sizes -dir ~/scans --skip-invalid")]
pub struct Cli {
    /// Directory to analyze (no subdirectories will be analyzed)
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Warn about files that cannot be decoded and continue instead of stopping
    #[arg(long)]
    pub skip_invalid: bool,

    /// Also print the size of every page
    #[arg(long)]
    pub pages: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            dir: cli.dir,
            on_decode_error: if cli.skip_invalid {
                DecodeErrorPolicy::Skip
            } else {
                DecodeErrorPolicy::Abort
            },
            list_pages: cli.pages,
            verbosity: cli.verbose,
        }
    }
}

/// Rewrite `-dir` and `-help` into the `--` forms clap understands
///
/// The value following `-dir`/`--dir` is passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut takes_value = false;

    for (i, arg) in args.into_iter().map(Into::into).enumerate() {
        if i == 0 || takes_value {
            takes_value = false;
            normalized.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("-dir") | Some("--dir") => {
                takes_value = true;
                OsString::from("--dir")
            }
            Some("-help") => OsString::from("--help"),
            Some(s) if s.starts_with("-dir=") => OsString::from(format!("-{}", s)),
            _ => arg,
        };
        normalized.push(rewritten);
    }

    normalized
}

/// Parse command-line arguments (program name first) into a [`Config`]
pub fn parse_config<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::try_parse_from(normalize_args(args)).map(Config::from)
}

/// Run the tool and return the process exit code
///
/// Help and version output exit with 0, argument errors with 2 (both before
/// any scanning), scan failures with 1.
pub fn run<I, T, D, L>(args: I, scanner: &Scanner<D, L>) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    D: PdfDecoder,
    L: DirectoryLister,
{
    let config = match parse_config(args) {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            return e.exit_code();
        }
    };

    logging::init(config.log_level());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = scanner
        .scan(&config, &mut out)
        .with_context(|| format!("Failed to analyze {}", config.dir.display()));

    match result {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
