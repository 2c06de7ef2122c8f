//! Run configuration

use std::path::PathBuf;

/// What to do when a file in the directory cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeErrorPolicy {
    /// Stop the scan and report the error
    #[default]
    Abort,
    /// Log a warning, leave the file out of the totals, keep going
    Skip,
}

/// Settings for one scan, built once and passed by reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory to analyze (subdirectories are not visited)
    pub dir: PathBuf,
    pub on_decode_error: DecodeErrorPolicy,
    /// Print every page's size under each file's block
    pub list_pages: bool,
    /// Number of `-v` flags given
    pub verbosity: u8,
}

impl Config {
    pub fn for_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Default log filter directive for this verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            on_decode_error: DecodeErrorPolicy::Abort,
            list_pages: false,
            verbosity: 0,
        }
    }
}
