//! Log output setup

use tracing_subscriber::EnvFilter;

/// Install a compact stderr subscriber
///
/// `RUST_LOG` takes precedence over `level`. Later calls are no-ops, so this
/// is safe to reach more than once (tests drive the CLI repeatedly).
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pdf_page_sizes={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
