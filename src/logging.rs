// src/logging.rs

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Quiet by default; `RUST_LOG=flag_scrape=debug` surfaces per-request and
/// per-file lines. Operator-facing output goes through `progress::Progress`,
/// not tracing.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
