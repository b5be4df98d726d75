// src/runner.rs

use std::path::PathBuf;

use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::core::html::Document;
use crate::core::net::{Client, Fetch};
use crate::error::ScrapeError;
use crate::materialize::{FinalEntry, Materializer};
use crate::progress::Progress;
use crate::specs::flags;
use crate::store;

/// Summary of what a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub entries: Vec<FinalEntry>,
    pub manifest_path: PathBuf,
    pub failed: usize,
}

/// Top-level entry point: build the HTTP client and run against the live
/// site.
pub fn run(config: &Config, progress: Option<&mut dyn Progress>) -> Result<RunSummary, ScrapeError> {
    let client = Client::new(config.request_timeout)?;
    run_with(config, &client, progress)
}

/// Same as [`run`] with the transport supplied by the caller.
///
/// Fatal conditions (page unreachable, marker table missing) abort the run.
/// Everything per-row is reported through `progress` and dropped; files
/// already written stay on disk.
pub fn run_with(
    config: &Config,
    fetch: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    // Explicit first step of the run, not an import-time side effect.
    store::ensure_directory(&config.out_dir)?;

    let base = Url::parse(&config.wiki_base)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {}", config.page_url));
    }
    let body = fetch.get_text(&config.page_url)?;

    let doc = Document::parse(&body);
    let table = doc
        .marker_table(&config.table_marker)
        .ok_or_else(|| ScrapeError::MissingTable(config.table_marker.clone()))?;

    let raw = flags::extract(&table, &base);
    debug!("extracted {} rows from the flag table", raw.len());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(raw.len());
    }

    let materializer = Materializer::new(fetch, &config.out_dir);
    let mut entries = Vec::with_capacity(raw.len());
    let mut failed = 0usize;

    for entry in &raw {
        match materializer.materialize(entry) {
            Ok(done) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&done.state_name, &done.filename);
                }
                entries.push(done);
            }
            Err(e) => {
                // Recoverable: report, drop the row, keep going.
                failed += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&entry.image_url, &e.to_string());
                }
            }
        }
    }

    let manifest_path = config.out_dir.join(&config.manifest_file);
    store::write_manifest(&manifest_path, &entries)?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish(&manifest_path);
    }

    Ok(RunSummary {
        entries,
        manifest_path,
        failed,
    })
}
