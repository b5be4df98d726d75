// src/materialize.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::net::Fetch;
use crate::core::sanitize;
use crate::error::ScrapeError;
use crate::specs::flags::RawEntry;

/// One manifest row: the untouched display name and the filename its image
/// was saved under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalEntry {
    pub state_name: String,
    pub filename: String,
}

/// Turns raw entries into saved files, one linear attempt per entry.
///
/// Transliteration is injected so tests can pin it to a deterministic stub;
/// production uses `deunicode`.
pub struct Materializer<'a> {
    fetch: &'a dyn Fetch,
    out_dir: &'a Path,
    translit: fn(&str) -> String,
}

impl<'a> Materializer<'a> {
    pub fn new(fetch: &'a dyn Fetch, out_dir: &'a Path) -> Self {
        Self {
            fetch,
            out_dir,
            translit: deunicode::deunicode,
        }
    }

    pub fn with_translit(
        fetch: &'a dyn Fetch,
        out_dir: &'a Path,
        translit: fn(&str) -> String,
    ) -> Self {
        Self {
            fetch,
            out_dir,
            translit,
        }
    }

    /// Fetch the image and write it under the derived filename, overwriting
    /// any previous file with the same name. Fails per-entry only; the caller
    /// decides to report and move on. No retry.
    pub fn materialize(&self, entry: &RawEntry) -> Result<FinalEntry, ScrapeError> {
        let filename =
            sanitize::derive_filename_with(&entry.state_name, &entry.image_url, self.translit);
        let bytes = self.fetch.get_bytes(&entry.image_url)?;
        let path = self.out_dir.join(&filename);
        fs::write(&path, &bytes)?;
        debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(FinalEntry {
            state_name: entry.state_name.clone(),
            filename,
        })
    }
}
