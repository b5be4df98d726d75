// src/progress.rs

use std::path::Path;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to the operator.
pub trait Progress {
    /// Called once the table has been extracted, with the number of rows kept.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One flag image fetched and written.
    fn item_done(&mut self, _state: &str, _filename: &str) {}

    /// One flag image failed; its row is dropped from the manifest.
    fn item_failed(&mut self, _image_url: &str, _err: &str) {}

    /// Called at the end with the manifest location.
    fn finish(&mut self, _manifest: &Path) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
