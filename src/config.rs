// src/config.rs

use std::path::PathBuf;
use std::time::Duration;

// Source page
pub const PAGE_URL: &str =
    "https://cs.wikipedia.org/wiki/Seznam_vlajek_st%C3%A1t%C5%AF_sv%C4%9Bta";
pub const WIKI_BASE: &str = "https://cs.wikipedia.org";
pub const TABLE_MARKER: &str = "wikitable";

// Output
pub const OUT_DIR: &str = "flags";
pub const MANIFEST_FILE: &str = "flags.csv";

// Net
pub const USER_AGENT: &str = "flag_scrape/0.3";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Everything a run needs, resolved up front and passed into the runner.
/// The binary builds this from the constants above; tests point `out_dir`
/// somewhere disposable.
#[derive(Clone, Debug)]
pub struct Config {
    pub page_url: String,
    pub wiki_base: String,
    pub table_marker: String,
    pub out_dir: PathBuf,
    pub manifest_file: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn new() -> Self {
        Self {
            page_url: PAGE_URL.into(),
            wiki_base: WIKI_BASE.into(),
            table_marker: TABLE_MARKER.into(),
            out_dir: PathBuf::from(OUT_DIR),
            manifest_file: MANIFEST_FILE.into(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
