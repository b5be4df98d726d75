// src/main.rs
// Console frontend. No flags: the source page, output directory and manifest
// name are build-time constants (see src/config.rs).

use std::path::Path;

use flag_scrape::config::Config;
use flag_scrape::logging;
use flag_scrape::progress::Progress;
use flag_scrape::runner;

struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        println!("Found flag table with {} usable row(s).", total);
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, _state: &str, filename: &str) {
        println!("Saved: {filename}");
    }

    fn item_failed(&mut self, image_url: &str, err: &str) {
        eprintln!("Failed to download {image_url}: {err}");
    }

    fn finish(&mut self, manifest: &Path) {
        println!("\nCSV mapping saved to: {}", manifest.display());
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();

    let config = Config::new();
    let mut progress = ConsoleProgress;
    let summary = runner::run(&config, Some(&mut progress))?;

    if summary.failed > 0 {
        eprintln!(
            "{} download(s) failed; their rows were dropped from the manifest.",
            summary.failed
        );
    }
    Ok(())
}
