// src/store.rs

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::ScrapeError;
use crate::materialize::FinalEntry;

pub const MANIFEST_HEADER: [&str; 2] = ["State", "Filename"];

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write the manifest fresh (no append semantics): a `State,Filename` header,
/// then one row per final entry in processing order.
pub fn write_manifest(path: &Path, entries: &[FinalEntry]) -> Result<(), ScrapeError> {
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);

    write_row(&mut out, &MANIFEST_HEADER)?;
    for entry in entries {
        write_row(&mut out, &[entry.state_name.as_str(), entry.filename.as_str()])?;
    }

    out.flush()?;
    Ok(())
}

/* ---------------- CSV writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer, quoting fields that need it.
fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}
