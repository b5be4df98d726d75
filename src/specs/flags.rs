// src/specs/flags.rs
//! Spec for the flag table on the Czech Wikipedia page
//! "Seznam vlajek států světa".
//!
//! The page carries several `table.wikitable` blocks; the first one lists the
//! sovereign states, one row per country:
//!
//! ```text
//! <tr>
//!   <td><a ...><img src="//upload.wikimedia.org/...Flag_of_X.svg.png"></a></td>
//!   <td>2:3</td>
//!   <td><a ...>Albánie</a></td>
//!   ...
//! </tr>
//! ```
//!
//! Header and separator rows have fewer than three data cells and fall out of
//! the walk naturally. Rows whose first cell carries no usable image are
//! expected noise, skipped without a diagnostic.

use url::Url;

use crate::core::html::Table;

/// One extracted table row, before any download: the display name exactly as
/// it appears in the cell, plus the resolved absolute image URL. Never
/// persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEntry {
    pub state_name: String,
    pub image_url: String,
}

/// Walk the table rows in document order and pull `(state name, image url)`
/// out of every row with the expected shape.
///
/// Pure over the given tree: no network, no filesystem, no reordering or
/// dedup. An empty name cell is passed through as-is; downstream filename
/// derivation deals with it.
pub fn extract(table: &Table<'_>, base: &Url) -> Vec<RawEntry> {
    let mut out = Vec::new();

    for row in table.rows() {
        let cells = row.data_cells();
        // Header/separator rows carry fewer than three data cells.
        if cells.len() < 3 {
            continue;
        }
        // Image in the first cell, display name in the third.
        let Some(src) = cells[0].first_image_src() else {
            continue;
        };
        let Some(image_url) = resolve_image_src(&src, base) else {
            continue;
        };
        out.push(RawEntry {
            state_name: cells[2].text(),
            image_url,
        });
    }

    out
}

/// Wikimedia serves images protocol-relative; anything else is joined against
/// the wiki origin. Absolute URLs pass through the join unchanged.
fn resolve_image_src(src: &str, base: &Url) -> Option<String> {
    if src.starts_with("//") {
        return Some(format!("https:{src}"));
    }
    base.join(src).ok().map(|u| u.to_string())
}
