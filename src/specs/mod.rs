// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! A spec encodes *where the ground truth lives in the HTML* of one page and
//! *how to extract it robustly*: which table to trust, which cells carry the
//! image and the display name, and how image sources resolve to absolute
//! URLs.
//!
//! ## What lives here
//! - **Pure HTML extraction** over the capability wrappers in `core::html`.
//! - **Selector choice** (the `wikitable` marker class) and row-shape rules.
//! - **Light shaping** of results into plain record structs.
//!
//! ## What does **not** live here
//! - **Networking policy** – the runner owns the client and its timeouts.
//! - **File writing and manifest assembly** – that's `materialize`/`store`.
//! - **Progress reporting** – frontends listen on `progress::Progress`.
//!
//! ## Conventions & invariants
//! - Output order strictly follows row order in the source table.
//! - Rows that don't match the expected shape are skipped, never errors;
//!   they are expected noise (headers, separators, footnote rows).
//! - Specs are testable **offline** against synthetic table fragments.
pub mod flags;
