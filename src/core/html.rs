// src/core/html.rs
// Thin wrappers around the scraper crate. Everything the extractor needs from
// the HTML tree goes through the handful of operations below; no other module
// touches selector machinery.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static TR: LazyLock<Selector> = LazyLock::new(|| sel("tr"));
static TD: LazyLock<Selector> = LazyLock::new(|| sel("td"));
static IMG: LazyLock<Selector> = LazyLock::new(|| sel("img"));

// Only called with literal selectors; a parse failure here is a programming error.
fn sel(src: &str) -> Selector {
    Selector::parse(src).expect("static selector")
}

pub struct Document {
    tree: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            tree: Html::parse_document(html),
        }
    }

    /// First table carrying the marker class, in document order.
    pub fn marker_table(&self, class: &str) -> Option<Table<'_>> {
        let selector = Selector::parse(&format!("table.{class}")).ok()?;
        self.tree.select(&selector).next().map(Table)
    }
}

pub struct Table<'a>(ElementRef<'a>);

impl<'a> Table<'a> {
    /// Row nodes in document order.
    pub fn rows(&self) -> Vec<Row<'a>> {
        self.0.select(&TR).map(Row).collect()
    }
}

pub struct Row<'a>(ElementRef<'a>);

impl<'a> Row<'a> {
    /// Plain data cells only; header cells don't count.
    pub fn data_cells(&self) -> Vec<Cell<'a>> {
        self.0.select(&TD).map(Cell).collect()
    }
}

pub struct Cell<'a>(ElementRef<'a>);

impl Cell<'_> {
    /// `src` of the first embedded image, if the cell has one.
    /// An empty `src` counts as absent.
    pub fn first_image_src(&self) -> Option<String> {
        let img = self.0.select(&IMG).next()?;
        let src = img.value().attr("src")?;
        if src.is_empty() {
            return None;
        }
        Some(src.to_string())
    }

    /// Flattened visible text with leading/trailing whitespace stripped.
    pub fn text(&self) -> String {
        self.0.text().collect::<String>().trim().to_string()
    }
}
