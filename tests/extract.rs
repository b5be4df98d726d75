// tests/extract.rs
//
// Offline extraction tests over synthetic wikitable fragments.

use flag_scrape::core::html::Document;
use flag_scrape::specs::flags::{self, RawEntry};
use url::Url;

const MARKER: &str = "wikitable";

fn base() -> Url {
    Url::parse("https://cs.wikipedia.org").unwrap()
}

fn extract_from(html: &str) -> Vec<RawEntry> {
    let doc = Document::parse(html);
    let table = doc.marker_table(MARKER).expect("marker table present");
    flags::extract(&table, &base())
}

#[test]
fn skips_rows_with_fewer_than_three_data_cells() {
    let html = r#"
        <table class="wikitable">
          <tr><th>Vlajka</th><th>Poměr</th><th>Stát</th></tr>
          <tr><td><img src="//upload.example/a.svg"></td><td>2:3</td><td>Albánie</td></tr>
          <tr><td><img src="//upload.example/b.svg"></td><td>2:3</td></tr>
        </table>"#;

    let entries = extract_from(html);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].state_name, "Albánie");
}

#[test]
fn skips_rows_without_a_usable_image() {
    // No <img>, <img> without src, <img> with empty src: all expected noise.
    let html = r#"
        <table class="wikitable">
          <tr><td>no image here</td><td>2:3</td><td>Atlantida</td></tr>
          <tr><td><img></td><td>2:3</td><td>Elbonie</td></tr>
          <tr><td><img src=""></td><td>2:3</td><td>Zembla</td></tr>
          <tr><td><img src="//upload.example/c.svg"></td><td>2:3</td><td>Chile</td></tr>
        </table>"#;

    let entries = extract_from(html);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].state_name, "Chile");
}

#[test]
fn state_name_comes_from_third_cell_flattened_and_trimmed() {
    let html = r#"
        <table class="wikitable">
          <tr>
            <td><a><img src="//upload.example/fr.svg"></a></td>
            <td>2:3</td>
            <td>  <a href="/wiki/Francie">Francie</a>
            </td>
            <td>extra cell ignored</td>
          </tr>
        </table>"#;

    let entries = extract_from(html);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].state_name, "Francie");
}

#[test]
fn empty_name_cell_is_passed_through() {
    let html = r#"
        <table class="wikitable">
          <tr><td><img src="//upload.example/x.svg"></td><td>2:3</td><td>   </td></tr>
        </table>"#;

    let entries = extract_from(html);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].state_name, "");
}

#[test]
fn output_order_follows_row_order() {
    let html = r#"
        <table class="wikitable">
          <tr><td><img src="//u.example/1.svg"></td><td>x</td><td>Norsko</td></tr>
          <tr><td><img src="//u.example/2.svg"></td><td>x</td><td>Finsko</td></tr>
          <tr><td><img src="//u.example/3.svg"></td><td>x</td><td>Island</td></tr>
        </table>"#;

    let names: Vec<String> = extract_from(html)
        .into_iter()
        .map(|e| e.state_name)
        .collect();
    assert_eq!(names, ["Norsko", "Finsko", "Island"]);
}

#[test]
fn protocol_relative_src_gets_https_prefix() {
    let html = r#"
        <table class="wikitable">
          <tr><td><img src="//upload.example/flag.svg"></td><td>x</td><td>A</td></tr>
        </table>"#;

    let entries = extract_from(html);
    assert_eq!(entries[0].image_url, "https://upload.example/flag.svg");
}

#[test]
fn relative_src_resolves_against_base_origin() {
    let html = r#"
        <table class="wikitable">
          <tr><td><img src="/w/images/flag.svg"></td><td>x</td><td>A</td></tr>
        </table>"#;

    let entries = extract_from(html);
    assert_eq!(
        entries[0].image_url,
        "https://cs.wikipedia.org/w/images/flag.svg"
    );
}

#[test]
fn absolute_src_is_unchanged() {
    let html = r#"
        <table class="wikitable">
          <tr><td><img src="https://cdn.example/flag.png"></td><td>x</td><td>A</td></tr>
        </table>"#;

    let entries = extract_from(html);
    assert_eq!(entries[0].image_url, "https://cdn.example/flag.png");
}

#[test]
fn first_marker_table_wins() {
    // An unmarked table before it is ignored; a second marked table is never
    // reached.
    let html = r#"
        <table>
          <tr><td><img src="//u.example/nav.svg"></td><td>x</td><td>Navigace</td></tr>
        </table>
        <table class="wikitable">
          <tr><td><img src="//u.example/a.svg"></td><td>x</td><td>Andorra</td></tr>
        </table>
        <table class="wikitable">
          <tr><td><img src="//u.example/z.svg"></td><td>x</td><td>Zanzibar</td></tr>
        </table>"#;

    let entries = extract_from(html);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].state_name, "Andorra");
}

#[test]
fn no_marker_table_yields_none() {
    let doc = Document::parse("<table><tr><td>plain</td></tr></table>");
    assert!(doc.marker_table(MARKER).is_none());
}
