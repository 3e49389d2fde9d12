// tests/drive_links.rs

use dairyscan::core::drive::{self, FileKind};

#[test]
fn extracts_id_from_path_shape() {
    let url = "https://drive.example.com/file/d/ABC123XYZ/view";
    assert_eq!(drive::extract_file_id(url).as_deref(), Some("ABC123XYZ"));
}

#[test]
fn extracts_id_from_query_shape() {
    let url = "https://drive.google.com/open?id=ABC123XYZ&usp=sharing";
    assert_eq!(drive::extract_file_id(url).as_deref(), Some("ABC123XYZ"));
}

#[test]
fn extracts_bare_identifier() {
    let id = "1aBcDeFgHiJkLmNoPqRsTuVwXyZ0123456789_-";
    assert_eq!(drive::extract_file_id(id).as_deref(), Some(id));
}

#[test]
fn short_or_unrecognized_strings_have_no_id() {
    assert_eq!(drive::extract_file_id("not-a-url"), None);
    assert_eq!(drive::extract_file_id(""), None);
    assert_eq!(drive::extract_file_id("   "), None);
    assert_eq!(drive::extract_file_id("report.pdf"), None);
}

#[test]
fn derived_urls_each_contain_id_exactly_once() {
    let links = drive::resolve("https://drive.example.com/file/d/ABC123XYZ/view").unwrap();
    for url in [&links.preview, &links.open, &links.download] {
        assert_eq!(url.matches("ABC123XYZ").count(), 1, "{url}");
    }
    assert!(links.preview.ends_with("/preview"));
    assert!(links.open.ends_with("/view"));
    assert!(links.download.contains("export=download"));
}

#[test]
fn unresolvable_url_yields_no_links() {
    assert!(drive::resolve("not-a-url").is_none());
}

#[test]
fn render_path_follows_extension() {
    assert_eq!(drive::file_kind("report.JPG"), FileKind::Image);
    assert_eq!(drive::file_kind("scan.png"), FileKind::Image);
    assert_eq!(drive::file_kind("Daily_Quality_Report.pdf"), FileKind::Pdf);
    assert_eq!(drive::file_kind("report"), FileKind::Unknown);
    assert_eq!(drive::file_kind(""), FileKind::Unknown);
}
