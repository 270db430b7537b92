//! Integration tests for the `.docx` package contents.

use std::io::{Cursor, Read};

use chrono::{TimeZone, Utc};
use resumedocx::docx::DOCUMENT_PART;
use resumedocx::model::{DocumentProperties, ResumeDocument};
use resumedocx::render::StyleConfig;
use resumedocx::{render, Color, ResumeDocx};
use zip::ZipArchive;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/charles_martin.json");

fn fixture() -> ResumeDocument {
    resumedocx::render::from_json_file(FIXTURE).unwrap()
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

#[test]
fn test_package_parts() {
    let bytes = render(&fixture(), &StyleConfig::default()).unwrap();
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort_unstable();

    assert_eq!(
        names,
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/app.xml",
            "docProps/core.xml",
            "word/_rels/document.xml.rels",
            "word/document.xml",
            "word/numbering.xml",
            "word/styles.xml",
        ]
    );
}

#[test]
fn test_document_text_and_formatting() {
    let bytes = render(&fixture(), &StyleConfig::default()).unwrap();
    let xml = read_part(&bytes, DOCUMENT_PART);

    assert!(xml.contains(">Charles Martin, Ed.D.</w:t>"));
    assert!(xml.contains(">Master's in Technology Leadership</w:t>"));
    assert!(xml.contains("> (in progress)</w:t>"));
    assert!(xml.contains(">Senior Instructional Designer &amp; eLearning Lead</w:t>"));
    assert!(xml.contains("w:fill=\"DEEAF6\""));
    assert!(xml.contains("<w:color w:val=\"5B9BD5\"/>"));
    assert!(xml.contains("<w:sz w:val=\"44\"/>"));
    assert_eq!(xml.matches("<w:pStyle w:val=\"ListBullet\"/>").count(), 12);
    assert_eq!(xml.matches("<w:tcBorders>").count(), 3 + 3 * 2);
    assert!(xml.trim_end().ends_with("</w:sectPr></w:body></w:document>"));
}

#[test]
fn test_core_properties_default_to_name() {
    let bytes = render(&fixture(), &StyleConfig::default()).unwrap();
    let xml = read_part(&bytes, "docProps/core.xml");

    assert!(xml.contains("<dc:title>Charles Martin, Ed.D. Resume</dc:title>"));
    assert!(xml.contains("<dc:creator>Charles Martin, Ed.D.</dc:creator>"));
    assert!(!xml.contains("dcterms:created"));
}

#[test]
fn test_explicit_properties() {
    let mut doc = fixture();
    doc.properties = DocumentProperties {
        title: Some("Curriculum Vitae".to_string()),
        keywords: Some("instructional design".to_string()),
        created: Some(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()),
        ..Default::default()
    };
    let bytes = render(&doc, &StyleConfig::default()).unwrap();
    let xml = read_part(&bytes, "docProps/core.xml");

    assert!(xml.contains("<dc:title>Curriculum Vitae</dc:title>"));
    assert!(xml.contains("<cp:keywords>instructional design</cp:keywords>"));
    assert!(xml.contains(">2025-01-02T03:04:05Z</dcterms:created>"));
}

#[test]
fn test_custom_style_reaches_package() {
    let bytes = ResumeDocx::new()
        .with_accent(Color::rgb(0x2E, 0x74, 0xB5))
        .with_banner(Color::rgb(0xEE, 0xEE, 0xEE))
        .with_font("Georgia")
        .render(&fixture())
        .unwrap();

    let document = read_part(&bytes, DOCUMENT_PART);
    assert!(document.contains("<w:color w:val=\"2E74B5\"/>"));
    assert!(document.contains("w:fill=\"EEEEEE\""));
    assert!(!document.contains("Calibri"));

    let styles = read_part(&bytes, "word/styles.xml");
    assert!(styles.contains("w:ascii=\"Georgia\""));
}

#[test]
fn test_style_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.json");
    std::fs::write(
        &path,
        r##"{"colors": {"accent": "#112233"}, "sizes": {"name": 24}}"##,
    )
    .unwrap();

    let style = StyleConfig::from_json_file(&path).unwrap();
    assert_eq!(style.colors.accent, Color::rgb(0x11, 0x22, 0x33));
    assert_eq!(style.colors.banner_background, Color::rgb(0xDE, 0xEA, 0xF6));

    let bytes = render(&fixture(), &style).unwrap();
    let xml = read_part(&bytes, DOCUMENT_PART);
    assert!(xml.contains("<w:sz w:val=\"48\"/>"));
}

#[test]
fn test_invalid_color_in_style() {
    let err = StyleConfig::from_json(r#"{"colors": {"accent": "blue"}}"#).unwrap_err();
    assert!(!err.is_validation());
}
