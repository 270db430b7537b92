//! Package parts other than the document body.

use super::xml::{half_points, XmlSink, W_NS};
use crate::error::Result;
use crate::model::DocumentProperties;
use chrono::SecondsFormat;

/// Style id of the bulleted list paragraph style.
pub(crate) const BULLET_STYLE_ID: &str = "ListBullet";

/// Numbering instance used by [`BULLET_STYLE_ID`].
const BULLET_NUM_ID: &str = "1";

const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const PACKAGE_RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_TYPE_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const CORE_PROPS_REL: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";

pub(crate) fn content_types() -> Result<Vec<u8>> {
    let mut xml = XmlSink::new()?;
    xml.start("Types", &[("xmlns", CONTENT_TYPES_NS)])?;
    xml.empty(
        "Default",
        &[
            ("Extension", "rels"),
            (
                "ContentType",
                "application/vnd.openxmlformats-package.relationships+xml",
            ),
        ],
    )?;
    xml.empty(
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;

    let overrides = [
        (
            "/word/document.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            "/word/styles.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            "/word/numbering.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml",
        ),
        (
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
        (
            "/docProps/app.xml",
            "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        ),
    ];
    for (part, content_type) in overrides {
        xml.empty(
            "Override",
            &[("PartName", part), ("ContentType", content_type)],
        )?;
    }

    xml.end("Types")?;
    Ok(xml.finish())
}

pub(crate) fn package_rels() -> Result<Vec<u8>> {
    let office_document = format!("{}/officeDocument", REL_TYPE_BASE);
    let extended = format!("{}/extended-properties", REL_TYPE_BASE);
    relationships(&[
        ("rId1", office_document.as_str(), "word/document.xml"),
        ("rId2", CORE_PROPS_REL, "docProps/core.xml"),
        ("rId3", extended.as_str(), "docProps/app.xml"),
    ])
}

pub(crate) fn document_rels() -> Result<Vec<u8>> {
    let styles = format!("{}/styles", REL_TYPE_BASE);
    let numbering = format!("{}/numbering", REL_TYPE_BASE);
    relationships(&[
        ("rId1", styles.as_str(), "styles.xml"),
        ("rId2", numbering.as_str(), "numbering.xml"),
    ])
}

fn relationships(rels: &[(&str, &str, &str)]) -> Result<Vec<u8>> {
    let mut xml = XmlSink::new()?;
    xml.start("Relationships", &[("xmlns", PACKAGE_RELS_NS)])?;
    for &(id, rel_type, target) in rels {
        xml.empty(
            "Relationship",
            &[("Id", id), ("Type", rel_type), ("Target", target)],
        )?;
    }
    xml.end("Relationships")?;
    Ok(xml.finish())
}

pub(crate) fn core_properties(props: &DocumentProperties) -> Result<Vec<u8>> {
    let mut xml = XmlSink::new()?;
    xml.start(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;

    if let Some(ref title) = props.title {
        xml.text_element("dc:title", &[], title)?;
    }
    if let Some(ref subject) = props.subject {
        xml.text_element("dc:subject", &[], subject)?;
    }
    if let Some(ref author) = props.author {
        xml.text_element("dc:creator", &[], author)?;
    }
    if let Some(ref keywords) = props.keywords {
        xml.text_element("cp:keywords", &[], keywords)?;
    }
    if let Some(ref created) = props.created {
        let stamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
        xml.text_element("dcterms:created", &[("xsi:type", "dcterms:W3CDTF")], &stamp)?;
    }
    if let Some(ref modified) = props.modified {
        let stamp = modified.to_rfc3339_opts(SecondsFormat::Secs, true);
        xml.text_element("dcterms:modified", &[("xsi:type", "dcterms:W3CDTF")], &stamp)?;
    }

    xml.end("cp:coreProperties")?;
    Ok(xml.finish())
}

pub(crate) fn app_properties() -> Result<Vec<u8>> {
    let mut xml = XmlSink::new()?;
    xml.start(
        "Properties",
        &[(
            "xmlns",
            "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
        )],
    )?;
    xml.text_element("Application", &[], "resumedocx")?;
    xml.end("Properties")?;
    Ok(xml.finish())
}

/// Document defaults, `Normal`, `ListBullet` and the default table style.
pub(crate) fn styles(font: &str, size: f32) -> Result<Vec<u8>> {
    let size = half_points(size);
    let mut xml = XmlSink::new()?;
    xml.start("w:styles", &[("xmlns:w", W_NS)])?;

    xml.start("w:docDefaults", &[])?;
    xml.start("w:rPrDefault", &[])?;
    xml.start("w:rPr", &[])?;
    xml.empty(
        "w:rFonts",
        &[
            ("w:ascii", font),
            ("w:eastAsia", font),
            ("w:hAnsi", font),
            ("w:cs", font),
        ],
    )?;
    xml.empty("w:sz", &[("w:val", size.as_str())])?;
    xml.empty("w:szCs", &[("w:val", size.as_str())])?;
    xml.empty("w:lang", &[("w:val", "en-US")])?;
    xml.end("w:rPr")?;
    xml.end("w:rPrDefault")?;
    xml.start("w:pPrDefault", &[])?;
    xml.start("w:pPr", &[])?;
    xml.empty(
        "w:spacing",
        &[("w:after", "0"), ("w:line", "240"), ("w:lineRule", "auto")],
    )?;
    xml.end("w:pPr")?;
    xml.end("w:pPrDefault")?;
    xml.end("w:docDefaults")?;

    xml.start(
        "w:style",
        &[
            ("w:type", "paragraph"),
            ("w:default", "1"),
            ("w:styleId", "Normal"),
        ],
    )?;
    xml.empty("w:name", &[("w:val", "Normal")])?;
    xml.empty("w:qFormat", &[])?;
    xml.end("w:style")?;

    xml.start(
        "w:style",
        &[("w:type", "paragraph"), ("w:styleId", BULLET_STYLE_ID)],
    )?;
    xml.empty("w:name", &[("w:val", "List Bullet")])?;
    xml.empty("w:basedOn", &[("w:val", "Normal")])?;
    xml.start("w:pPr", &[])?;
    xml.start("w:numPr", &[])?;
    xml.empty("w:ilvl", &[("w:val", "0")])?;
    xml.empty("w:numId", &[("w:val", BULLET_NUM_ID)])?;
    xml.end("w:numPr")?;
    xml.empty("w:ind", &[("w:left", "360"), ("w:hanging", "360")])?;
    xml.end("w:pPr")?;
    xml.end("w:style")?;

    xml.start(
        "w:style",
        &[
            ("w:type", "table"),
            ("w:default", "1"),
            ("w:styleId", "TableNormal"),
        ],
    )?;
    xml.empty("w:name", &[("w:val", "Normal Table")])?;
    xml.empty("w:uiPriority", &[("w:val", "99")])?;
    xml.empty("w:semiHidden", &[])?;
    xml.start("w:tblPr", &[])?;
    xml.empty("w:tblInd", &[("w:w", "0"), ("w:type", "dxa")])?;
    xml.start("w:tblCellMar", &[])?;
    for (side, width) in [("w:top", "0"), ("w:left", "108"), ("w:bottom", "0"), ("w:right", "108")] {
        xml.empty(side, &[("w:w", width), ("w:type", "dxa")])?;
    }
    xml.end("w:tblCellMar")?;
    xml.end("w:tblPr")?;
    xml.end("w:style")?;

    xml.end("w:styles")?;
    Ok(xml.finish())
}

/// A single-level bullet list.
pub(crate) fn numbering() -> Result<Vec<u8>> {
    let mut xml = XmlSink::new()?;
    xml.start("w:numbering", &[("xmlns:w", W_NS)])?;

    xml.start("w:abstractNum", &[("w:abstractNumId", "0")])?;
    xml.empty("w:multiLevelType", &[("w:val", "singleLevel")])?;
    xml.start("w:lvl", &[("w:ilvl", "0")])?;
    xml.empty("w:start", &[("w:val", "1")])?;
    xml.empty("w:numFmt", &[("w:val", "bullet")])?;
    xml.empty("w:lvlText", &[("w:val", "\u{2022}")])?;
    xml.empty("w:lvlJc", &[("w:val", "left")])?;
    xml.start("w:pPr", &[])?;
    xml.empty("w:ind", &[("w:left", "360"), ("w:hanging", "360")])?;
    xml.end("w:pPr")?;
    xml.end("w:lvl")?;
    xml.end("w:abstractNum")?;

    xml.start("w:num", &[("w:numId", BULLET_NUM_ID)])?;
    xml.empty("w:abstractNumId", &[("w:val", "0")])?;
    xml.end("w:num")?;

    xml.end("w:numbering")?;
    Ok(xml.finish())
}
