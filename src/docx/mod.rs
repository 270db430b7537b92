//! Office Open XML (`.docx`) package writer.
//!
//! Serializes a [`Layout`] into a zip container holding the WordprocessingML
//! parts. Parts are written in a fixed order with a fixed timestamp, so the
//! same layout always produces the same bytes.
//!
//! # Example
//!
//! ```
//! use resumedocx::docx::DocxWriter;
//! use resumedocx::layout::{Layout, Margins, PageSetup, PageSize, Paragraph, TextRun, TextStyle};
//!
//! let mut layout = Layout::new(PageSetup {
//!     size: PageSize::letter(),
//!     margins: Margins::inches(1.0),
//! });
//! layout.add_paragraph(Paragraph::new().run(TextRun::new("Hello", TextStyle::default())));
//!
//! let bytes = DocxWriter::new().write(&layout).unwrap();
//! assert_eq!(&bytes[..2], b"PK");
//! ```

mod body;
mod parts;
mod xml;

use crate::error::Result;
use crate::layout::Layout;
use crate::model::DocumentProperties;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Path of the main document part inside the package.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Writes layouts as `.docx` packages.
#[derive(Debug, Clone)]
pub struct DocxWriter {
    properties: DocumentProperties,
    default_font: String,
    default_size: f32,
}

impl DocxWriter {
    /// Create a writer with empty properties and Calibri 10pt defaults.
    pub fn new() -> Self {
        Self {
            properties: DocumentProperties::default(),
            default_font: "Calibri".to_string(),
            default_size: 10.0,
        }
    }

    /// Set the package properties.
    pub fn with_properties(mut self, properties: DocumentProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Set the document default font, used for text without explicit runs.
    pub fn with_default_font(mut self, font: impl Into<String>, size: f32) -> Self {
        self.default_font = font.into();
        self.default_size = size;
        self
    }

    /// Serialize a layout into package bytes.
    pub fn write(&self, layout: &Layout) -> Result<Vec<u8>> {
        let parts: [(&str, Vec<u8>); 8] = [
            ("[Content_Types].xml", parts::content_types()?),
            ("_rels/.rels", parts::package_rels()?),
            ("docProps/core.xml", parts::core_properties(&self.properties)?),
            ("docProps/app.xml", parts::app_properties()?),
            ("word/_rels/document.xml.rels", parts::document_rels()?),
            (
                "word/styles.xml",
                parts::styles(&self.default_font, self.default_size)?,
            ),
            ("word/numbering.xml", parts::numbering()?),
            (DOCUMENT_PART, body::document(layout)?),
        ];

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in parts {
            zip.start_file(name, part_options())?;
            zip.write_all(&data)?;
        }
        let cursor = zip.finish()?;
        let bytes = cursor.into_inner();

        log::debug!(
            "packaged {} blocks into {} bytes",
            layout.blocks.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn part_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}
