//! # resumedocx
//!
//! Typed resume model and `.docx` renderer for Rust.
//!
//! A [`ResumeDocument`] (name, contact line, summary and titled sections of
//! jobs, education and skills) is laid out into paragraphs and tables, then
//! packaged as an Office Open XML word-processing document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resumedocx::model::{EducationEntry, JobEntry, ResumeDocument, Section, SkillGroup};
//! use resumedocx::render::StyleConfig;
//!
//! fn main() -> resumedocx::Result<()> {
//!     let doc = ResumeDocument::builder("Jane Doe")
//!         .contact_line("Austin, TX | jane@example.com")
//!         .summary("Product designer with ten years of experience.")
//!         .section(Section::new("WORK EXPERIENCE").job(
//!             JobEntry::new("Lead Designer", "Acme Corp", "2020 – Present")
//!                 .bullet("Led the redesign of the onboarding flow."),
//!         ))
//!         .section(Section::new("SKILLS").skills(
//!             SkillGroup::new("Tools").items(["Figma", "Sketch"]),
//!         ))
//!         .section(Section::new("EDUCATION").education(
//!             EducationEntry::new("M.S. in HCI", "State University").in_progress(true),
//!         ))
//!         .build()?;
//!
//!     resumedocx::render_to_file(&doc, &StyleConfig::default(), "jane_doe.docx")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Deterministic output**: the same resume always produces the same bytes
//! - **Atomic file output**: a failed render never leaves a partial file
//! - **Configurable style**: colors, fonts, sizes, spacing and page setup
//! - **Diagnostics**: plain-text preview, layout statistics, JSON round trip

pub mod docx;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use docx::DocxWriter;
pub use error::{Error, Result};
pub use layout::{Color, Layout, Margins, PageSize};
pub use model::{
    DocumentProperties, EducationEntry, Entry, JobEntry, ResumeBuilder, ResumeDocument, Section,
    SkillGroup,
};
pub use render::{JsonFormat, RenderResult, RenderStats, ResumeRenderer, StyleConfig};

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Render a resume to `.docx` bytes.
///
/// # Example
///
/// ```
/// use resumedocx::{render, ResumeDocument, StyleConfig};
///
/// let doc = ResumeDocument::builder("Jane Doe").build().unwrap();
/// let bytes = render(&doc, &StyleConfig::default()).unwrap();
/// assert!(bytes.starts_with(b"PK"));
/// ```
pub fn render(doc: &ResumeDocument, style: &StyleConfig) -> Result<Vec<u8>> {
    let layout = ResumeRenderer::new(style.clone()).layout(doc)?;
    package(doc, style, &layout)
}

/// Render a resume and collect layout statistics.
pub fn render_with_stats(doc: &ResumeDocument, style: &StyleConfig) -> Result<RenderResult> {
    let (layout, stats) = ResumeRenderer::new(style.clone()).layout_with_stats(doc)?;
    let bytes = package(doc, style, &layout)?;
    Ok(RenderResult::new(bytes, stats))
}

/// Render a resume into a writer.
///
/// The package is assembled in memory first, so nothing is written when
/// rendering fails.
pub fn render_to_writer<W: Write>(
    doc: &ResumeDocument,
    style: &StyleConfig,
    mut writer: W,
) -> Result<()> {
    let bytes = render(doc, style)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Render a resume to a file.
///
/// The output is written to a temporary file in the destination directory
/// and moved into place once complete.
///
/// # Example
///
/// ```no_run
/// use resumedocx::{render_to_file, ResumeDocument, StyleConfig};
///
/// let doc = resumedocx::render::from_json_file("resume.json").unwrap();
/// render_to_file(&doc, &StyleConfig::default(), "resume.docx").unwrap();
/// ```
pub fn render_to_file<P: AsRef<Path>>(
    doc: &ResumeDocument,
    style: &StyleConfig,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = render(doc, style)?;
    write_atomic(path, &bytes)?;
    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Lay out a resume and return a plain text preview.
pub fn preview(doc: &ResumeDocument, style: &StyleConfig) -> Result<String> {
    let layout = ResumeRenderer::new(style.clone()).layout(doc)?;
    Ok(render::to_text(&layout))
}

/// Package properties with the title and author filled in from the name.
fn resolved_properties(doc: &ResumeDocument) -> DocumentProperties {
    let mut props = doc.properties.clone();
    let name = doc.display_name();
    if props.title.is_none() {
        props.title = Some(format!("{} Resume", name));
    }
    if props.author.is_none() {
        props.author = Some(name);
    }
    props
}

fn package(doc: &ResumeDocument, style: &StyleConfig, layout: &Layout) -> Result<Vec<u8>> {
    DocxWriter::new()
        .with_properties(resolved_properties(doc))
        .with_default_font(style.fonts.body.clone(), style.sizes.body)
        .write(layout)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping the temp file on any error path removes it.
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}

/// Builder for rendering resumes with a customized style.
///
/// # Example
///
/// ```no_run
/// use resumedocx::{Color, ResumeDocx};
///
/// let doc = resumedocx::render::from_json_file("resume.json")?;
/// ResumeDocx::new()
///     .with_accent(Color::rgb(0x2E, 0x74, 0xB5))
///     .with_font("Georgia")
///     .render_to_file(&doc, "resume.docx")?;
/// # Ok::<(), resumedocx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResumeDocx {
    style: StyleConfig,
}

impl ResumeDocx {
    /// Create a new builder with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole style.
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Set the accent color.
    pub fn with_accent(mut self, color: Color) -> Self {
        self.style = self.style.with_accent_color(color);
        self
    }

    /// Set the banner background color.
    pub fn with_banner(mut self, color: Color) -> Self {
        self.style = self.style.with_banner_color(color);
        self
    }

    /// Set the font family for all text.
    pub fn with_font(mut self, family: impl Into<String>) -> Self {
        self.style = self.style.with_font(family);
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page: PageSize) -> Self {
        self.style = self.style.with_page_size(page);
        self
    }

    /// Set the page margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.style = self.style.with_margins(margins);
        self
    }

    /// Get the style in use.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Render to `.docx` bytes.
    pub fn render(&self, doc: &ResumeDocument) -> Result<Vec<u8>> {
        render(doc, &self.style)
    }

    /// Render to `.docx` bytes with statistics.
    pub fn render_with_stats(&self, doc: &ResumeDocument) -> Result<RenderResult> {
        render_with_stats(doc, &self.style)
    }

    /// Render to a file.
    pub fn render_to_file<P: AsRef<Path>>(&self, doc: &ResumeDocument, path: P) -> Result<()> {
        render_to_file(doc, &self.style, path)
    }

    /// Plain text preview.
    pub fn preview(&self, doc: &ResumeDocument) -> Result<String> {
        preview(doc, &self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResumeDocument {
        ResumeDocument::builder("Jane Doe")
            .credential_suffix("Ph.D.")
            .contact_line("jane@example.com")
            .summary("Researcher.")
            .section(
                Section::new("WORK EXPERIENCE")
                    .job(JobEntry::new("Scientist", "Lab", "2019 – Present").bullet("Published.")),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolved_properties_defaults() {
        let props = resolved_properties(&sample());
        assert_eq!(props.title.as_deref(), Some("Jane Doe, Ph.D. Resume"));
        assert_eq!(props.author.as_deref(), Some("Jane Doe, Ph.D."));
    }

    #[test]
    fn test_resolved_properties_keeps_explicit_values() {
        let mut doc = sample();
        doc.properties = DocumentProperties::with_title("CV");
        let props = resolved_properties(&doc);
        assert_eq!(props.title.as_deref(), Some("CV"));
        assert_eq!(props.author.as_deref(), Some("Jane Doe, Ph.D."));
    }

    #[test]
    fn test_render_with_stats() {
        let result = render_with_stats(&sample(), &StyleConfig::default()).unwrap();
        assert!(!result.is_empty());
        assert_eq!(result.stats.banner_count, 1);
        assert_eq!(result.stats.bullet_count, 1);
    }

    #[test]
    fn test_render_to_writer_matches_render() {
        let style = StyleConfig::default();
        let mut out = Vec::new();
        render_to_writer(&sample(), &style, &mut out).unwrap();
        assert_eq!(out, render(&sample(), &style).unwrap());
    }

    #[test]
    fn test_render_to_writer_writes_nothing_on_error() {
        let mut doc = sample();
        doc.name = "  ".to_string();
        let mut out = Vec::new();
        let err = render_to_writer(&doc, &StyleConfig::default(), &mut out).unwrap_err();
        assert!(err.is_validation());
        assert!(out.is_empty());
    }

    #[test]
    fn test_builder_style() {
        let builder = ResumeDocx::new()
            .with_accent(Color::rgb(1, 2, 3))
            .with_font("Georgia");
        assert_eq!(builder.style().colors.accent, Color::rgb(1, 2, 3));
        assert_eq!(builder.style().fonts.body, "Georgia");
        assert!(builder.preview(&sample()).unwrap().contains("Jane Doe, Ph.D."));
    }
}
