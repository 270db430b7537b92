//! JSON import and export of resumes.

use crate::error::Result;
use crate::model::ResumeDocument;
use std::path::Path;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a resume to JSON.
pub fn to_json(doc: &ResumeDocument, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc)?,
        JsonFormat::Compact => serde_json::to_string(doc)?,
    };
    Ok(json)
}

/// Parse and validate a resume from JSON.
pub fn from_json(json: &str) -> Result<ResumeDocument> {
    let doc: ResumeDocument = serde_json::from_str(json)?;
    doc.validate()?;
    Ok(doc)
}

/// Load and validate a resume from a JSON file.
pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<ResumeDocument> {
    let path = path.as_ref();
    log::debug!("loading resume from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    from_json(&json)
}
