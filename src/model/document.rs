//! Document-level types.

use super::Section;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A complete resume, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    /// Person's name
    pub name: String,

    /// Credential appended after the name (e.g., "Ed.D.")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_suffix: Option<String>,

    /// Contact information shown under the name
    #[serde(default)]
    pub contact_line: String,

    /// Summary paragraph
    #[serde(default)]
    pub summary: String,

    /// Sections in rendering order
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Package properties (title, author, timestamps)
    #[serde(default)]
    pub properties: DocumentProperties,
}

impl ResumeDocument {
    /// Start building a resume for the given name.
    pub fn builder(name: impl Into<String>) -> ResumeBuilder {
        ResumeBuilder::new(name)
    }

    /// Name as printed in the header, including the credential suffix.
    pub fn display_name(&self) -> String {
        match self.credential_suffix.as_deref().map(str::trim) {
            Some(suffix) if !suffix.is_empty() => format!("{}, {}", self.name, suffix),
            _ => self.name.clone(),
        }
    }

    /// Check the structural requirements of the resume.
    ///
    /// The name must not be blank, and every section needs at least one
    /// entry. Section titles are read strictly: a title that is present but
    /// blank fails with [`Error::EmptySectionTitle`]. All other fields may be
    /// empty.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::EmptyName);
        }

        for (index, section) in self.sections.iter().enumerate() {
            if section.title.trim().is_empty() {
                return Err(Error::EmptySectionTitle { index });
            }
            if section.is_empty() {
                return Err(Error::EmptySection {
                    title: section.title.clone(),
                });
            }
        }

        Ok(())
    }

    /// Get a section by title (case-sensitive).
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

/// Package properties written to `docProps/core.xml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentProperties {
    /// Document title (defaults to "<display name> Resume")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author (defaults to the display name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Document subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Keywords
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    /// Creation date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    /// Create properties with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// Builder for [`ResumeDocument`].
///
/// # Example
///
/// ```
/// use resumedocx::model::{JobEntry, ResumeDocument, Section};
///
/// let doc = ResumeDocument::builder("Jane Doe")
///     .contact_line("jane@example.com")
///     .summary("Engineer.")
///     .section(Section::new("WORK EXPERIENCE").job(
///         JobEntry::new("Engineer", "Acme", "2020 – Present").bullet("Built things."),
///     ))
///     .build()
///     .unwrap();
/// assert_eq!(doc.sections.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ResumeBuilder {
    doc: ResumeDocument,
}

impl ResumeBuilder {
    /// Create a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            doc: ResumeDocument {
                name: name.into(),
                credential_suffix: None,
                contact_line: String::new(),
                summary: String::new(),
                sections: Vec::new(),
                properties: DocumentProperties::default(),
            },
        }
    }

    /// Set the credential suffix.
    pub fn credential_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.doc.credential_suffix = Some(suffix.into());
        self
    }

    /// Set the contact line.
    pub fn contact_line(mut self, contact: impl Into<String>) -> Self {
        self.doc.contact_line = contact.into();
        self
    }

    /// Set the summary paragraph.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.doc.summary = summary.into();
        self
    }

    /// Append a section.
    pub fn section(mut self, section: Section) -> Self {
        self.doc.sections.push(section);
        self
    }

    /// Set the package properties.
    pub fn properties(mut self, properties: DocumentProperties) -> Self {
        self.doc.properties = properties;
        self
    }

    /// Validate and return the document.
    pub fn build(self) -> Result<ResumeDocument> {
        self.doc.validate()?;
        Ok(self.doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EducationEntry, SkillGroup};

    #[test]
    fn test_display_name() {
        let doc = ResumeDocument::builder("Charles Martin")
            .credential_suffix("Ed.D.")
            .build()
            .unwrap();
        assert_eq!(doc.display_name(), "Charles Martin, Ed.D.");

        let doc = ResumeDocument::builder("Charles Martin")
            .credential_suffix("  ")
            .build()
            .unwrap();
        assert_eq!(doc.display_name(), "Charles Martin");
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = ResumeDocument::builder("").build();
        assert!(matches!(result, Err(Error::EmptyName)));

        let result = ResumeDocument::builder("   ").build();
        assert!(matches!(result, Err(Error::EmptyName)));
    }

    #[test]
    fn test_empty_section_rejected() {
        let result = ResumeDocument::builder("Jane")
            .section(Section::new("SKILLS"))
            .build();
        match result {
            Err(Error::EmptySection { title }) => assert_eq!(title, "SKILLS"),
            other => panic!("Expected EmptySection, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_section_title_rejected() {
        let result = ResumeDocument::builder("Jane")
            .section(Section::new("EDUCATION").education(EducationEntry::new("B.A.", "College")))
            .section(Section::new("").skills(SkillGroup::new("Tools")))
            .build();
        assert!(matches!(result, Err(Error::EmptySectionTitle { index: 1 })));
    }

    #[test]
    fn test_empty_optional_fields_allowed() {
        let doc = ResumeDocument::builder("Jane")
            .section(Section::new("SKILLS").skills(SkillGroup::new("")))
            .build()
            .unwrap();
        assert!(doc.contact_line.is_empty());
        assert!(doc.summary.is_empty());
        assert_eq!(doc.entry_count(), 1);
        assert!(doc.section("SKILLS").is_some());
        assert!(doc.section("skills").is_none());
    }
}
