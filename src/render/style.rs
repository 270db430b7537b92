//! Style configuration for rendered resumes.

use crate::error::Result;
use crate::layout::{Color, Margins, PageSetup, PageSize};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Colors, fonts, sizes and spacing used by the renderer.
///
/// Every field has a default, so a partial JSON object is a valid style:
///
/// ```
/// use resumedocx::render::StyleConfig;
///
/// let style = StyleConfig::from_json(r#"{"colors": {"accent": "2E74B5"}}"#).unwrap();
/// assert_eq!(style.colors.accent.to_hex(), "2E74B5");
/// assert_eq!(style.fonts.body, "Calibri");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Color scheme
    pub colors: ColorScheme,

    /// Font families
    pub fonts: Fonts,

    /// Font sizes per role
    pub sizes: FontSizes,

    /// Paragraph spacing
    pub spacing: Spacing,

    /// Paper size
    pub page: PageSize,

    /// Page margins
    pub margins: Margins,

    /// Share of the content width given to the job title column (0.1-0.9)
    pub title_column_ratio: f32,
}

impl StyleConfig {
    /// Create the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a style from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a style from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the style to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the accent color.
    pub fn with_accent_color(mut self, color: Color) -> Self {
        self.colors.accent = color;
        self
    }

    /// Set the banner background color.
    pub fn with_banner_color(mut self, color: Color) -> Self {
        self.colors.banner_background = color;
        self
    }

    /// Use one font family for body and headings.
    pub fn with_font(mut self, family: impl Into<String>) -> Self {
        let family = family.into();
        self.fonts.heading = family.clone();
        self.fonts.body = family;
        self
    }

    /// Set the page margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the paper size.
    pub fn with_page_size(mut self, page: PageSize) -> Self {
        self.page = page;
        self
    }

    /// Set the title column share for job rows.
    pub fn with_title_column_ratio(mut self, ratio: f32) -> Self {
        self.title_column_ratio = ratio.clamp(0.1, 0.9);
        self
    }

    /// Page setup derived from size and margins.
    pub fn page_setup(&self) -> PageSetup {
        PageSetup {
            size: self.page,
            margins: self.margins,
        }
    }

    /// Width of a section banner: page width minus left and right margins.
    pub fn banner_width(&self) -> f32 {
        self.page_setup().content_width()
    }

    /// Title and date column widths for a job row.
    pub fn job_columns(&self) -> (f32, f32) {
        let width = self.banner_width();
        let ratio = self.title_column_ratio.clamp(0.1, 0.9);
        let title = width * ratio;
        (title, width - title)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            colors: ColorScheme::default(),
            fonts: Fonts::default(),
            sizes: FontSizes::default(),
            spacing: Spacing::default(),
            page: PageSize::letter(),
            margins: Margins::inches(0.75),
            title_column_ratio: 5.0 / 7.0,
        }
    }
}

/// Colors by role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Name, organizations and degrees
    pub accent: Color,

    /// Section banner fill
    pub banner_background: Color,

    /// Regular text
    pub text: Color,

    /// Contact line
    pub muted: Color,

    /// Header separator line
    pub rule: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            accent: Color::rgb(0x5B, 0x9B, 0xD5),
            banner_background: Color::rgb(0xDE, 0xEA, 0xF6),
            text: Color::BLACK,
            muted: Color::rgb(0x66, 0x66, 0x66),
            rule: Color::BLACK,
        }
    }
}

/// Font families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fonts {
    /// Body text
    pub body: String,

    /// Name, banners and entry titles
    pub heading: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            body: "Calibri".to_string(),
            heading: "Calibri".to_string(),
        }
    }
}

/// Font sizes in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    /// Name in the header
    pub name: f32,

    /// Section banner text
    pub section_header: f32,

    /// Job title and dates
    pub entry_title: f32,

    /// Everything else
    pub body: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            name: 22.0,
            section_header: 11.0,
            entry_title: 11.0,
            body: 10.0,
        }
    }
}

/// Paragraph spacing in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// After the name line
    pub name_after: f32,
    /// After the contact line
    pub contact_after: f32,
    /// Before the header separator
    pub rule_before: f32,
    /// After the header separator
    pub rule_after: f32,
    /// Before the summary
    pub summary_before: f32,
    /// After the summary
    pub summary_after: f32,
    /// Spacer after each section banner
    pub banner_after: f32,
    /// After a job's organization line
    pub organization_after: f32,
    /// After each bullet
    pub bullet_after: f32,
    /// Spacer after each job
    pub job_after: f32,
    /// After a skill group
    pub skill_after: f32,
    /// After the last skill group of a section
    pub skill_section_after: f32,
    /// After a degree line
    pub degree_after: f32,
    /// After an institution line
    pub institution_after: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            name_after: 0.0,
            contact_after: 0.0,
            rule_before: 6.0,
            rule_after: 6.0,
            summary_before: 6.0,
            summary_after: 12.0,
            banner_after: 6.0,
            organization_after: 3.0,
            bullet_after: 2.0,
            job_after: 6.0,
            skill_after: 6.0,
            skill_section_after: 12.0,
            degree_after: 2.0,
            institution_after: 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_banner_width() {
        let style = StyleConfig::default();
        // 8.5in - 2 * 0.75in = 7in
        assert_eq!(style.banner_width(), 504.0);
    }

    #[test]
    fn test_banner_width_tracks_margins() {
        let style = StyleConfig::new().with_margins(Margins::inches(1.0));
        assert_eq!(style.banner_width(), 612.0 - 144.0);

        let style = StyleConfig::new().with_margins(Margins {
            left: 36.0,
            right: 18.0,
            ..Margins::uniform(54.0)
        });
        assert_eq!(style.banner_width(), 612.0 - 54.0);
    }

    #[test]
    fn test_job_columns() {
        let style = StyleConfig::default();
        let (title, date) = style.job_columns();
        assert!((title - 360.0).abs() < 0.01);
        assert!((date - 144.0).abs() < 0.01);

        let style = style.with_title_column_ratio(2.0);
        assert_eq!(style.title_column_ratio, 0.9);
    }

    #[test]
    fn test_builder() {
        let style = StyleConfig::new()
            .with_font("Georgia")
            .with_accent_color(Color::rgb(1, 2, 3))
            .with_banner_color(Color::WHITE)
            .with_page_size(PageSize::a4());

        assert_eq!(style.fonts.body, "Georgia");
        assert_eq!(style.fonts.heading, "Georgia");
        assert_eq!(style.colors.accent, Color::rgb(1, 2, 3));
        assert_eq!(style.colors.banner_background, Color::WHITE);
        assert_eq!(style.page, PageSize::a4());
    }

    #[test]
    fn test_json_partial_and_roundtrip() {
        let style = StyleConfig::from_json(
            r#"{"sizes": {"name": 26}, "margins": {"top": 36, "right": 36, "bottom": 36, "left": 36}}"#,
        )
        .unwrap();
        assert_eq!(style.sizes.name, 26.0);
        assert_eq!(style.sizes.body, 10.0);
        assert_eq!(style.banner_width(), 540.0);

        let json = style.to_json().unwrap();
        assert_eq!(StyleConfig::from_json(&json).unwrap(), style);
    }

    #[test]
    fn test_json_invalid_color() {
        let result = StyleConfig::from_json(r#"{"colors": {"accent": "blue"}}"#);
        assert!(result.is_err());
    }
}
