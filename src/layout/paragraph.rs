//! Paragraph and text-level types.

use super::Color;
use serde::{Deserialize, Serialize};

/// A paragraph of styled runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            style: ParagraphStyle::default(),
        }
    }

    /// Create an empty paragraph with the given style.
    pub fn with_style(style: ParagraphStyle) -> Self {
        Self {
            runs: Vec::new(),
            style,
        }
    }

    /// Create an empty paragraph used only for vertical space.
    pub fn spacer(space_after: f32) -> Self {
        Self::with_style(ParagraphStyle::spacing(0.0, space_after))
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Add a run and return the paragraph.
    pub fn run(mut self, run: TextRun) -> Self {
        self.add_run(run);
        self
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.trim().is_empty())
    }

    /// Check if this is a bulleted list item.
    pub fn is_bullet(&self) -> bool {
        self.style.bullet
    }

    /// Check if this is an empty paragraph with a bottom border.
    pub fn is_rule(&self) -> bool {
        self.style.bottom_border.is_some() && self.is_empty()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Paragraph-level formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Horizontal alignment
    pub alignment: Alignment,

    /// Space before the paragraph in points
    pub space_before: f32,

    /// Space after the paragraph in points
    pub space_after: f32,

    /// Border drawn under the paragraph
    pub bottom_border: Option<Border>,

    /// Render as a bulleted list item
    pub bullet: bool,
}

impl ParagraphStyle {
    /// Left-aligned style with the given spacing.
    pub fn spacing(space_before: f32, space_after: f32) -> Self {
        Self {
            space_before,
            space_after,
            ..Default::default()
        }
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the bottom border.
    pub fn with_bottom_border(mut self, border: Border) -> Self {
        self.bottom_border = Some(border);
        self
    }

    /// Mark as a bulleted list item.
    pub fn bulleted(mut self) -> Self {
        self.bullet = true;
        self
    }
}

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left-aligned
    #[default]
    Left,
    /// Centered
    Center,
    /// Right-aligned
    Right,
    /// Justified
    Justify,
}

/// A single solid border line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Line width in points
    pub width: f32,

    /// Gap between text and line in points
    pub space: f32,

    /// Line color
    pub color: Color,
}

impl Border {
    /// Create a thin rule of the given color.
    pub fn thin(color: Color) -> Self {
        Self {
            width: 0.75,
            space: 1.0,
            color,
        }
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Character-level formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font family
    pub font: String,

    /// Font size in points
    pub size: f32,

    /// Text color
    pub color: Color,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,
}

impl TextStyle {
    /// Regular black text in the given font and size.
    pub fn new(font: impl Into<String>, size: f32) -> Self {
        Self {
            font: font.into(),
            size,
            color: Color::BLACK,
            bold: false,
            italic: false,
        }
    }

    /// Set the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Make bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Make italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new("Calibri", 11.0)
    }
}
