//! Rendering result with statistics.

use crate::layout::{Block, Layout, Paragraph};
use serde::{Deserialize, Serialize};

/// Result of rendering a resume: the document bytes plus statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The `.docx` package
    #[serde(skip)]
    pub bytes: Vec<u8>,

    /// Layout statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(bytes: Vec<u8>, stats: RenderStats) -> Self {
        Self { bytes, stats }
    }

    /// Get the package size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the package is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Counts of the blocks emitted for a resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of paragraphs, including those inside tables
    pub paragraph_count: u32,

    /// Number of tables (banners and job rows)
    pub table_count: u32,

    /// Number of section banners
    pub banner_count: u32,

    /// Number of bulleted paragraphs
    pub bullet_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a layout.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut stats = Self::new();
        for block in &layout.blocks {
            match block {
                Block::Paragraph(p) => stats.add_paragraph(p),
                Block::Table(t) => {
                    stats.table_count += 1;
                    if t.is_banner() {
                        stats.banner_count += 1;
                    }
                    for cell in t.cells() {
                        for p in &cell.paragraphs {
                            stats.add_paragraph(p);
                        }
                    }
                }
            }
        }
        stats
    }

    fn add_paragraph(&mut self, para: &Paragraph) {
        self.paragraph_count += 1;
        if para.is_bullet() {
            self.bullet_count += 1;
        }
        self.count_text(&para.plain_text());
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{
        Color, Margins, PageSetup, PageSize, ParagraphStyle, Table, TextRun, TextStyle,
    };

    #[test]
    fn test_count_text() {
        let mut stats = RenderStats::new();
        stats.count_text("Lead instructional design, at scale.");

        assert_eq!(stats.word_count, 5);
        assert_eq!(stats.char_count, 32);
    }

    #[test]
    fn test_from_layout() {
        let mut layout = Layout::new(PageSetup {
            size: PageSize::letter(),
            margins: Margins::default(),
        });
        let text = |s: &str| TextRun::new(s, TextStyle::default());
        layout.add_table(Table::banner(
            504.0,
            Color::WHITE,
            Paragraph::new().run(text("SKILLS")),
        ));
        layout.add_paragraph(Paragraph::spacer(6.0));
        layout.add_paragraph(
            Paragraph::with_style(ParagraphStyle::default().bulleted()).run(text("Did a thing")),
        );

        let stats = RenderStats::from_layout(&layout);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.banner_count, 1);
        assert_eq!(stats.paragraph_count, 3);
        assert_eq!(stats.bullet_count, 1);
        assert_eq!(stats.word_count, 4);
    }

    #[test]
    fn test_render_result() {
        let result = RenderResult::new(vec![1, 2, 3], RenderStats::default());
        assert_eq!(result.len(), 3);
        assert!(!result.is_empty());
    }
}
