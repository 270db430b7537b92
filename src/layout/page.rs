//! Page setup and the top-level block list.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A laid-out document: page setup plus blocks in vertical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Page size and margins
    pub page: PageSetup,

    /// Content blocks, top to bottom
    pub blocks: Vec<Block>,
}

impl Layout {
    /// Create an empty layout.
    pub fn new(page: PageSetup) -> Self {
        Self {
            page,
            blocks: Vec::new(),
        }
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Top-level paragraphs (not those inside tables).
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        })
    }

    /// Top-level tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            Block::Paragraph(_) => None,
        })
    }

    /// Section banners in document order.
    pub fn banners(&self) -> impl Iterator<Item = &Table> {
        self.tables().filter(|t| t.is_banner())
    }

    /// Titles of the section banners in document order.
    pub fn banner_titles(&self) -> Vec<String> {
        self.banners().map(|t| t.plain_text()).collect()
    }

    /// Number of bulleted paragraphs.
    pub fn bullet_count(&self) -> usize {
        self.paragraphs().filter(|p| p.is_bullet()).count()
    }

    /// Check if the layout has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content, one block per line.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A top-level block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph
    Paragraph(Paragraph),

    /// A table
    Table(Table),
}

impl Block {
    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Table(t) => t.plain_text(),
        }
    }

    /// Get the paragraph, if this block is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        }
    }

    /// Get the table, if this block is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            Block::Paragraph(_) => None,
        }
    }
}

/// Page size and margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    /// Paper size
    pub size: PageSize,

    /// Page margins
    pub margins: Margins,
}

impl PageSetup {
    /// Width available between the left and right margins.
    pub fn content_width(&self) -> f32 {
        (self.size.width - self.margins.left - self.margins.right).max(0.0)
    }
}

/// Paper size in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,
}

impl PageSize {
    /// Standard Letter size (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
        }
    }

    /// Standard A4 size (210 x 297 mm).
    pub fn a4() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::letter()
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: f32,
    /// Right margin
    pub right: f32,
    /// Bottom margin
    pub bottom: f32,
    /// Left margin
    pub left: f32,
}

impl Margins {
    /// The same margin on all four sides.
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Margins given in inches.
    pub fn inches(value: f32) -> Self {
        Self::uniform(value * 72.0)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::inches(0.75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Color, TextRun, TextStyle};

    fn banner(title: &str) -> Table {
        let p = Paragraph::new().run(TextRun::new(title, TextStyle::default()));
        Table::banner(504.0, Color::WHITE, p)
    }

    #[test]
    fn test_content_width() {
        let page = PageSetup {
            size: PageSize::letter(),
            margins: Margins::inches(0.75),
        };
        assert_eq!(page.content_width(), 504.0);

        let wide = PageSetup {
            size: PageSize::letter(),
            margins: Margins {
                left: 36.0,
                right: 72.0,
                ..Margins::uniform(0.0)
            },
        };
        assert_eq!(wide.content_width(), 504.0);
    }

    #[test]
    fn test_layout_queries() {
        let mut layout = Layout::new(PageSetup {
            size: PageSize::a4(),
            margins: Margins::default(),
        });
        assert!(layout.is_empty());

        layout.add_table(banner("SKILLS"));
        layout.add_paragraph(Paragraph::spacer(6.0));
        layout.add_table(banner("EDUCATION"));
        layout.add_paragraph(Paragraph::with_style(
            crate::layout::ParagraphStyle::default().bulleted(),
        ));

        assert_eq!(layout.banner_titles(), vec!["SKILLS", "EDUCATION"]);
        assert_eq!(layout.tables().count(), 2);
        assert_eq!(layout.paragraphs().count(), 2);
        assert_eq!(layout.bullet_count(), 1);
        assert!(layout.blocks[0].as_table().is_some());
        assert!(layout.blocks[1].as_paragraph().is_some());
    }
}
