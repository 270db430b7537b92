//! Table types.

use super::{Alignment, Color, Paragraph};
use serde::{Deserialize, Serialize};

/// A table with fixed column widths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column widths in points
    pub columns: Vec<f32>,

    /// Horizontal placement of the whole table (None = left)
    pub alignment: Option<Alignment>,

    /// Rows in the table
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table with the given column widths.
    pub fn new(columns: Vec<f32>) -> Self {
        Self {
            columns,
            alignment: None,
            rows: Vec::new(),
        }
    }

    /// A centered single-cell table with a shaded background and no borders.
    pub fn banner(width: f32, shading: Color, content: Paragraph) -> Self {
        let cell = TableCell {
            width,
            shading: Some(shading),
            borders: CellBorders::Hidden,
            paragraphs: vec![content],
        };
        Self {
            columns: vec![width],
            alignment: Some(Alignment::Center),
            rows: vec![TableRow::new(vec![cell])],
        }
    }

    /// A single-row table whose cells have no visible borders.
    ///
    /// `cells` pairs each column width with the cell's content.
    pub fn borderless_row(cells: Vec<(f32, Paragraph)>) -> Self {
        let columns = cells.iter().map(|(w, _)| *w).collect();
        let cells = cells
            .into_iter()
            .map(|(width, paragraph)| TableCell {
                width,
                shading: None,
                borders: CellBorders::Hidden,
                paragraphs: vec![paragraph],
            })
            .collect();
        Self {
            columns,
            alignment: None,
            rows: vec![TableRow::new(cells)],
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Total width in points.
    pub fn width(&self) -> f32 {
        self.columns.iter().sum()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table is a shaded single-cell banner.
    pub fn is_banner(&self) -> bool {
        self.rows.len() == 1
            && self.rows[0].cells.len() == 1
            && self.rows[0].cells[0].shading.is_some()
    }

    /// Iterate over all cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &TableCell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Get plain text of the row, cells separated by tabs.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell width in points
    pub width: f32,

    /// Background fill
    pub shading: Option<Color>,

    /// Border handling
    pub borders: CellBorders,

    /// Cell content; a cell always holds at least one paragraph when written
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    /// Create an unshaded cell with default borders.
    pub fn new(width: f32, paragraphs: Vec<Paragraph>) -> Self {
        Self {
            width,
            shading: None,
            borders: CellBorders::Inherit,
            paragraphs,
        }
    }

    /// Get plain text content of the cell.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Cell border handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellBorders {
    /// Use the table style's borders
    #[default]
    Inherit,
    /// Suppress all four borders
    Hidden,
}
