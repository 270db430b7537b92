//! Layout primitives emitted by the renderer.
//!
//! This module defines the format-neutral block tree that sits between the
//! resume model and the document writer: paragraphs made of styled runs,
//! tables with per-cell shading and border control, and the page setup.
//! Lengths are in points (1 point = 1/72 inch).

mod color;
mod page;
mod paragraph;
mod table;

pub use color::Color;
pub use page::{Block, Layout, Margins, PageSetup, PageSize};
pub use paragraph::{Alignment, Border, Paragraph, ParagraphStyle, TextRun, TextStyle};
pub use table::{CellBorders, Table, TableCell, TableRow};
