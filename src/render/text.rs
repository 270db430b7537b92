//! Plain text preview of a laid-out resume.

use crate::layout::{Alignment, Block, Layout, Paragraph, Table};

/// Default preview width in characters.
pub const DEFAULT_TEXT_WIDTH: usize = 72;

/// Convert a layout to a plain text preview.
pub fn to_text(layout: &Layout) -> String {
    to_text_with_width(layout, DEFAULT_TEXT_WIDTH)
}

/// Convert a layout to a plain text preview of the given width.
///
/// Banners become centered titles padded with `=`, the header rule a line
/// of dashes, bullets are prefixed with `•` and job rows put the date flush
/// right.
pub fn to_text_with_width(layout: &Layout, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    for block in &layout.blocks {
        match block {
            Block::Paragraph(p) => lines.push(paragraph_line(p, width)),
            Block::Table(t) if t.is_banner() => {
                lines.push(format!("{:=^width$}", format!(" {} ", t.plain_text())));
            }
            Block::Table(t) => lines.push(row_line(t, width)),
        }
    }

    collapse_blank_lines(&lines).trim().to_string()
}

fn paragraph_line(para: &Paragraph, width: usize) -> String {
    if para.is_rule() {
        return "-".repeat(width);
    }

    let text = para.plain_text();
    if para.is_bullet() {
        return format!("  • {}", text);
    }

    match para.style.alignment {
        Alignment::Center => format!("{:^width$}", text).trim_end().to_string(),
        Alignment::Right => format!("{:>width$}", text),
        Alignment::Left | Alignment::Justify => text,
    }
}

fn row_line(table: &Table, width: usize) -> String {
    table
        .rows
        .iter()
        .map(|row| {
            let texts: Vec<String> = row.cells.iter().map(|c| c.plain_text()).collect();
            match texts.as_slice() {
                [left, right] => {
                    let used = left.chars().count() + right.chars().count();
                    let gap = width.saturating_sub(used).max(1);
                    format!("{}{}{}", left, " ".repeat(gap), right)
                }
                _ => texts.join("  "),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_blank_lines(lines: &[String]) -> String {
    let mut output = String::new();
    let mut previous_blank = false;

    for line in lines {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        output.push_str(if blank { "" } else { line });
        output.push('\n');
        previous_blank = blank;
    }

    output
}
