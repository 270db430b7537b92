//! The `word/document.xml` part.

use super::parts::BULLET_STYLE_ID;
use super::xml::{eighth_points, half_points, sanitize, twips, XmlSink, R_NS, W_NS};
use crate::error::Result;
use crate::layout::{
    Alignment, Block, CellBorders, Layout, PageSetup, Paragraph, ParagraphStyle, Table,
    TableCell, TextRun,
};

/// Serialize the block tree and page setup.
pub(crate) fn document(layout: &Layout) -> Result<Vec<u8>> {
    let mut xml = XmlSink::new()?;
    xml.start("w:document", &[("xmlns:w", W_NS), ("xmlns:r", R_NS)])?;
    xml.start("w:body", &[])?;

    for block in &layout.blocks {
        match block {
            Block::Paragraph(p) => write_paragraph(&mut xml, p)?,
            Block::Table(t) => write_table(&mut xml, t)?,
        }
    }

    // Word rejects a body whose last block before sectPr is a table.
    if !matches!(layout.blocks.last(), Some(Block::Paragraph(_))) {
        write_paragraph(&mut xml, &Paragraph::new())?;
    }

    write_section_properties(&mut xml, &layout.page)?;

    xml.end("w:body")?;
    xml.end("w:document")?;
    Ok(xml.finish())
}

fn write_paragraph(xml: &mut XmlSink, para: &Paragraph) -> Result<()> {
    xml.start("w:p", &[])?;
    write_paragraph_properties(xml, &para.style)?;
    for run in &para.runs {
        write_run(xml, run)?;
    }
    xml.end("w:p")
}

fn write_paragraph_properties(xml: &mut XmlSink, style: &ParagraphStyle) -> Result<()> {
    xml.start("w:pPr", &[])?;

    if style.bullet {
        xml.empty("w:pStyle", &[("w:val", BULLET_STYLE_ID)])?;
    }

    if let Some(border) = style.bottom_border {
        let size = eighth_points(border.width);
        let space = (border.space.round() as u32).to_string();
        let color = border.color.to_hex();
        xml.start("w:pBdr", &[])?;
        xml.empty(
            "w:bottom",
            &[
                ("w:val", "single"),
                ("w:sz", size.as_str()),
                ("w:space", space.as_str()),
                ("w:color", color.as_str()),
            ],
        )?;
        xml.end("w:pBdr")?;
    }

    let before = twips(style.space_before);
    let after = twips(style.space_after);
    xml.empty(
        "w:spacing",
        &[("w:before", before.as_str()), ("w:after", after.as_str())],
    )?;

    if style.alignment != Alignment::Left {
        xml.empty("w:jc", &[("w:val", justification(style.alignment))])?;
    }

    xml.end("w:pPr")
}

fn write_run(xml: &mut XmlSink, run: &TextRun) -> Result<()> {
    let style = &run.style;
    let font = style.font.as_str();
    let size = half_points(style.size);
    let color = style.color.to_hex();

    xml.start("w:r", &[])?;
    xml.start("w:rPr", &[])?;
    xml.empty(
        "w:rFonts",
        &[("w:ascii", font), ("w:hAnsi", font), ("w:cs", font)],
    )?;
    if style.bold {
        xml.empty("w:b", &[])?;
    }
    if style.italic {
        xml.empty("w:i", &[])?;
    }
    xml.empty("w:color", &[("w:val", color.as_str())])?;
    xml.empty("w:sz", &[("w:val", size.as_str())])?;
    xml.empty("w:szCs", &[("w:val", size.as_str())])?;
    xml.end("w:rPr")?;

    let text = sanitize(&run.text).replace('\r', "");
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            xml.empty("w:br", &[])?;
        }
        xml.text_element("w:t", &[("xml:space", "preserve")], line)?;
    }

    xml.end("w:r")
}

fn write_table(xml: &mut XmlSink, table: &Table) -> Result<()> {
    let width = twips(table.width());

    xml.start("w:tbl", &[])?;
    xml.start("w:tblPr", &[])?;
    xml.empty("w:tblW", &[("w:w", width.as_str()), ("w:type", "dxa")])?;
    if let Some(alignment) = table.alignment {
        xml.empty("w:jc", &[("w:val", justification(alignment))])?;
    }
    xml.empty("w:tblLayout", &[("w:type", "fixed")])?;
    xml.end("w:tblPr")?;

    xml.start("w:tblGrid", &[])?;
    for column in &table.columns {
        let w = twips(*column);
        xml.empty("w:gridCol", &[("w:w", w.as_str())])?;
    }
    xml.end("w:tblGrid")?;

    for row in &table.rows {
        xml.start("w:tr", &[])?;
        for cell in &row.cells {
            write_cell(xml, cell)?;
        }
        xml.end("w:tr")?;
    }

    xml.end("w:tbl")
}

fn write_cell(xml: &mut XmlSink, cell: &TableCell) -> Result<()> {
    let width = twips(cell.width);

    xml.start("w:tc", &[])?;
    xml.start("w:tcPr", &[])?;
    xml.empty("w:tcW", &[("w:w", width.as_str()), ("w:type", "dxa")])?;
    if cell.borders == CellBorders::Hidden {
        xml.start("w:tcBorders", &[])?;
        for side in ["w:top", "w:left", "w:bottom", "w:right"] {
            xml.empty(side, &[("w:val", "nil")])?;
        }
        xml.end("w:tcBorders")?;
    }
    if let Some(fill) = cell.shading {
        let fill = fill.to_hex();
        xml.empty(
            "w:shd",
            &[
                ("w:val", "clear"),
                ("w:color", "auto"),
                ("w:fill", fill.as_str()),
            ],
        )?;
    }
    xml.end("w:tcPr")?;

    // A cell must end with a paragraph.
    if cell.paragraphs.is_empty() {
        write_paragraph(xml, &Paragraph::new())?;
    }
    for para in &cell.paragraphs {
        write_paragraph(xml, para)?;
    }

    xml.end("w:tc")
}

fn write_section_properties(xml: &mut XmlSink, page: &PageSetup) -> Result<()> {
    let width = twips(page.size.width);
    let height = twips(page.size.height);
    let top = twips(page.margins.top);
    let right = twips(page.margins.right);
    let bottom = twips(page.margins.bottom);
    let left = twips(page.margins.left);

    xml.start("w:sectPr", &[])?;
    xml.empty(
        "w:pgSz",
        &[("w:w", width.as_str()), ("w:h", height.as_str())],
    )?;
    xml.empty(
        "w:pgMar",
        &[
            ("w:top", top.as_str()),
            ("w:right", right.as_str()),
            ("w:bottom", bottom.as_str()),
            ("w:left", left.as_str()),
            ("w:header", "720"),
            ("w:footer", "720"),
            ("w:gutter", "0"),
        ],
    )?;
    xml.end("w:sectPr")
}

fn justification(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justify => "both",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Border, Color, Margins, PageSize, TextStyle};

    fn page() -> PageSetup {
        PageSetup {
            size: PageSize::letter(),
            margins: Margins::inches(0.75),
        }
    }

    fn render(layout: &Layout) -> String {
        String::from_utf8(document(layout).unwrap()).unwrap()
    }

    #[test]
    fn test_section_properties() {
        let mut layout = Layout::new(page());
        layout.add_paragraph(Paragraph::new());
        let xml = render(&layout);

        assert!(xml.contains("<w:pgSz w:w=\"12240\" w:h=\"15840\"/>"));
        assert!(xml.contains("w:top=\"1080\" w:right=\"1080\" w:bottom=\"1080\" w:left=\"1080\""));
    }

    #[test]
    fn test_run_properties() {
        let mut layout = Layout::new(page());
        let style = TextStyle::new("Calibri", 11.0)
            .bold()
            .italic()
            .with_color(Color::rgb(0x5B, 0x9B, 0xD5));
        layout.add_paragraph(Paragraph::new().run(TextRun::new(" 2022 – Present ", style)));
        let xml = render(&layout);

        assert!(xml.contains("<w:b/><w:i/><w:color w:val=\"5B9BD5\"/><w:sz w:val=\"22\"/>"));
        assert!(xml.contains("<w:t xml:space=\"preserve\"> 2022 – Present </w:t>"));
    }

    #[test]
    fn test_line_breaks_in_run() {
        let mut layout = Layout::new(page());
        layout.add_paragraph(
            Paragraph::new().run(TextRun::new("one\r\ntwo", TextStyle::default())),
        );
        let xml = render(&layout);
        assert!(xml.contains(
            "<w:t xml:space=\"preserve\">one</w:t><w:br/><w:t xml:space=\"preserve\">two</w:t>"
        ));
    }

    #[test]
    fn test_bottom_border_and_bullet() {
        let mut layout = Layout::new(page());
        layout.add_paragraph(Paragraph::with_style(
            ParagraphStyle::spacing(6.0, 6.0).with_bottom_border(Border::thin(Color::BLACK)),
        ));
        layout.add_paragraph(Paragraph::with_style(
            ParagraphStyle::spacing(0.0, 2.0).bulleted(),
        ));
        let xml = render(&layout);

        assert!(xml.contains(
            "<w:bottom w:val=\"single\" w:sz=\"6\" w:space=\"1\" w:color=\"000000\"/>"
        ));
        assert!(xml.contains("<w:spacing w:before=\"120\" w:after=\"120\"/>"));
        assert!(xml.contains("<w:pStyle w:val=\"ListBullet\"/>"));
        assert!(xml.contains("<w:spacing w:before=\"0\" w:after=\"40\"/>"));
    }

    #[test]
    fn test_banner_table() {
        let mut layout = Layout::new(page());
        let content = Paragraph::with_style(ParagraphStyle::default().with_alignment(Alignment::Center))
            .run(TextRun::new("SKILLS", TextStyle::default().bold()));
        layout.add_table(Table::banner(504.0, Color::rgb(0xDE, 0xEA, 0xF6), content));
        let xml = render(&layout);

        assert!(xml.contains("<w:tblW w:w=\"10080\" w:type=\"dxa\"/><w:jc w:val=\"center\"/>"));
        assert!(xml.contains("<w:gridCol w:w=\"10080\"/>"));
        assert!(xml.contains("<w:top w:val=\"nil\"/><w:left w:val=\"nil\"/>"));
        assert!(xml.contains("<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"DEEAF6\"/>"));
        // trailing paragraph after the table
        assert!(xml.contains("</w:tbl><w:p><w:pPr>"));
    }

    #[test]
    fn test_empty_cell_gets_paragraph() {
        let mut layout = Layout::new(page());
        let mut table = Table::new(vec![100.0]);
        table.add_row(crate::layout::TableRow::new(vec![TableCell::new(100.0, vec![])]));
        layout.add_table(table);
        let xml = render(&layout);
        assert!(xml.contains("</w:tcPr><w:p>"));
        assert!(!xml.contains("w:tcBorders"));
    }
}
