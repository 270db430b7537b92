//! Thin XML emitter over quick-xml plus OOXML unit conversions.

use crate::error::Result;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// WordprocessingML main namespace.
pub(crate) const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Office document relationships namespace.
pub(crate) const R_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Streaming writer for one XML part.
pub(crate) struct XmlSink {
    writer: Writer<Vec<u8>>,
}

impl XmlSink {
    /// Start a standalone UTF-8 part.
    pub(crate) fn new() -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(Self { writer })
    }

    pub(crate) fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.writer.write_event(Event::Start(element(name, attrs)))?;
        Ok(())
    }

    pub(crate) fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.writer.write_event(Event::Empty(element(name, attrs)))?;
        Ok(())
    }

    pub(crate) fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Write character data, escaping only `<`, `>` and `&`.
    pub(crate) fn text(&mut self, text: &str) -> Result<()> {
        let escaped = partial_escape(text);
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(escaped)))?;
        Ok(())
    }

    /// Write `<name attrs>text</name>`.
    pub(crate) fn text_element(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> Result<()> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

fn element<'a>(name: &'a str, attrs: &[(&'a str, &'a str)]) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for &attr in attrs {
        start.push_attribute(attr);
    }
    start
}

/// Points to twentieths of a point (twips).
pub(crate) fn twips(points: f32) -> String {
    ((points * 20.0).round() as i64).to_string()
}

/// Points to half-points, the unit of `w:sz`.
pub(crate) fn half_points(points: f32) -> String {
    ((points * 2.0).round().max(1.0) as u32).to_string()
}

/// Points to eighths of a point, the unit of border `w:sz` (minimum 2).
pub(crate) fn eighth_points(points: f32) -> String {
    ((points * 8.0).round().max(2.0) as u32).to_string()
}

/// Drop characters that XML 1.0 does not allow.
pub(crate) fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|&c| {
            matches!(c, '\t' | '\n' | '\r')
                || (c >= '\u{20}' && c != '\u{FFFE}' && c != '\u{FFFF}')
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(twips(54.0), "1080");
        assert_eq!(twips(504.0), "10080");
        assert_eq!(twips(0.0), "0");
        assert_eq!(half_points(22.0), "44");
        assert_eq!(half_points(10.5), "21");
        assert_eq!(eighth_points(0.75), "6");
        assert_eq!(eighth_points(0.0), "2");
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("a\u{0}b\u{8}c"), "abc");
        assert_eq!(sanitize("tab\tline\n"), "tab\tline\n");
        assert_eq!(sanitize("Café – ok"), "Café – ok");
    }

    #[test]
    fn test_sink_escapes() {
        let mut xml = XmlSink::new().unwrap();
        xml.start("w:t", &[("xml:space", "preserve")]).unwrap();
        xml.text("R&D <lead> Master's").unwrap();
        xml.end("w:t").unwrap();
        xml.empty("w:b", &[]).unwrap();

        let out = String::from_utf8(xml.finish()).unwrap();
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
        assert!(out.contains("<w:t xml:space=\"preserve\">R&amp;D &lt;lead&gt; Master's</w:t>"));
        assert!(out.contains("<w:b/>"));
    }
}
