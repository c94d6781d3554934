//! SVG document helpers: viewbox extraction and cut-line embedding.
//!
//! The generator never parses shape geometry; it only needs the document
//! viewbox to build the pixel-to-vector map, and a way to write the
//! finished cuts back into the original document. Embedding streams the
//! document through quick-xml and injects a line group just before the
//! root close tag, leaving everything else untouched.

use std::fmt;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::geometry::Line;
use crate::scale::Viewbox;

/// Stroke color for embedded cut lines, distinct from source geometry.
pub const CUT_COLOR: &str = "#ff0000";

/// Error type for SVG document handling.
#[derive(Debug)]
pub enum SvgError {
    /// The document carries no viewBox attribute.
    MissingViewbox,
    /// The document or its viewBox value could not be understood.
    Malformed(String),
    /// The XML stream failed to parse or serialize.
    Xml(String),
}

impl fmt::Display for SvgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgError::MissingViewbox => write!(f, "SVG document has no viewBox attribute"),
            SvgError::Malformed(msg) => write!(f, "malformed SVG: {}", msg),
            SvgError::Xml(msg) => write!(f, "XML error: {}", msg),
        }
    }
}

impl std::error::Error for SvgError {}

/// Extract the document viewbox.
///
/// Accepts both `viewBox` and the occasional lowercase `viewbox`; the
/// value itself is parsed with svgtypes, so number formats follow the
/// SVG spec.
pub fn extract_viewbox(svg: &str) -> Result<Viewbox, SvgError> {
    let value = find_viewbox_value(svg).ok_or(SvgError::MissingViewbox)?;

    let parsed: svgtypes::ViewBox = value
        .parse()
        .map_err(|e| SvgError::Malformed(format!("viewBox \"{}\": {:?}", value, e)))?;

    Viewbox::new(parsed.x, parsed.y, parsed.w, parsed.h)
        .map_err(|e| SvgError::Malformed(e.to_string()))
}

/// Locate the raw viewBox attribute value.
fn find_viewbox_value(svg: &str) -> Option<&str> {
    for needle in ["viewBox=\"", "viewbox=\""] {
        if let Some(start) = svg.find(needle) {
            let rest = &svg[start + needle.len()..];
            if let Some(end) = rest.find('"') {
                return Some(&rest[..end]);
            }
        }
    }
    None
}

/// Embed cut lines into the original document.
///
/// Streams the document and writes a `<g>` of `<line>` elements directly
/// before the root `</svg>`, so all original geometry, styles, and
/// attributes survive verbatim. A self-closing root is reopened to hold
/// the group; a document without a root close tag is malformed.
pub fn embed_cut_lines(svg: &str, lines: &[Line], color: &str) -> Result<String, SvgError> {
    let mut reader = Reader::from_str(svg);
    let mut writer = Writer::new(Vec::new());

    let mut depth = 0usize;
    let mut injected = false;

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"svg" {
                    depth += 1;
                }
                write(&mut writer, Event::Start(e))?;
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"svg" {
                    depth = depth.saturating_sub(1);
                    if depth == 0 && !injected {
                        write_cut_group(&mut writer, lines, color)?;
                        injected = true;
                    }
                }
                write(&mut writer, Event::End(e))?;
            }
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"svg" && depth == 0 && !injected {
                    // Self-closing root: reopen it to hold the cuts.
                    write(&mut writer, Event::Start(e.into_owned()))?;
                    write_cut_group(&mut writer, lines, color)?;
                    write(&mut writer, Event::End(BytesEnd::new("svg")))?;
                    injected = true;
                } else {
                    write(&mut writer, Event::Empty(e))?;
                }
            }
            Ok(event) => write(&mut writer, event)?,
            Err(e) => return Err(SvgError::Xml(e.to_string())),
        }
    }

    if !injected {
        return Err(SvgError::Malformed("no root </svg> to embed into".to_string()));
    }

    String::from_utf8(writer.into_inner())
        .map_err(|e| SvgError::Xml(e.to_string()))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), SvgError> {
    writer
        .write_event(event)
        .map_err(|e| SvgError::Xml(e.to_string()))
}

fn write_cut_group(
    writer: &mut Writer<Vec<u8>>,
    lines: &[Line],
    color: &str,
) -> Result<(), SvgError> {
    let mut group = BytesStart::new("g");
    group.push_attribute(("id", "kerf-cuts"));
    group.push_attribute(("stroke", color));
    group.push_attribute(("stroke-width", "0.5"));
    group.push_attribute(("fill", "none"));
    write(writer, Event::Start(group))?;

    for line in lines {
        let mut el = BytesStart::new("line");
        el.push_attribute(("x1", format!("{:.2}", line.x1).as_str()));
        el.push_attribute(("y1", format!("{:.2}", line.y1).as_str()));
        el.push_attribute(("x2", format!("{:.2}", line.x2).as_str()));
        el.push_attribute(("y2", format!("{:.2}", line.y2).as_str()));
        write(writer, Event::Empty(el))?;
    }

    write(writer, Event::End(BytesEnd::new("g")))
}
