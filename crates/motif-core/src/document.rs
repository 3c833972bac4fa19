//! Indentation-aware markup emission.
//!
//! Every function here writes whole lines to a caller-owned [`io::Write`]
//! sink. Nothing is buffered or retained between calls; the indentation
//! depth is passed to each call and rendered as [`INDENT_UNIT`] repeated
//! `level` times.
//!
//! A complete document is bracketed by [`write_shell_open`] and
//! [`write_shell_end`], with one [`open_canvas`]/[`close_canvas`] pair per
//! drawing region:
//!
//! ```
//! use motif_core::{document, geometry::Size};
//!
//! let mut out = Vec::new();
//! document::write_shell_open(&mut out, "Demo").unwrap();
//! document::open_canvas(&mut out, 1, Size::new(100, 50)).unwrap();
//! document::close_canvas(&mut out, 1).unwrap();
//! document::write_shell_end(&mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("   <svg width=\"100\" height=\"50\">\n"));
//! ```
//!
//! # Escaping
//!
//! Titles and comment text are escaped before interpolation, so markup
//! characters in caller-supplied text cannot break the document structure.
//! Comment text additionally has runs of hyphens split apart, since `--`
//! may not appear inside a markup comment. Lines passed to [`write_line`]
//! are written verbatim.

use std::io;

use quick_xml::escape::escape;

use crate::geometry::Size;

/// The whitespace emitted per indentation level.
pub const INDENT_UNIT: &str = "   ";

/// Comment emitted above every drawing region.
pub const CANVAS_COMMENT: &str = "Define SVG drawing box";

/// Returns the leading whitespace for `level`.
pub fn indent(level: usize) -> String {
    INDENT_UNIT.repeat(level)
}

/// Writes a pre-formatted line at `level`.
pub fn write_line<W: io::Write + ?Sized>(sink: &mut W, level: usize, text: &str) -> io::Result<()> {
    writeln!(sink, "{}{text}", indent(level))
}

/// Writes `text` wrapped in a markup comment at `level`.
pub fn write_comment<W: io::Write + ?Sized>(
    sink: &mut W,
    level: usize,
    text: &str,
) -> io::Result<()> {
    write_line(sink, level, &format!("<!--{}-->", comment_body(text)))
}

/// Escapes `text` for use between `<!--` and `-->`.
///
/// Adjacent hyphens are separated by a space, and a trailing hyphen gets a
/// space after it so it cannot merge with the closing delimiter.
fn comment_body(text: &str) -> String {
    let escaped = escape(text);
    let mut body = String::with_capacity(escaped.len());
    let mut previous = None;
    for ch in escaped.chars() {
        if ch == '-' && previous == Some('-') {
            body.push(' ');
        }
        body.push(ch);
        previous = Some(ch);
    }
    if body.ends_with('-') {
        body.push(' ');
    }
    body
}

/// Opens a drawing region of the given size, preceded by a descriptive comment.
pub fn open_canvas<W: io::Write + ?Sized>(sink: &mut W, level: usize, size: Size) -> io::Result<()> {
    write_comment(sink, level, CANVAS_COMMENT)?;
    write_line(
        sink,
        level,
        &format!(r#"<svg width="{}" height="{}">"#, size.width(), size.height()),
    )
}

/// Closes the drawing region opened by [`open_canvas`].
pub fn close_canvas<W: io::Write + ?Sized>(sink: &mut W, level: usize) -> io::Result<()> {
    write_line(sink, level, "</svg>")
}

/// Writes the document header.
///
/// The second `<head>` line stands where a closing `</head>` would be
/// expected. The output format keeps it as-is.
pub fn write_shell_open<W: io::Write + ?Sized>(sink: &mut W, title: &str) -> io::Result<()> {
    write_line(sink, 0, "<html>")?;
    write_line(sink, 0, "<head>")?;
    write_line(sink, 1, &format!("<title>{}</title>", escape(title)))?;
    write_line(sink, 0, "<head>")?;
    write_line(sink, 0, "<body>")
}

/// Writes the document footer.
pub fn write_shell_end<W: io::Write + ?Sized>(sink: &mut W) -> io::Result<()> {
    write_line(sink, 0, "</body>")?;
    write_line(sink, 0, "</html>")
}
