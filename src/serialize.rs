//! Serializers wrapping extracted text into a single-record JSON or CSV document.

use std::fmt::Write;

use serde::Serialize;

use crate::error::{ConvertError, Result};
use crate::models::OutputFormat;

/// The single record every output file holds.
#[derive(Debug, Serialize)]
pub struct Record<'a> {
    pub text: &'a str,
}

/// Serialize `text` in the requested format.
pub fn serialize(format: OutputFormat, text: &str) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(text),
        OutputFormat::Csv => to_csv(text),
    }
}

/// `{"text": ...}` pretty-printed with 4-space indentation, ASCII-only.
///
/// Non-ASCII characters are written as `\uXXXX` escapes (UTF-16 surrogate
/// pairs above the BMP).
pub fn to_json(text: &str) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    Record { text }.serialize(&mut ser)?;
    into_utf8(buf).map(escape_non_ascii)
}

/// Non-ASCII only ever appears inside JSON string literals, so escaping it
/// char by char keeps the document valid.
fn escape_non_ascii(json: String) -> String {
    if json.is_ascii() {
        return json;
    }

    let mut out = String::with_capacity(json.len() + json.len() / 2);
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out
}

/// One `text` column, one data row, `\n` line endings.
pub fn to_csv(text: &str) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.serialize(Record { text })?;
    let buf = wtr.into_inner().map_err(|e| ConvertError::Io(e.into_error()))?;
    into_utf8(buf)
}

fn into_utf8(buf: Vec<u8>) -> Result<String> {
    String::from_utf8(buf)
        .map_err(|e| ConvertError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
