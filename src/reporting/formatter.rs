//! Text encodings used by the report writers
//!
//! JSON cells and files use `", "` / `": "` separators and escape every
//! non-ASCII character as `\uXXXX`. CSV output is comma separated with
//! `\r\n` record terminators and minimal quoting.

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::core::constants::defaults::JSON_INDENT;
use crate::core::error::{ExtractError, Result};

use std::borrow::Cow;
use std::io;

/// Single-line JSON with a space after each `,` and `:`
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Wraps another formatter and escapes non-ASCII characters in strings.
///
/// Characters outside the Basic Multilingual Plane become a surrogate pair.
#[derive(Debug, Clone)]
pub struct AsciiFormatter<F> {
    inner: F,
}

impl<F: Formatter> AsciiFormatter<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: Formatter> Formatter for AsciiFormatter<F> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}

fn to_string_with<T, F>(value: &T, formatter: F) -> Result<String>
where
    T: ?Sized + Serialize,
    F: Formatter,
{
    let mut buffer: Vec<u8> = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(buffer)
        .map_err(|e| ExtractError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Render a value on one line, e.g. `{"q": "sushi"}`
pub fn to_compact_string<T: ?Sized + Serialize>(value: &T) -> Result<String> {
    to_string_with(value, AsciiFormatter::new(SpacedFormatter))
}

/// Render a value across lines with 4-space indentation
pub fn to_pretty_string<T: ?Sized + Serialize>(value: &T) -> Result<String> {
    to_string_with(
        value,
        AsciiFormatter::new(PrettyFormatter::with_indent(JSON_INDENT)),
    )
}

/// A row of a CSV export
pub trait CsvRecord {
    fn fields(&self) -> Vec<&str>;
}

impl CsvRecord for String {
    fn fields(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

pub trait FormatCsv {
    fn format<R: CsvRecord>(&self, headers: &[&str], records: &[R]) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvFormatter;

impl FormatCsv for CsvFormatter {
    fn format<R: CsvRecord>(&self, headers: &[&str], records: &[R]) -> String {
        let mut output = String::new();
        Self::push_row(&mut output, headers);
        for record in records {
            Self::push_row(&mut output, &record.fields());
        }
        output
    }
}

impl CsvFormatter {
    const DELIMITER: char = ',';
    const TERMINATOR: &'static str = "\r\n";

    fn push_row(output: &mut String, fields: &[&str]) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                output.push(Self::DELIMITER);
            }
            output.push_str(&Self::escape_field(field));
        }
        output.push_str(Self::TERMINATOR);
    }

    /// Quote a field only when it holds a delimiter, quote or line break
    fn escape_field(field: &str) -> Cow<'_, str> {
        if field.contains([Self::DELIMITER, '"', '\r', '\n']) {
            Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(field)
        }
    }
}
