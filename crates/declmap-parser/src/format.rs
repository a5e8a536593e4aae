//! Line-oriented rendering of a [`SourceIndex`].

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::index::SourceIndex;
use crate::types::DeclarationRecord;

/// Output encoding for an index.
///
/// `Csv` is what editor integrations read; names are written unescaped since
/// Go identifiers never contain commas. `Tsv` and `Jsonl` are delimiter-safe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Jsonl => "jsonl",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "jsonl" | "json-lines" => Ok(Self::Jsonl),
            other => Err(format!(
                "unknown output format `{other}` (expected csv, tsv or jsonl)"
            )),
        }
    }
}

#[derive(Serialize)]
struct PackageHeader<'a> {
    package: &'a str,
}

/// Write the package header followed by the given records.
///
/// # Errors
/// Propagates I/O errors from `out`.
pub fn write_records<'a, W, I>(
    out: &mut W,
    package: &str,
    records: I,
    format: OutputFormat,
) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a DeclarationRecord>,
{
    match format {
        OutputFormat::Csv | OutputFormat::Tsv => writeln!(out, "{package}")?,
        OutputFormat::Jsonl => write_json_line(out, &PackageHeader { package })?,
    }
    for record in records {
        write_record(out, record, format)?;
    }
    Ok(())
}

/// Write a whole index in document order.
///
/// # Errors
/// Propagates I/O errors from `out`.
pub fn write_index<W: Write>(
    out: &mut W,
    index: &SourceIndex,
    format: OutputFormat,
) -> std::io::Result<()> {
    write_records(out, &index.package, &index.declarations, format)
}

fn write_record<W: Write>(
    out: &mut W,
    record: &DeclarationRecord,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Csv => writeln!(
            out,
            "{},{},{},{}",
            record.kind,
            record.start_line,
            record.end_line,
            record.name_or_empty()
        ),
        OutputFormat::Tsv => writeln!(
            out,
            "{}\t{}\t{}\t{}",
            record.kind,
            record.start_line,
            record.end_line,
            record.name_or_empty()
        ),
        OutputFormat::Jsonl => write_json_line(out, record),
    }
}

fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    out.write_all(b"\n")
}

/// Render an index to a string.
///
/// # Errors
/// Propagates serialization errors from the JSONL encoder.
pub fn render_index(index: &SourceIndex, format: OutputFormat) -> std::io::Result<String> {
    let mut buf = Vec::new();
    write_index(&mut buf, index, format)?;
    String::from_utf8(buf).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
