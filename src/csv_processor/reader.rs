use crate::utils::{MapTransformError, Result};
use csv::StringRecord;
use std::path::PathBuf;

/// Reads a headerless, comma-delimited map file. Rows may differ in width.
pub struct MapReader {
    path: PathBuf,
}

impl MapReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// One record per input line, blank lines included.
    pub fn read_records(&self) -> Result<Vec<StringRecord>> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| MapTransformError::from_open(e, &self.path))?;
        parse_records(&text)
    }
}

/// A blank line yields an empty record so that output rows stay aligned with
/// input lines.
pub fn parse_records(text: &str) -> Result<Vec<StringRecord>> {
    split_records(text)?.into_iter().map(parse_record).collect()
}

fn parse_record(line: &str) -> Result<StringRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(record)
}

/// Splits on newlines outside quoted fields. A quote only opens a field when
/// it is the field's first character, matching how the record parser reads it.
fn split_records(text: &str) -> Result<Vec<&str>> {
    let bytes = text.as_bytes();
    let mut records = Vec::new();
    let mut start = 0;
    let mut line = 1;
    let mut field_start = true;
    let mut open_quote: Option<usize> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if open_quote.is_some() {
            if b == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    open_quote = None;
                }
            } else if b == b'\n' {
                line += 1;
            }
        } else {
            match b {
                b'"' if field_start => open_quote = Some(line),
                b',' => {
                    field_start = true;
                    i += 1;
                    continue;
                }
                b'\n' => {
                    records.push(strip_cr(&text[start..i]));
                    start = i + 1;
                    line += 1;
                    field_start = true;
                    i += 1;
                    continue;
                }
                _ => {}
            }
            field_start = false;
        }
        i += 1;
    }

    if let Some(line) = open_quote {
        return Err(MapTransformError::MalformedQuoting { line });
    }
    if start < bytes.len() {
        records.push(strip_cr(&text[start..]));
    }
    Ok(records)
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
