/// CSV encoding and decoding for the commands file
///
/// The file has a `Command,Description` header and one record per row.
/// Columns are found by header name, so their order does not matter and
/// extra columns are ignored.

use crate::error::{CommandsError, Result};
use crate::store::models::{CsvRow, Record, DESCRIPTION_COLUMN, NAME_COLUMN};
use csv::{ReaderBuilder, Terminator, WriterBuilder};

/// Header row written to a fresh file
pub const HEADER: [&str; 2] = [NAME_COLUMN, DESCRIPTION_COLUMN];

/// Parse the full contents of a commands file
///
/// Empty input is an empty list. Anything else needs a header with both
/// columns, and every row needs a non-empty value in each.
pub fn decode(bytes: &[u8]) -> Result<Vec<Record>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    // Flexible so short rows reach us and get reported with their line number
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers = reader.headers()?.clone();
    for column in HEADER {
        if !headers.iter().any(|h| h == column) {
            return Err(CommandsError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    let mut last_line = 1;
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line() as usize).unwrap_or(0);
        last_line = line;

        let raw: CsvRow = row
            .deserialize(Some(&headers))
            .map_err(|e| CommandsError::MalformedRow {
                row: line,
                reason: e.to_string(),
            })?;

        let record = Record::try_from(raw).map_err(|e| CommandsError::MalformedRow {
            row: line,
            reason: e.to_string(),
        })?;

        records.push(record);
    }

    // The reader accepts an open quote at end of input; an append after it
    // would land inside that field
    if ends_inside_quotes(bytes) {
        return Err(CommandsError::MalformedRow {
            row: last_line,
            reason: "unterminated quoted field".to_string(),
        });
    }

    Ok(records)
}

/// Whether `bytes` finishes in the middle of a quoted field
///
/// A quote only opens a field when it is the field's first byte, the same
/// rule the reader applies. Doubled quotes inside a field are escapes.
fn ends_inside_quotes(bytes: &[u8]) -> bool {
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_quotes {
            if b == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    in_quotes = false;
                }
            }
            at_field_start = false;
        } else {
            match b {
                b',' | b'\n' | b'\r' => at_field_start = true,
                b'"' if at_field_start => {
                    in_quotes = true;
                    at_field_start = false;
                }
                _ => at_field_start = false,
            }
        }
        i += 1;
    }

    in_quotes
}

/// Encode one record as a CSV row, optionally preceded by the header
pub fn encode_row(record: &Record, with_header: bool) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    if with_header {
        writer.write_record(HEADER)?;
    }
    writer.write_record([record.name(), record.description()])?;

    writer
        .into_inner()
        .map_err(|e| CommandsError::Io(e.into_error()))
}
