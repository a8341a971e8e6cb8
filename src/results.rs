//! Session results record
//!
//! Flat append-only CSV, one row per finished session:
//! `age,name,hits,fastest_speed,elapsed_seconds`. No header row is written or
//! expected, and rows from earlier sessions are never rewritten.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::error::ExportError;

/// Who played the session (free text, exported verbatim)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub age: String,
}

impl Player {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }
}

/// One finished session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub age: String,
    pub name: String,
    pub hits: u32,
    /// Rounded to 2 decimals
    pub fastest_speed: f64,
    /// Whole seconds, truncated
    pub elapsed_seconds: u64,
}

impl SessionRecord {
    pub fn new(player: &Player, hits: u32, fastest_speed: f32, elapsed: Duration) -> Self {
        Self {
            age: player.age.clone(),
            name: player.name.clone(),
            hits,
            fastest_speed: round_to_hundredths(fastest_speed as f64),
            elapsed_seconds: elapsed.as_secs(),
        }
    }

    /// The CSV line for this record (no terminator)
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{}",
            escape_field(&self.age),
            escape_field(&self.name),
            self.hits,
            self.fastest_speed,
            self.elapsed_seconds
        )
    }

    /// Build a record from the fields of the row starting at `line`
    fn from_fields(fields: Vec<String>, line: usize) -> Result<Self, ExportError> {
        let malformed = |reason: String| ExportError::Malformed { line, reason };

        let [age, name, hits, fastest, elapsed]: [String; 5] = fields
            .try_into()
            .map_err(|f: Vec<String>| malformed(format!("expected 5 fields, found {}", f.len())))?;

        Ok(Self {
            age,
            name,
            hits: hits
                .parse()
                .map_err(|_| malformed(format!("bad hit count {hits:?}")))?,
            fastest_speed: fastest
                .parse()
                .map_err(|_| malformed(format!("bad fastest speed {fastest:?}")))?,
            elapsed_seconds: elapsed
                .parse()
                .map_err(|_| malformed(format!("bad elapsed seconds {elapsed:?}")))?,
        })
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Quote a field when it holds a separator, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Fields of one CSV row and the line it starts on
#[derive(Debug, PartialEq)]
struct RawRow {
    line: usize,
    fields: Vec<String>,
}

/// Split CSV text into rows, honoring quoted fields (which may span lines)
///
/// Rows end at `\n` or `\r\n` outside quotes. Blank rows are dropped.
fn split_rows(contents: &str) -> Result<Vec<RawRow>, ExportError> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_start = 1;
    let mut chars = contents.chars().peekable();

    let mut finish_row = |fields: &mut Vec<String>, field: &mut String, start: usize| {
        fields.push(std::mem::take(field));
        let fields = std::mem::take(fields);
        let blank = fields.len() == 1 && fields[0].trim().is_empty();
        if !blank {
            rows.push(RawRow {
                line: start,
                fields,
            });
        }
    };

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.is_empty() => in_quotes = true,
            (',', false) => fields.push(std::mem::take(&mut field)),
            ('\r', false) if matches!(chars.peek(), Some(&'\n') | None) => {}
            ('\n', false) => {
                finish_row(&mut fields, &mut field, row_start);
                line += 1;
                row_start = line;
            }
            ('\n', true) => {
                field.push('\n');
                line += 1;
            }
            (c, _) => field.push(c),
        }
    }

    if in_quotes {
        return Err(ExportError::Malformed {
            line: row_start,
            reason: "unterminated quoted field".to_string(),
        });
    }
    if !fields.is_empty() || !field.is_empty() {
        finish_row(&mut fields, &mut field, row_start);
    }
    Ok(rows)
}

/// Append one record to `path`, creating the file if absent
pub fn append_record(path: &Path, record: &SessionRecord) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;

    // Single write call per row
    let line = format!("{}\r\n", record.to_csv_row());
    file.write_all(line.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;

    log::info!("Session result appended to {}", path.display());
    Ok(())
}

/// Read every record in `path`
///
/// Blank lines are skipped. Malformed rows are reported by the line they start on.
pub fn load_records(path: &Path) -> Result<Vec<SessionRecord>, ExportError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    split_rows(&contents)?
        .into_iter()
        .map(|row| SessionRecord::from_fields(row.fields, row.line))
        .collect()
}
