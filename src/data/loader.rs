use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Dataset, Record};

/// Field separator of the source CSV.
pub const DEFAULT_SEPARATOR: u8 = b';';

/// Column names as they appear in the source file. The capitalized
/// `Publisher` is the one irregularity of the source schema; it is accepted
/// here at the file boundary and normalized away in [`Record`].
const COL_KIND: &str = "type";
const COL_YEAR: &str = "year";
const COL_PUBLISHER: &str = "Publisher";
const COL_KEYWORDS: &str = "keywords";

/// Load-time schema violations.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: invalid year '{value}'")]
    InvalidYear { row: usize, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the bibliographic dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – semicolon-separated with a header row (the study database)
/// * `.json` – records-oriented array, `df.to_json(orient='records')` shape
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path, DEFAULT_SEPARATOR),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse a delimited file with columns `type`, `year`, `Publisher`,
/// `keywords`. Column positions are resolved from the header once; a
/// missing column fails before any row is read.
pub fn load_csv(path: &Path, separator: u8) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(separator)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let kind_idx = column_index(&headers, COL_KIND)?;
    let year_idx = column_index(&headers, COL_YEAR)?;
    let publisher_idx = column_index(&headers, COL_PUBLISHER)?;
    let keywords_idx = column_index(&headers, COL_KEYWORDS)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        records.push(Record {
            kind: row.get(kind_idx).unwrap_or("").to_string(),
            year: parse_year(row.get(year_idx).unwrap_or(""), row_no)?,
            publisher: row.get(publisher_idx).unwrap_or("").to_string(),
            keywords: non_empty(row.get(keywords_idx).unwrap_or("")),
            publisher_group: None,
        });
    }

    log::debug!("parsed {} CSV rows from {}", records.len(), path.display());
    Ok(Dataset { records })
}

fn column_index(headers: &[String], name: &'static str) -> Result<usize, SchemaError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(SchemaError::MissingColumn(name))
}

fn parse_year(s: &str, row: usize) -> Result<i32, SchemaError> {
    s.trim().parse().map_err(|_| SchemaError::InvalidYear {
        row,
        value: s.to_string(),
    })
}

fn non_empty(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "type": "Article",
///     "year": 2021,
///     "Publisher": "IEEE Computer Society",
///     "keywords": "security; iot"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let kind = obj
            .get(COL_KIND)
            .and_then(|v| v.as_str())
            .with_context(|| format!("Row {i}: missing or non-string '{COL_KIND}'"))?
            .to_string();

        let year = json_year(obj.get(COL_YEAR))
            .with_context(|| format!("Row {i}: missing or invalid '{COL_YEAR}'"))?;

        let publisher = obj
            .get(COL_PUBLISHER)
            .and_then(|v| v.as_str())
            .with_context(|| format!("Row {i}: missing or non-string '{COL_PUBLISHER}'"))?
            .to_string();

        let keywords = match obj.get(COL_KEYWORDS) {
            Some(JsonValue::String(s)) => non_empty(s),
            _ => None,
        };

        records.push(Record {
            kind,
            year,
            publisher,
            keywords,
            publisher_group: None,
        });
    }

    log::debug!("parsed {} JSON rows from {}", records.len(), path.display());
    Ok(Dataset { records })
}

fn json_year(val: Option<&JsonValue>) -> Option<i32> {
    match val? {
        JsonValue::Number(n) => n.as_i64().map(|y| y as i32),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
