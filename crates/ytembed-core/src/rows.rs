//! Readers for author rows: the text cells of a block, one row per line.
//!
//! Two file formats are accepted. JSON is an array of arrays of strings.
//! Anything else is read as TSV: one row per non-blank line, cells split on
//! tabs.

use anyhow::{Context, Result};
use std::path::Path;

/// One row of text cells.
pub type Row = Vec<String>;

/// Parses tab-separated rows. Blank lines are skipped.
pub fn parse_tsv(text: &str) -> Vec<Row> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

/// Parses a JSON array of string arrays.
pub fn parse_json(text: &str) -> Result<Vec<Row>> {
    serde_json::from_str(text).context("rows JSON must be an array of string arrays")
}

/// Reads rows from `path`, as JSON when the extension is `.json` and as TSV
/// otherwise.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read rows file: {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let rows = if is_json {
        parse_json(&text).with_context(|| format!("parse rows file: {}", path.display()))?
    } else {
        parse_tsv(&text)
    };
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded rows");
    Ok(rows)
}

/// Turns a `name=value` assignment into a two-cell row.
///
/// Text without `=` becomes a one-cell row, which parameter building skips.
pub fn row_from_assignment(assignment: &str) -> Row {
    match assignment.split_once('=') {
        Some((name, value)) => vec![name.to_string(), value.to_string()],
        None => vec![assignment.to_string()],
    }
}
