//! DBML table and reference parsing
//!
//! Handles the restricted DBML subset used by schema exports: `Table <name> { ... }`
//! blocks with one column per line, and `Ref: a.x > b.y` foreign-key lines.
//!
//! Parsing is best-effort by design: malformed lines are skipped, an unterminated
//! table block is dropped, and the parser never fails. An input with no table
//! blocks yields an empty schema; the pipeline decides whether that is an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Column, Reference, Schema, Table};

/// Matches `Ref: orders.user_id > users.guid` anywhere in the document.
/// References may appear between or inside table blocks; they are collected
/// in a separate pass so block boundaries do not matter.
static REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*Ref:\s*(\w+)\.(\w+)\s*>\s*(\w+)\.(\w+)").unwrap()
});

/// Parse DBML text into a schema.
///
/// Total over all string inputs, including the empty string. Tables and
/// columns are emitted in source order; that order drives the field order of
/// generated request bodies and the folder order of the collection.
pub fn parse_dbml(text: &str) -> Schema {
    let mut tables = Vec::new();
    let mut current: Option<Table> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if current.is_none() {
            if let Some(name) = parse_table_opener(trimmed) {
                current = Some(Table {
                    name,
                    columns: Vec::new(),
                });
            }
            continue;
        }
        if trimmed == "}" {
            if let Some(table) = current.take() {
                tables.push(table);
            }
            continue;
        }
        if let Some(column) = parse_column_line(trimmed) {
            if let Some(table) = current.as_mut() {
                table.columns.push(column);
            }
        }
    }
    // A table opener with no closing brace is malformed; drop it rather than
    // guess where the body ends.

    let refs = REF_RE
        .captures_iter(text)
        .map(|caps| Reference {
            from_table: caps[1].to_string(),
            from_column: caps[2].to_string(),
            to_table: caps[3].to_string(),
            to_column: caps[4].to_string(),
        })
        .collect();

    Schema { tables, refs }
}

/// Recognize a `Table <name> {` line and extract the table name.
///
/// The name is the first whitespace-delimited token after `Table`; the opening
/// brace may be glued to the name (`Table users{`). Nested braces inside table
/// bodies are not supported.
fn parse_table_opener(line: &str) -> Option<String> {
    let rest = line.strip_prefix("Table")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    if !line.ends_with('{') {
        return None;
    }
    let name = rest
        .trim_start()
        .split_whitespace()
        .next()?
        .trim_end_matches('{');
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Parse one body line into a column, or skip it.
///
/// Blank lines, `//` comments, `Note` lines and `Ref:` lines carry no column
/// data. Everything else is `name [type...]`; a missing type defaults to
/// VARCHAR.
fn parse_column_line(line: &str) -> Option<Column> {
    if line.is_empty() || line.starts_with("//") || line.starts_with("Note") {
        return None;
    }
    if line.starts_with("Ref:") {
        return None;
    }
    let mut parts = line.splitn(2, char::is_whitespace);
    let name = parts.next()?;
    let ty = parts
        .next()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("VARCHAR");
    Some(Column {
        name: name.to_string(),
        ty: ty.to_string(),
    })
}
