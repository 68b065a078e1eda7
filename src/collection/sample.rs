//! Sample value synthesis for generated request bodies

use chrono::Utc;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::model::Table;
use crate::util::contains_ci;

/// Synthesize a representative example value for a column.
///
/// Resolution is on the declared type (case-insensitive contains) with two
/// name-based overrides for identifier columns, first match wins. Array
/// element types are checked before their scalar counterparts so `UUID[]`
/// is not swallowed by the `UUID` rule. Timestamp values are evaluated at
/// generation time.
pub fn sample_value(ty: &str, field_name: &str) -> Value {
    if field_name == "guid" {
        return json!("{{guid}}");
    }
    if field_name.ends_with("_id") && contains_ci(ty, "UUID") {
        return json!("{{guid}}");
    }
    if contains_ci(ty, "UUID[]") {
        return json!([Uuid::nil().to_string()]);
    }
    if contains_ci(ty, "UUID") {
        return json!(Uuid::nil().to_string());
    }
    if contains_ci(ty, "FLOAT") || contains_ci(ty, "INT") || contains_ci(ty, "NUMERIC") {
        return json!(0);
    }
    if contains_ci(ty, "BOOL") {
        return json!(false);
    }
    if contains_ci(ty, "TIMESTAMP") || contains_ci(ty, "DATE") {
        return json!(Utc::now().to_rfc3339());
    }
    if contains_ci(ty, "TEXT[]") {
        return json!(["value"]);
    }
    json!("")
}

/// Build an example body for a table: one sample value per column, in column
/// order, minus the excluded field names.
pub fn sample_body(table: &Table, exclude: &[&str]) -> Map<String, Value> {
    table
        .columns
        .iter()
        .filter(|column| !exclude.contains(&column.name.as_str()))
        .map(|column| (column.name.clone(), sample_value(&column.ty, &column.name)))
        .collect()
}
