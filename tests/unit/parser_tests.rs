//! DBML parser unit tests
//!
//! The parser is total: it must produce a schema for any string input, and
//! malformed fragments are skipped line-by-line rather than failing the
//! whole document.

use pretty_assertions::assert_eq;

use apiforge::parser::parse_dbml;

#[test]
fn test_empty_input_yields_empty_schema() {
    let schema = parse_dbml("");
    assert!(schema.tables.is_empty());
    assert!(schema.refs.is_empty());
}

#[test]
fn test_whitespace_only_input_yields_empty_schema() {
    let schema = parse_dbml("   \n\n\t  \n");
    assert!(schema.tables.is_empty());
    assert!(schema.refs.is_empty());
}

#[test]
fn test_parse_single_table() {
    let dbml = "Table users {\n guid VARCHAR\n name VARCHAR\n}";
    let schema = parse_dbml(dbml);

    assert_eq!(schema.tables.len(), 1);
    assert_eq!(schema.refs.len(), 0);

    let table = &schema.tables[0];
    assert_eq!(table.name, "users");
    assert_eq!(table.columns.len(), 2);
    assert_eq!(table.columns[0].name, "guid");
    assert_eq!(table.columns[0].ty, "VARCHAR");
    assert_eq!(table.columns[1].name, "name");
    assert_eq!(table.columns[1].ty, "VARCHAR");
}

#[test]
fn test_table_and_column_order_preserved() {
    let dbml = r#"
Table alpha {
  c1 INT
  c2 INT
}

Table beta {
  c1 VARCHAR
  c2 VARCHAR
}
"#;
    let schema = parse_dbml(dbml);

    let names: Vec<&str> = schema.tables.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "beta"]);
    for table in &schema.tables {
        let columns: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(columns, vec!["c1", "c2"]);
    }
}

#[test]
fn test_column_type_defaults_to_varchar() {
    let dbml = "Table users {\n name\n}";
    let schema = parse_dbml(dbml);

    assert_eq!(schema.tables[0].columns[0].ty, "VARCHAR");
}

#[test]
fn test_column_type_keeps_modifiers_raw() {
    let dbml = "Table users {\n email VARCHAR(255) [not null, unique]\n}";
    let schema = parse_dbml(dbml);

    assert_eq!(
        schema.tables[0].columns[0].ty,
        "VARCHAR(255) [not null, unique]"
    );
}

#[test]
fn test_comment_blank_and_note_lines_skipped() {
    let dbml = r#"
Table users {
  // primary identifier
  guid UUID

  Note: 'user accounts'
  name VARCHAR
}
"#;
    let schema = parse_dbml(dbml);

    let columns: Vec<&str> = schema.tables[0]
        .columns
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(columns, vec!["guid", "name"]);
}

#[test]
fn test_brace_glued_to_table_name() {
    let dbml = "Table users{\n guid UUID\n}";
    let schema = parse_dbml(dbml);

    assert_eq!(schema.tables.len(), 1);
    assert_eq!(schema.tables[0].name, "users");
}

#[test]
fn test_unterminated_table_block_dropped() {
    let dbml = "Table broken {\n guid UUID\n name VARCHAR\n";
    let schema = parse_dbml(dbml);

    assert!(schema.tables.is_empty());
}

#[test]
fn test_malformed_fragment_does_not_poison_the_document() {
    let dbml = r#"
Table broken {
  guid UUID

Table users {
  guid UUID
  name VARCHAR
}
"#;
    let schema = parse_dbml(dbml);

    // The unmatched opener swallows lines until the first lone brace; the
    // document still yields one well-formed table rather than failing.
    assert_eq!(schema.tables.len(), 1);
    assert_eq!(schema.tables[0].name, "broken");
}

#[test]
fn test_garbage_outside_blocks_ignored() {
    let dbml = "~~ not dbml at all ~~\nTable users {\n guid UUID\n}\n}}}}";
    let schema = parse_dbml(dbml);

    assert_eq!(schema.tables.len(), 1);
    assert_eq!(schema.tables[0].name, "users");
}

#[test]
fn test_ref_line_parsed() {
    let dbml = r#"
Table orders {
  guid UUID
  user_id UUID
}

Ref: orders.user_id > users.guid
"#;
    let schema = parse_dbml(dbml);

    assert_eq!(schema.refs.len(), 1);
    let reference = &schema.refs[0];
    assert_eq!(reference.from_table, "orders");
    assert_eq!(reference.from_column, "user_id");
    assert_eq!(reference.to_table, "users");
    assert_eq!(reference.to_column, "guid");
}

#[test]
fn test_ref_target_table_need_not_exist() {
    // No referential-integrity check: the referenced table is absent
    let dbml = "Ref: orders.user_id > users.guid\n";
    let schema = parse_dbml(dbml);

    assert!(schema.tables.is_empty());
    assert_eq!(schema.refs.len(), 1);
}

#[test]
fn test_ref_line_inside_table_body_is_not_a_column() {
    let dbml = "Table orders {\n guid UUID\n Ref: orders.user_id > users.guid\n}";
    let schema = parse_dbml(dbml);

    assert_eq!(schema.tables[0].columns.len(), 1);
    assert_eq!(schema.refs.len(), 1);
}

#[test]
fn test_multiple_refs_in_source_order() {
    let dbml = "Ref: a.x > b.y\nRef: c.z > d.w\n";
    let schema = parse_dbml(dbml);

    assert_eq!(schema.refs.len(), 2);
    assert_eq!(schema.refs[0].from_table, "a");
    assert_eq!(schema.refs[1].from_table, "c");
}

#[test]
fn test_table_lookup_helpers() {
    let dbml = "Table users {\n guid UUID\n}\nTable posts {\n guid UUID\n}";
    let schema = parse_dbml(dbml);

    assert_eq!(schema.table_names(), vec!["users", "posts"]);
    assert!(schema.table("posts").is_some());
    assert!(schema.table("missing").is_none());
}
