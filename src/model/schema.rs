//! Parsed schema representation

/// A parsed DBML schema
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Tables in source order
    pub tables: Vec<Table>,
    /// Foreign-key references in source order.
    /// Parsed but not consumed by collection generation; no referential
    /// integrity check is performed against `tables`.
    pub refs: Vec<Reference>,
}

impl Schema {
    /// Table names in source order
    pub fn table_names(&self) -> Vec<String> {
        self.tables.iter().map(|t| t.name.clone()).collect()
    }

    /// Look up a table by name
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// A table declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    /// Columns in source order; defines field order in generated bodies
    pub columns: Vec<Column>,
}

/// A column declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    /// Raw type token sequence, modifiers included (e.g. `VARCHAR(255) NOT NULL`)
    pub ty: String,
}

/// A directional foreign-key declaration (`Ref: from.col > to.col`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub from_table: String,
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
}
