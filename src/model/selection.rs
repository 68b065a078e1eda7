//! User-editable table selection
//!
//! Between analysis and final generation the user can prune the table set.
//! The selection is an immutable value; every transition returns a new
//! selection, so a generation run can hold a snapshot that later edits do
//! not disturb.

use std::collections::BTreeSet;

use crate::model::{AnalysisResult, Schema};
use crate::util::contains_ci;

/// The set of tables to include in an organized collection, plus a search
/// filter for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSelection {
    all_tables: Vec<String>,
    selected: BTreeSet<String>,
    filter: String,
}

impl TableSelection {
    /// Seed a selection from a fresh analysis: every schema table is selected
    /// except those on the analysis skip list.
    pub fn from_analysis(schema: &Schema, analysis: &AnalysisResult) -> Self {
        let all_tables = schema.table_names();
        let selected = all_tables
            .iter()
            .filter(|name| !analysis.skip_tables.contains(*name))
            .cloned()
            .collect();
        Self {
            all_tables,
            selected,
            filter: String::new(),
        }
    }

    /// Build a selection from an explicit list of table names. Names not
    /// present in the schema are ignored.
    pub fn from_names<I, S>(schema: &Schema, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let all_tables = schema.table_names();
        let requested: BTreeSet<String> =
            names.into_iter().map(|n| n.as_ref().to_string()).collect();
        let selected = all_tables
            .iter()
            .filter(|name| requested.contains(*name))
            .cloned()
            .collect();
        Self {
            all_tables,
            selected,
            filter: String::new(),
        }
    }

    pub fn select_all(mut self) -> Self {
        self.selected = self.all_tables.iter().cloned().collect();
        self
    }

    pub fn deselect_all(mut self) -> Self {
        self.selected.clear();
        self
    }

    /// Flip one table's membership. Unknown names are ignored.
    pub fn toggle(mut self, name: &str) -> Self {
        if !self.all_tables.iter().any(|t| t == name) {
            return self;
        }
        if !self.selected.remove(name) {
            self.selected.insert(name.to_string());
        }
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn selected_tables(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Table names matching the search filter, in schema order. An empty
    /// filter shows everything.
    pub fn visible_tables(&self) -> Vec<&str> {
        self.all_tables
            .iter()
            .filter(|name| self.filter.is_empty() || contains_ci(name, &self.filter))
            .map(String::as_str)
            .collect()
    }

    /// The skip set this selection implies: everything not selected.
    /// Takes precedence over the analysis skip list at generation time.
    pub fn effective_skip(&self) -> BTreeSet<String> {
        self.all_tables
            .iter()
            .filter(|name| !self.selected.contains(*name))
            .cloned()
            .collect()
    }
}
