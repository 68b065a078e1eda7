//! Semantic analysis result types
//!
//! The analysis itself is produced by an external collaborator and arrives as
//! a JSON document. Every field is defaulted so a partial document still
//! deserializes; the builders are defensive about incomplete coverage anyway
//! (orphan tables get a catch-all folder).

use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::{Map, Value};

/// The full analysis of a schema: domain groupings, detected auth tables and
/// a skip list of tables not worth generating requests for.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub project_summary: String,
    #[serde(default)]
    pub domains: Vec<AnalysisDomain>,
    #[serde(default)]
    pub auth_tables: Vec<AuthTableSpec>,
    #[serde(default)]
    pub skip_tables: BTreeSet<String>,
    #[serde(default)]
    pub table_count_total: usize,
    #[serde(default)]
    pub table_count_essential: usize,
    #[serde(default)]
    pub table_count_skipped: usize,
}

impl AnalysisResult {
    /// Deserialize an analysis from JSON.
    ///
    /// Accepts both the collaborator's response envelope
    /// (`{"analysis": {...}, "model": ..., "provider": ...}`) and a bare
    /// analysis document, so saved analyses and raw responses both load.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        struct Envelope {
            analysis: AnalysisResult,
        }
        match serde_json::from_str::<Envelope>(text) {
            Ok(envelope) => Ok(envelope.analysis),
            Err(_) => serde_json::from_str(text),
        }
    }

    /// Names of all tables classified as auth tables
    pub fn auth_table_names(&self) -> BTreeSet<String> {
        self.auth_tables
            .iter()
            .map(|spec| spec.table_name.clone())
            .collect()
    }
}

/// A semantic grouping of tables (e.g. "User Management")
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisDomain {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tables: Vec<DomainTable>,
}

/// A table's membership in a domain
#[derive(Debug, Clone, Deserialize)]
pub struct DomainTable {
    pub name: String,
    #[serde(default)]
    pub essential: bool,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub auth_type: Option<String>,
}

/// A detected authentication table with its generated auth-flow shapes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthTableSpec {
    pub table_name: String,
    #[serde(default)]
    pub auth_type: String,
    #[serde(default)]
    pub login_fields: Vec<String>,
    /// Field → example value for the Register request body, in analysis order
    #[serde(default)]
    pub register_fields: Map<String, Value>,
    /// Field → example value for the Login request body, in analysis order
    #[serde(default)]
    pub login_body: Map<String, Value>,
    #[serde(default)]
    pub has_roles: bool,
}
