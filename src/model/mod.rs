//! Schema and analysis data model

mod analysis;
mod schema;
mod selection;

pub use analysis::{AnalysisDomain, AnalysisResult, AuthTableSpec, DomainTable};
pub use schema::{Column, Reference, Schema, Table};
pub use selection::TableSelection;
