//! DBML parsing

mod dbml_parser;

pub use dbml_parser::parse_dbml;
