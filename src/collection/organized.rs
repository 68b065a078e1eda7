//! Analysis-organized collection builder
//!
//! Reorganizes generation around a semantic analysis: one folder per detected
//! auth table, the Files folder, one folder per domain with the domain's
//! tables nested inside, and a trailing catch-all folder for tables the
//! analysis did not cover.
//!
//! The builder enforces a partition over the schema's tables: each ends up in
//! exactly one of auth folder, domain sub-folder, orphan folder, or nowhere
//! (skipped). Auth-table membership wins over domain membership, and auth
//! folders are emitted even for deselected tables.

use std::collections::BTreeSet;

use serde_json::{json, Map, Value};

use crate::model::{AnalysisResult, AuthTableSpec, Schema, TableSelection};

use super::standard::{collection_variables, files_folder, standard_headers, table_requests};
use super::types::{
    Collection, CollectionInfo, RequestBody, RequestItem, RequestSpec, COLLECTION_SCHEMA_URL,
};
use super::GenerationContext;

/// Marker prefixes for tables the analysis classifies as essential or not
const ESSENTIAL_MARKER: &str = "\u{2b50}";
const PLAIN_MARKER: &str = "\u{25fd}";

/// Build the analysis-organized collection.
///
/// When a selection is supplied, the effective skip set is everything the
/// selection excludes; otherwise the analysis skip list is used directly.
pub fn build_with_analysis(
    schema: &Schema,
    analysis: &AnalysisResult,
    ctx: &GenerationContext,
    selection: Option<&TableSelection>,
) -> Collection {
    let effective_skip: BTreeSet<String> = match selection {
        Some(selection) => selection.effective_skip(),
        None => analysis.skip_tables.clone(),
    };
    let auth_names = analysis.auth_table_names();

    let mut item = Vec::new();
    let mut emitted: BTreeSet<String> = BTreeSet::new();

    // Auth flows first. Selection is not consulted here: an auth-classified
    // table keeps its folder even when deselected.
    for spec in &analysis.auth_tables {
        item.push(auth_table_folder(spec, schema, ctx));
        emitted.insert(spec.table_name.clone());
    }

    item.push(files_folder(ctx));

    for domain in &analysis.domains {
        let mut sub_folders = Vec::new();
        for domain_table in &domain.tables {
            if auth_names.contains(&domain_table.name)
                || effective_skip.contains(&domain_table.name)
                || emitted.contains(&domain_table.name)
            {
                continue;
            }
            // Domains may reference tables the schema does not declare
            let Some(table) = schema.table(&domain_table.name) else {
                continue;
            };
            let marker = if domain_table.essential {
                ESSENTIAL_MARKER
            } else {
                PLAIN_MARKER
            };
            sub_folders.push(RequestItem::folder(
                format!("{marker} {}", domain_table.name),
                table_requests(table, ctx),
            ));
            emitted.insert(domain_table.name.clone());
        }
        // Empty domains are suppressed entirely
        if sub_folders.is_empty() {
            continue;
        }
        let folder_name = if domain.icon.is_empty() {
            domain.name.clone()
        } else {
            format!("{} {}", domain.icon, domain.name)
        };
        item.push(RequestItem::folder(folder_name, sub_folders));
    }

    // Catch-all for tables the analysis left unclassified
    let orphans: Vec<RequestItem> = schema
        .tables
        .iter()
        .filter(|table| !emitted.contains(&table.name) && !effective_skip.contains(&table.name))
        .map(|table| RequestItem::folder(&table.name, table_requests(table, ctx)))
        .collect();
    if !orphans.is_empty() {
        item.push(RequestItem::folder("Other Tables", orphans));
    }

    let description = if analysis.project_summary.is_empty() {
        format!(
            "CRUD request collection generated from a DBML schema ({} tables)",
            schema.tables.len()
        )
    } else {
        analysis.project_summary.clone()
    };

    Collection {
        info: CollectionInfo {
            name: "API Collection".to_string(),
            description,
            schema: COLLECTION_SCHEMA_URL.to_string(),
        },
        item,
        variable: collection_variables(ctx),
    }
}

/// One auth table's folder: the five auth-flow requests shaped by the
/// analysis, then the standard CRUD requests for the table's own columns.
fn auth_table_folder(
    spec: &AuthTableSpec,
    schema: &Schema,
    ctx: &GenerationContext,
) -> RequestItem {
    let mut item = vec![
        auth_request(
            "Register",
            "{{base_url}}/v2/auth/register",
            Value::Object(spec.register_fields.clone()),
            ctx,
        ),
        auth_request(
            "Login",
            "{{base_url}}/v2/auth/login",
            Value::Object(login_body(spec, false)),
            ctx,
        ),
        auth_request(
            "Login with Options",
            "{{base_url}}/v2/auth/login/with-option",
            Value::Object(login_body(spec, true)),
            ctx,
        ),
        auth_request(
            "Send OTP",
            "{{base_url}}/v2/auth/send-code",
            json!({
                "recipient": "user@example.com",
                "text": "Your verification code: {code}",
                "type": "email"
            }),
            ctx,
        ),
        auth_request(
            "Reset Password",
            "{{base_url}}/v2/auth/reset-password",
            json!({
                "email": "user@example.com",
                "password": "new_password",
                "otp": "123456"
            }),
            ctx,
        ),
    ];

    if let Some(table) = schema.table(&spec.table_name) {
        item.extend(table_requests(table, ctx));
    }

    let title = if spec.auth_type.is_empty() {
        spec.table_name.clone()
    } else {
        spec.auth_type.clone()
    };
    RequestItem::folder(title, item)
}

/// The analysis-supplied login body plus the project binding; with options,
/// the environment binding as well.
fn login_body(spec: &AuthTableSpec, with_options: bool) -> Map<String, Value> {
    let mut body = spec.login_body.clone();
    body.insert("project_id".to_string(), json!("{{project_id}}"));
    if with_options {
        body.insert("environment_id".to_string(), json!("{{environment_id}}"));
    }
    body
}

fn auth_request(name: &str, url: &str, body: Value, ctx: &GenerationContext) -> RequestItem {
    RequestItem::request(
        name,
        RequestSpec {
            method: "POST".to_string(),
            header: standard_headers(ctx),
            url: url.to_string(),
            body: Some(RequestBody::json(&body)),
        },
    )
}
