//! Standard collection builder
//!
//! Produces the fixed-layout collection: an Authentication folder, a Files
//! folder, then one folder of nine CRUD requests per table in schema order.

use serde_json::{json, Map, Value};

use crate::model::{Schema, Table};

use super::sample::sample_body;
use super::types::{
    Collection, CollectionInfo, FormParameter, Header, RequestBody, RequestItem, RequestSpec,
    Variable, COLLECTION_SCHEMA_URL,
};
use super::GenerationContext;

/// Build the standard collection for a parsed schema.
///
/// Deterministic for a given schema and context, except for timestamp sample
/// values which are evaluated at generation time.
pub fn build_collection(schema: &Schema, ctx: &GenerationContext) -> Collection {
    let mut item = Vec::with_capacity(schema.tables.len() + 2);
    item.push(auth_folder(ctx));
    item.push(files_folder(ctx));
    for table in &schema.tables {
        item.push(RequestItem::folder(&table.name, table_requests(table, ctx)));
    }

    Collection {
        info: CollectionInfo {
            name: "API Collection".to_string(),
            description: format!(
                "CRUD request collection generated from a DBML schema ({} tables)",
                schema.tables.len()
            ),
            schema: COLLECTION_SCHEMA_URL.to_string(),
        },
        item,
        variable: collection_variables(ctx),
    }
}

/// The auth header block carried by every request except multipart upload
pub(crate) fn standard_headers(ctx: &GenerationContext) -> Vec<Header> {
    vec![
        Header::new("authorization", "API-KEY"),
        Header::new("x-api-key", ctx.api_key_value()),
        Header::new("Content-Type", "application/json"),
    ]
}

/// The fixed `variable` list of named placeholders the environment resolver binds
pub(crate) fn collection_variables(ctx: &GenerationContext) -> Vec<Variable> {
    vec![
        Variable::string("base_url", &ctx.base_url),
        Variable::string("api_key", ctx.api_key.clone().unwrap_or_default()),
        Variable::string("project_id", &ctx.project_id),
        Variable::string("environment_id", &ctx.environment_id),
        Variable::string("guid", ""),
        Variable::string("guid_1", ""),
        Variable::string("guid_2", ""),
        Variable::string("file_id", ""),
    ]
}

/// The fixed Authentication folder with example credential bodies
pub(crate) fn auth_folder(ctx: &GenerationContext) -> RequestItem {
    let item = vec![
        post_request(
            "Register",
            "{{base_url}}/v2/auth/register",
            json!({
                "data": {
                    "login": "demo_user",
                    "password": "demo_password",
                    "email": "user@example.com",
                    "project_id": "{{project_id}}"
                }
            }),
            ctx,
        ),
        post_request(
            "Login",
            "{{base_url}}/v2/auth/login",
            json!({
                "username": "demo_user",
                "password": "demo_password",
                "project_id": "{{project_id}}"
            }),
            ctx,
        ),
        post_request(
            "Login with Options",
            "{{base_url}}/v2/auth/login/with-option",
            json!({
                "username": "demo_user",
                "password": "demo_password",
                "project_id": "{{project_id}}",
                "environment_id": "{{environment_id}}"
            }),
            ctx,
        ),
        post_request(
            "Send OTP",
            "{{base_url}}/v2/auth/send-code",
            json!({
                "recipient": "user@example.com",
                "text": "Your verification code: {code}",
                "type": "email"
            }),
            ctx,
        ),
        post_request(
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
    RequestItem::folder("Authentication", item)
}

/// The fixed Files folder: multipart upload and delete by file id.
/// The multipart upload carries no key-based auth headers.
pub(crate) fn files_folder(ctx: &GenerationContext) -> RequestItem {
    let upload = RequestItem::request(
        "Upload file",
        RequestSpec {
            method: "POST".to_string(),
            header: Vec::new(),
            url: "{{base_url}}/v1/files/folder_upload?folder_name=Files".to_string(),
            body: Some(RequestBody::formdata(vec![FormParameter {
                key: "file".to_string(),
                kind: "file".to_string(),
                src: Some(String::new()),
            }])),
        },
    );
    let delete = RequestItem::request(
        "Delete file",
        RequestSpec {
            method: "DELETE".to_string(),
            header: standard_headers(ctx),
            url: "{{base_url}}/v1/files/{{file_id}}".to_string(),
            body: None,
        },
    );
    RequestItem::folder("Files", vec![upload, delete])
}

/// The nine standard CRUD requests for one table, in fixed order
pub(crate) fn table_requests(table: &Table, ctx: &GenerationContext) -> Vec<RequestItem> {
    let base = format!("{{{{base_url}}}}/v2/items/{}", table.name);
    let name = &table.name;

    vec![
        bodyless_request(format!("List {name}"), "GET", base.clone(), ctx),
        bodyless_request(
            format!("List {name} with relations"),
            "GET",
            format!("{base}?with_relations=true"),
            ctx,
        ),
        bodyless_request(
            format!("Get {name} by id"),
            "GET",
            format!("{base}/{{{{guid}}}}"),
            ctx,
        ),
        body_request(
            format!("Create {name}"),
            "POST",
            base.clone(),
            json!({ "data": sample_body(table, &["guid"]) }),
            ctx,
        ),
        body_request(
            format!("Update {name}"),
            "PUT",
            base.clone(),
            json!({ "data": sample_body(table, &[]) }),
            ctx,
        ),
        body_request(
            format!("Update multiple {name}"),
            "PATCH",
            base.clone(),
            json!({ "data": multi_update_body(table) }),
            ctx,
        ),
        bodyless_request(
            format!("Delete {name}"),
            "DELETE",
            format!("{base}/{{{{guid}}}}"),
            ctx,
        ),
        body_request(
            format!("Delete multiple {name}"),
            "DELETE",
            base.clone(),
            json!({ "ids": ["{{guid_1}}", "{{guid_2}}"] }),
            ctx,
        ),
        body_request(
            format!("Aggregate {name}"),
            "POST",
            format!("{base}/aggregate"),
            json!({ "pipeline": [{ "$match": {} }] }),
            ctx,
        ),
    ]
}

/// Multi-update body: the id placeholders first, then sample fields
fn multi_update_body(table: &Table) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("ids".to_string(), json!(["{{guid_1}}", "{{guid_2}}"]));
    body.extend(sample_body(table, &["guid"]));
    body
}

fn bodyless_request(
    name: String,
    method: &str,
    url: String,
    ctx: &GenerationContext,
) -> RequestItem {
    RequestItem::request(
        name,
        RequestSpec {
            method: method.to_string(),
            header: standard_headers(ctx),
            url,
            body: None,
        },
    )
}

fn body_request(
    name: String,
    method: &str,
    url: String,
    body: Value,
    ctx: &GenerationContext,
) -> RequestItem {
    RequestItem::request(
        name,
        RequestSpec {
            method: method.to_string(),
            header: standard_headers(ctx),
            url,
            body: Some(RequestBody::json(&body)),
        },
    )
}

fn post_request(name: &str, url: &str, body: Value, ctx: &GenerationContext) -> RequestItem {
    body_request(name.to_string(), "POST", url.to_string(), body, ctx)
}
