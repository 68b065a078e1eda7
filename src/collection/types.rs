//! Postman v2.1 collection types
//!
//! Only the subset of the collection format that generation emits is
//! modeled. The serialized shape must match
//! `https://schema.getpostman.com/json/collection/v2.1.0/collection.json`.

use serde::Serialize;
use serde_json::Value;

pub const COLLECTION_SCHEMA_URL: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// A complete request collection
#[derive(Debug, Clone, Serialize)]
pub struct Collection {
    pub info: CollectionInfo,
    pub item: Vec<RequestItem>,
    pub variable: Vec<Variable>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionInfo {
    pub name: String,
    pub description: String,
    pub schema: String,
}

/// A node in the collection tree: a folder of further items, or a request leaf
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RequestItem {
    Folder {
        name: String,
        item: Vec<RequestItem>,
    },
    Request {
        name: String,
        request: RequestSpec,
    },
}

impl RequestItem {
    pub fn folder(name: impl Into<String>, item: Vec<RequestItem>) -> Self {
        RequestItem::Folder {
            name: name.into(),
            item,
        }
    }

    pub fn request(name: impl Into<String>, request: RequestSpec) -> Self {
        RequestItem::Request {
            name: name.into(),
            request,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            RequestItem::Folder { name, .. } => name,
            RequestItem::Request { name, .. } => name,
        }
    }

    /// Child items of a folder; empty for a request leaf
    pub fn children(&self) -> &[RequestItem] {
        match self {
            RequestItem::Folder { item, .. } => item,
            RequestItem::Request { .. } => &[],
        }
    }

    pub fn is_request(&self) -> bool {
        matches!(self, RequestItem::Request { .. })
    }
}

/// The HTTP request template carried by a leaf
#[derive(Debug, Clone, Serialize)]
pub struct RequestSpec {
    pub method: String,
    pub header: Vec<Header>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Header {
    pub key: String,
    pub value: String,
    pub disabled: bool,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formdata: Option<Vec<FormParameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BodyOptions>,
}

impl RequestBody {
    /// A raw JSON body rendered with two-space indentation
    pub fn json(value: &Value) -> Self {
        Self {
            mode: "raw".to_string(),
            raw: Some(serde_json::to_string_pretty(value).unwrap_or_default()),
            formdata: None,
            options: Some(BodyOptions {
                raw: RawOptions {
                    language: "json".to_string(),
                },
            }),
        }
    }

    /// A multipart form-data body
    pub fn formdata(parameters: Vec<FormParameter>) -> Self {
        Self {
            mode: "formdata".to_string(),
            raw: None,
            formdata: Some(parameters),
            options: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BodyOptions {
    pub raw: RawOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct RawOptions {
    pub language: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormParameter {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

/// A named placeholder the consuming environment resolver can bind
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Variable {
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind: "string".to_string(),
        }
    }
}
