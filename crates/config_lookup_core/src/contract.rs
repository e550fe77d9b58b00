use serde::Deserialize;
use serde_json::{Map, Value};

use crate::address::DEFAULT_NAMESPACE;
use crate::category::Category;
use crate::error::LookupError;

pub const NAMESPACE_FIELD: &str = "Namespace";
pub const NEXT_TOKEN_FIELD: &str = "NextToken";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListRequest {
    #[serde(rename = "Namespace", default)]
    pub namespace: Option<String>,
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

impl ListRequest {
    pub fn from_event(event: Value) -> Result<Self, LookupError> {
        let object = request_object(event)?;
        serde_json::from_value(Value::Object(object))
            .map_err(|error| LookupError::InvalidRequest(error.to_string()))
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRequest {
    pub namespace: Option<String>,
    pub name: String,
}

impl GetRequest {
    /// Reads `Namespace` and the category's name field.
    ///
    /// A missing name becomes the empty string so the lookup still reaches the
    /// backend and surfaces as the category's not-found error.
    pub fn from_event(category: Category, event: Value) -> Result<Self, LookupError> {
        let object = request_object(event)?;
        let namespace = optional_string(&object, NAMESPACE_FIELD)?;
        let name = optional_string(&object, category.name_field())?.unwrap_or_default();
        Ok(Self { namespace, name })
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }
}

/// Decoded documents from one backend page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPage {
    pub items: Vec<Value>,
    pub next_token: Option<String>,
}

impl ListPage {
    /// Wraps the page as `{<collection key>: [...], "NextToken"?: ...}`.
    pub fn into_response(self, category: Category) -> Value {
        let mut body = Map::new();
        body.insert(
            category.collection_key().to_string(),
            Value::Array(self.items),
        );
        if let Some(token) = self.next_token {
            body.insert(NEXT_TOKEN_FIELD.to_string(), Value::String(token));
        }
        Value::Object(body)
    }
}

fn request_object(event: Value) -> Result<Map<String, Value>, LookupError> {
    match event {
        Value::Null => Ok(Map::new()),
        Value::Object(object) => Ok(object),
        other => Err(LookupError::InvalidRequest(format!(
            "request payload must be a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn optional_string(
    object: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, LookupError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(LookupError::InvalidRequest(format!(
            "{field} must be a string, got {}",
            json_type_name(other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
