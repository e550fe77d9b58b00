//! In-memory [`ParameterStore`] for exercising the engine and handlers
//! without a live backend.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::address::path_for_item;
use crate::category::Category;
use crate::error::StoreError;
use crate::store::{ParameterPage, ParameterStore, StoredParameter};

const TOKEN_PREFIX: &str = "page:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    GetParametersByPath {
        path: String,
        next_token: Option<String>,
    },
    GetParameter {
        key: String,
    },
}

/// Keys are returned in lexical order, one path level deep, `page_size` at a
/// time. Continuation tokens are opaque strings that only this store parses.
#[derive(Debug)]
pub struct InMemoryParameterStore {
    parameters: BTreeMap<String, String>,
    page_size: usize,
    failure: Option<(String, String)>,
    calls: Mutex<Vec<StoreCall>>,
}

impl Default for InMemoryParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryParameterStore {
    pub fn new() -> Self {
        Self {
            parameters: BTreeMap::new(),
            page_size: 10,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Every subsequent call fails with a service error carrying `code`.
    pub fn failing_with(mut self, code: &str, message: &str) -> Self {
        self.failure = Some((code.to_string(), message.to_string()));
        self
    }

    pub fn put_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(key.into(), value.into());
    }

    pub fn put_document(
        &mut self,
        category: Category,
        namespace: &str,
        name: &str,
        document: &Value,
    ) {
        self.put_raw(
            path_for_item(category.prefix(), namespace, name),
            document.to_string(),
        );
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    fn injected_failure(&self) -> Option<StoreError> {
        self.failure
            .as_ref()
            .map(|(code, message)| StoreError::service(Some(code.as_str()), message.clone()))
    }

    fn children_of<'a>(&'a self, path: &'a str) -> impl Iterator<Item = (&'a String, &'a String)> {
        self.parameters.iter().filter(move |(key, _)| {
            key.strip_prefix(path)
                .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'))
        })
    }
}

impl ParameterStore for InMemoryParameterStore {
    fn get_parameters_by_path(
        &self,
        path: &str,
        next_token: Option<&str>,
    ) -> Result<ParameterPage, StoreError> {
        self.record(StoreCall::GetParametersByPath {
            path: path.to_string(),
            next_token: next_token.map(str::to_string),
        });
        if let Some(error) = self.injected_failure() {
            return Err(error);
        }

        let offset = match next_token {
            None => 0,
            Some(token) => token
                .strip_prefix(TOKEN_PREFIX)
                .and_then(|value| value.parse::<usize>().ok())
                .ok_or_else(|| {
                    StoreError::service(
                        Some("ValidationException"),
                        "The specified NextToken is invalid",
                    )
                })?,
        };

        let matching: Vec<_> = self.children_of(path).collect();
        let end = (offset + self.page_size).min(matching.len());
        let parameters = matching
            .get(offset..end)
            .unwrap_or_default()
            .iter()
            .map(|(key, value)| StoredParameter {
                key: key.to_string(),
                value: value.to_string(),
            })
            .collect();
        let next_token = (end < matching.len()).then(|| format!("{TOKEN_PREFIX}{end}"));

        Ok(ParameterPage {
            parameters,
            next_token,
        })
    }

    fn get_parameter(&self, key: &str) -> Result<String, StoreError> {
        self.record(StoreCall::GetParameter {
            key: key.to_string(),
        });
        if let Some(error) = self.injected_failure() {
            return Err(error);
        }

        self.parameters
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })
    }
}
