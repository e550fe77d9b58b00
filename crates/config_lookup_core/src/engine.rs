//! Paged listing and exact-key lookup for one category.
//!
//! Every backend call goes through a single translation boundary: a missing
//! key on an item lookup becomes the category's not-found error, anything
//! else is passed through as [`LookupError::Backend`]. Failures are logged
//! once, at that boundary.

use serde_json::Value;

use crate::address::{path_for_item, path_for_list};
use crate::category::Category;
use crate::contract::ListPage;
use crate::error::{LookupError, LookupResult, StoreError};
use crate::store::ParameterStore;

#[derive(Debug, Clone)]
pub struct LookupEngine<S> {
    category: Category,
    store: S,
}

enum Target<'a> {
    Prefix {
        path: &'a str,
    },
    Item {
        namespace: &'a str,
        name: &'a str,
        key: &'a str,
    },
}

impl Target<'_> {
    fn key(&self) -> &str {
        match self {
            Self::Prefix { path } => *path,
            Self::Item { key, .. } => *key,
        }
    }
}

impl<S: ParameterStore> LookupEngine<S> {
    pub fn new(category: Category, store: S) -> Self {
        Self { category, store }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Fetches one page of documents stored directly under `namespace`.
    ///
    /// `next_token` is forwarded untouched and the backend's token, if any, is
    /// returned untouched. An empty namespace yields an empty page, not an error.
    pub fn list_by_prefix(
        &self,
        namespace: &str,
        next_token: Option<&str>,
    ) -> LookupResult<ListPage> {
        let path = path_for_list(self.category.prefix(), namespace);
        let target = Target::Prefix { path: &path };

        let page = self
            .store
            .get_parameters_by_path(&path, next_token)
            .map_err(|error| self.translate(&target, error))?;

        let items = page
            .parameters
            .iter()
            .map(|parameter| self.decode(&parameter.key, &parameter.value))
            .collect::<LookupResult<Vec<_>>>()?;

        tracing::debug!(
            category = %self.category,
            path = %path,
            items = items.len(),
            has_more = page.next_token.is_some(),
            "listed documents"
        );

        Ok(ListPage {
            items,
            next_token: page.next_token,
        })
    }

    pub fn get_by_key(&self, namespace: &str, name: &str) -> LookupResult<Value> {
        let key = path_for_item(self.category.prefix(), namespace, name);
        let target = Target::Item {
            namespace,
            name,
            key: &key,
        };

        let raw = self
            .store
            .get_parameter(&key)
            .map_err(|error| self.translate(&target, error))?;

        self.decode(&key, &raw)
    }

    fn translate(&self, target: &Target<'_>, error: StoreError) -> LookupError {
        let error = match (target, error) {
            (Target::Item { namespace, name, .. }, StoreError::NotFound { .. }) => {
                LookupError::not_found(self.category, *namespace, *name)
            }
            (_, other) => LookupError::Backend(other),
        };
        self.log_failure(target.key(), &error);
        error
    }

    fn decode(&self, key: &str, raw: &str) -> LookupResult<Value> {
        serde_json::from_str(raw).map_err(|source| {
            let error = LookupError::Decode {
                key: key.to_string(),
                source,
            };
            self.log_failure(key, &error);
            error
        })
    }

    fn log_failure(&self, key: &str, error: &LookupError) {
        if error.is_not_found() {
            tracing::warn!(
                category = %self.category,
                key,
                kind = error.kind(),
                "{error}"
            );
            return;
        }

        let code = match error {
            LookupError::Backend(inner) => inner.code(),
            _ => None,
        };
        tracing::error!(
            category = %self.category,
            key,
            kind = error.kind(),
            code,
            error = %error,
            chain = %error_chain(error),
            "lookup failed"
        );
    }
}

fn error_chain(error: &dyn std::error::Error) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}
