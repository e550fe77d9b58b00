use crate::error::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredParameter {
    pub key: String,
    pub value: String,
}

/// One page of a prefix query, in backend order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterPage {
    pub parameters: Vec<StoredParameter>,
    pub next_token: Option<String>,
}

/// Key/value backend the lookup engine reads from.
///
/// `get_parameters_by_path` returns only keys one level below `path`.
/// `get_parameter` must report a missing key as [`StoreError::NotFound`].
pub trait ParameterStore {
    fn get_parameters_by_path(
        &self,
        path: &str,
        next_token: Option<&str>,
    ) -> Result<ParameterPage, StoreError>;

    fn get_parameter(&self, key: &str) -> Result<String, StoreError>;
}

impl<S: ParameterStore + ?Sized> ParameterStore for &S {
    fn get_parameters_by_path(
        &self,
        path: &str,
        next_token: Option<&str>,
    ) -> Result<ParameterPage, StoreError> {
        (**self).get_parameters_by_path(path, next_token)
    }

    fn get_parameter(&self, key: &str) -> Result<String, StoreError> {
        (**self).get_parameter(key)
    }
}
