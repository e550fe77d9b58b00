use std::future::Future;

use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use aws_sdk_ssm::operation::get_parameters_by_path::GetParametersByPathError;
use config_lookup_core::{ParameterPage, ParameterStore, StoreError, StoredParameter};

/// [`ParameterStore`] backed by AWS Systems Manager Parameter Store.
///
/// Calls block the current worker thread, so the adapter must run inside a
/// multi-threaded tokio runtime.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: aws_sdk_ssm::Client,
    page_size: Option<i32>,
    with_decryption: bool,
}

impl SsmParameterStore {
    pub fn new(client: aws_sdk_ssm::Client) -> Self {
        Self {
            client,
            page_size: None,
            with_decryption: false,
        }
    }

    pub fn with_page_size(mut self, page_size: Option<i32>) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_decryption(mut self, with_decryption: bool) -> Self {
        self.with_decryption = with_decryption;
        self
    }
}

impl ParameterStore for SsmParameterStore {
    fn get_parameters_by_path(
        &self,
        path: &str,
        next_token: Option<&str>,
    ) -> Result<ParameterPage, StoreError> {
        let output = block_on(
            self.client
                .get_parameters_by_path()
                .path(path)
                .recursive(false)
                .with_decryption(self.with_decryption)
                .set_max_results(self.page_size)
                .set_next_token(next_token.map(str::to_string))
                .send(),
        )
        .map_err(|error| get_parameters_by_path_error(error.into_service_error()))?;

        let parameters = output
            .parameters()
            .iter()
            .map(|parameter| {
                let key = parameter.name().unwrap_or_default().to_string();
                match parameter.value() {
                    Some(value) => Ok(StoredParameter {
                        key,
                        value: value.to_string(),
                    }),
                    None => Err(StoreError::MissingValue { key }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParameterPage {
            parameters,
            next_token: output.next_token().map(str::to_string),
        })
    }

    fn get_parameter(&self, key: &str) -> Result<String, StoreError> {
        let output = block_on(
            self.client
                .get_parameter()
                .name(key)
                .with_decryption(self.with_decryption)
                .send(),
        )
        .map_err(|error| get_parameter_error(key, error.into_service_error()))?;

        output
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(str::to_string)
            .ok_or_else(|| StoreError::MissingValue {
                key: key.to_string(),
            })
    }
}

/// A missing path is an empty page for SSM, so nothing here maps to
/// [`StoreError::NotFound`].
fn get_parameters_by_path_error(error: GetParametersByPathError) -> StoreError {
    StoreError::service(error.code(), service_message(&error))
}

fn get_parameter_error(key: &str, error: GetParameterError) -> StoreError {
    if error.is_parameter_not_found() {
        return StoreError::NotFound {
            key: key.to_string(),
        };
    }
    StoreError::service(error.code(), service_message(&error))
}

fn service_message<E>(error: &E) -> String
where
    E: ProvideErrorMetadata + std::error::Error,
{
    error
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(error).to_string())
}

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
