use config_lookup_core::{Category, LookupEngine};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

use crate::adapters::ssm::SsmParameterStore;
use crate::config::LookupConfig;
use crate::handlers::{handle_event, into_diagnostic, Operation};
use crate::logging::init_logging;

/// Serves one `(category, operation)` pair until the Lambda runtime shuts
/// the process down. The SSM client and engine are built once, at cold start.
pub async fn run(category: Category, operation: Operation) -> Result<(), Error> {
    let config = LookupConfig::from_env()?;
    init_logging(&config)?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = SsmParameterStore::new(aws_sdk_ssm::Client::new(&aws_config))
        .with_page_size(config.page_size)
        .with_decryption(config.with_decryption);
    let engine = LookupEngine::new(category, store);

    tracing::info!(
        category = %category,
        operation = %operation,
        prefix = category.prefix(),
        page_size = config.page_size,
        "lookup handler ready"
    );

    let engine = &engine;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_event(engine, operation, event.payload).map_err(into_diagnostic)
    }))
    .await
}
