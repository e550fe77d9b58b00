use config_lookup_core::contract::ListRequest;
use config_lookup_core::error::LookupResult;
use config_lookup_core::{LookupEngine, ParameterStore};
use serde_json::Value;

use super::reject_invalid;

pub fn handle_list_event<S: ParameterStore>(
    engine: &LookupEngine<S>,
    event: Value,
) -> LookupResult<Value> {
    let request = ListRequest::from_event(event).map_err(reject_invalid)?;
    let page = engine.list_by_prefix(request.namespace(), request.next_token.as_deref())?;
    Ok(page.into_response(engine.category()))
}
