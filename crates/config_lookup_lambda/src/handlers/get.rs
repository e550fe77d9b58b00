use config_lookup_core::contract::GetRequest;
use config_lookup_core::error::LookupResult;
use config_lookup_core::{LookupEngine, ParameterStore};
use serde_json::Value;

use super::reject_invalid;

pub fn handle_get_event<S: ParameterStore>(
    engine: &LookupEngine<S>,
    event: Value,
) -> LookupResult<Value> {
    let request = GetRequest::from_event(engine.category(), event).map_err(reject_invalid)?;
    engine.get_by_key(request.namespace(), &request.name)
}

#[cfg(test)]
mod tests {
    use config_lookup_core::test_helpers::InMemoryParameterStore;
    use config_lookup_core::{Category, LookupError};
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_name_from_category_field() {
        let mut store = InMemoryParameterStore::new();
        store.put_document(
            Category::Configuration,
            "team-a",
            "spark",
            &json!({"Applications": ["Spark"]}),
        );
        let engine = LookupEngine::new(Category::Configuration, &store);

        let document = handle_get_event(
            &engine,
            json!({"Namespace": "team-a", "ConfigurationName": "spark"}),
        )
        .expect("configuration should be found");

        assert_eq!(document, json!({"Applications": ["Spark"]}));
    }

    #[test]
    fn missing_name_field_is_not_found() {
        let store = InMemoryParameterStore::new();
        let engine = LookupEngine::new(Category::Function, &store);

        let error = handle_get_event(&engine, json!({"Namespace": "team-a"}))
            .expect_err("missing name must fail");

        assert!(matches!(
            error,
            LookupError::FunctionNotFound { ref namespace, ref name }
                if namespace == "team-a" && name.is_empty()
        ));
    }
}
