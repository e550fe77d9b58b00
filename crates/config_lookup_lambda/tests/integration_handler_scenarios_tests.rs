use config_lookup_core::test_helpers::{InMemoryParameterStore, StoreCall};
use config_lookup_core::{Category, LookupEngine, LookupError};
use config_lookup_lambda::handlers::{handle_event, into_diagnostic, Operation};
use serde_json::{json, Value};

fn seeded_store() -> InMemoryParameterStore {
    let mut store = InMemoryParameterStore::new().with_page_size(2);
    store.put_document(Category::Profile, "default", "small", &json!({"type": "m5.xlarge"}));
    store.put_document(
        Category::Configuration,
        "team-a",
        "etl",
        &json!({"Name": "etl", "ReleaseLabel": "emr-6.2.0"}),
    );
    store.put_document(
        Category::Configuration,
        "team-a",
        "spark",
        &json!({"Name": "spark", "ReleaseLabel": "emr-6.2.0"}),
    );
    store.put_document(
        Category::Configuration,
        "team-a-2",
        "stray",
        &json!({"Name": "stray"}),
    );
    store
}

#[test]
fn profile_get_defaults_namespace() {
    let store = seeded_store();
    let engine = LookupEngine::new(Category::Profile, &store);

    let response = handle_event(&engine, Operation::Get, json!({"ProfileName": "small"}))
        .expect("profile should be found");

    assert_eq!(response, json!({"type": "m5.xlarge"}));
}

#[test]
fn profile_get_missing_raises_profile_not_found() {
    let store = seeded_store();
    let engine = LookupEngine::new(Category::Profile, &store);

    let error = handle_event(&engine, Operation::Get, json!({"ProfileName": "missing"}))
        .expect_err("missing profile must fail");

    assert_eq!(error.kind(), "EMRProfileNotFoundError");
    assert!(error.to_string().contains("default/missing"));
}

#[test]
fn configuration_and_function_not_found_use_their_own_kinds() {
    let store = seeded_store();

    let configuration = LookupEngine::new(Category::Configuration, &store);
    let error = handle_event(
        &configuration,
        Operation::Get,
        json!({"Namespace": "team-a", "ConfigurationName": "absent"}),
    )
    .expect_err("missing configuration must fail");
    assert!(matches!(error, LookupError::ConfigurationNotFound { .. }));
    assert_eq!(error.to_string(), "ConfigurationNotFound: team-a/absent");

    let function = LookupEngine::new(Category::Function, &store);
    let error = handle_event(&function, Operation::Get, json!({"FunctionName": "absent"}))
        .expect_err("missing function must fail");
    assert!(matches!(error, LookupError::FunctionNotFound { .. }));
    assert_eq!(error.kind(), "EMRLaunchFunctionNotFoundError");
}

#[test]
fn configuration_list_returns_namespace_documents_without_token() {
    let store = seeded_store();
    let engine = LookupEngine::new(Category::Configuration, &store);

    let response = handle_event(&engine, Operation::List, json!({"Namespace": "team-a"}))
        .expect("list should succeed");

    assert_eq!(
        response,
        json!({
            "ClusterConfigurations": [
                {"Name": "etl", "ReleaseLabel": "emr-6.2.0"},
                {"Name": "spark", "ReleaseLabel": "emr-6.2.0"}
            ]
        })
    );
    assert!(response.get("NextToken").is_none());
}

#[test]
fn list_handler_pages_until_token_is_absent() {
    let mut store = InMemoryParameterStore::new().with_page_size(2);
    for name in ["a", "b", "c", "d", "e"] {
        store.put_document(Category::Profile, "default", name, &json!({"name": name}));
    }
    store.put_document(Category::Profile, "default2", "z", &json!({"name": "z"}));
    let engine = LookupEngine::new(Category::Profile, &store);

    let mut names = Vec::new();
    let mut request = json!({});
    loop {
        let response = handle_event(&engine, Operation::List, request.clone())
            .expect("page should load");
        for profile in response["EMRProfiles"].as_array().expect("profiles array") {
            names.push(profile["name"].as_str().expect("name").to_string());
        }
        match response.get("NextToken").and_then(Value::as_str) {
            Some(token) => request = json!({"NextToken": token}),
            None => break,
        }
    }

    assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
    let list_calls = store
        .calls()
        .into_iter()
        .filter(|call| matches!(call, StoreCall::GetParametersByPath { .. }))
        .count();
    assert_eq!(list_calls, 3);
}

#[test]
fn backend_failures_surface_unchanged() {
    let store = seeded_store().failing_with("AccessDeniedException", "User is not authorized");
    let engine = LookupEngine::new(Category::Profile, &store);

    let list_error = handle_event(&engine, Operation::List, json!({}))
        .expect_err("denied list must fail");
    let get_error = handle_event(&engine, Operation::Get, json!({"ProfileName": "small"}))
        .expect_err("denied get must fail");

    for error in [list_error, get_error] {
        assert_eq!(error.kind(), "BackendError");
        assert_eq!(error.to_string(), "User is not authorized");
    }
}

#[test]
fn missing_documents_reach_lambda_under_their_category_kind() {
    let store = InMemoryParameterStore::new();
    let cases = [
        (
            Category::Profile,
            json!({"ProfileName": "missing"}),
            "EMRProfileNotFoundError",
            "ProfileNotFound: default/missing",
        ),
        (
            Category::Configuration,
            json!({"Namespace": "team-a", "ConfigurationName": "missing"}),
            "ClusterConfigurationNotFoundError",
            "ConfigurationNotFound: team-a/missing",
        ),
        (
            Category::Function,
            json!({"FunctionName": "missing"}),
            "EMRLaunchFunctionNotFoundError",
            "FunctionNotFound: default/missing",
        ),
    ];

    for (category, event, error_type, error_message) in cases {
        let engine = LookupEngine::new(category, &store);
        let diagnostic = handle_event(&engine, Operation::Get, event)
            .map_err(into_diagnostic)
            .expect_err("missing document must fail");

        assert_eq!(diagnostic.error_type, error_type);
        assert_eq!(diagnostic.error_message, error_message);
    }
}
