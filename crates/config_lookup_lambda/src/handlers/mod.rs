use std::fmt;

use config_lookup_core::error::LookupResult;
use config_lookup_core::{LookupEngine, LookupError, ParameterStore};
use lambda_runtime::Diagnostic;
use serde_json::Value;

pub mod get;
pub mod list;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs one invocation against `engine`, with the raw request payload attached
/// to every log line emitted while it is served.
pub fn handle_event<S: ParameterStore>(
    engine: &LookupEngine<S>,
    operation: Operation,
    event: Value,
) -> LookupResult<Value> {
    let span = tracing::info_span!(
        "lookup_request",
        category = %engine.category(),
        operation = %operation,
        event = %event,
    );
    let _entered = span.enter();
    tracing::info!("received request");

    match operation {
        Operation::List => list::handle_list_event(engine, event),
        Operation::Get => get::handle_get_event(engine, event),
    }
}

/// Reports a failed invocation to the Lambda runtime under its stable kind,
/// so callers can branch on `errorType` rather than the message.
pub fn into_diagnostic(error: LookupError) -> Diagnostic {
    Diagnostic {
        error_type: error.kind().to_string(),
        error_message: error.to_string(),
    }
}

fn reject_invalid(error: LookupError) -> LookupError {
    tracing::error!(kind = error.kind(), error = %error, "rejected request");
    error
}
