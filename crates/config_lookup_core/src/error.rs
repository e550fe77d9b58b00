//! Error taxonomy for backend calls and lookups.

use crate::category::Category;

/// Failures reported by a [`crate::ParameterStore`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The exact key has no parameter.
    #[error("parameter not found: {key}")]
    NotFound { key: String },

    /// The backend answered without a value for the key.
    #[error("parameter {key} has no value")]
    MissingValue { key: String },

    /// Any other backend failure (permissions, throttling, invalid path, transport).
    #[error("{message}")]
    Service {
        code: Option<String>,
        message: String,
    },
}

impl StoreError {
    pub fn service(code: Option<&str>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::NotFound { .. } => Some("ParameterNotFound"),
            Self::MissingValue { .. } => None,
            Self::Service { code, .. } => code.as_deref(),
        }
    }
}

pub type LookupResult<T> = Result<T, LookupError>;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("ProfileNotFound: {namespace}/{name}")]
    ProfileNotFound { namespace: String, name: String },

    #[error("ConfigurationNotFound: {namespace}/{name}")]
    ConfigurationNotFound { namespace: String, name: String },

    #[error("FunctionNotFound: {namespace}/{name}")]
    FunctionNotFound { namespace: String, name: String },

    #[error(transparent)]
    Backend(#[from] StoreError),

    #[error("stored document at {key} is not valid JSON: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl LookupError {
    pub fn not_found(
        category: Category,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let namespace = namespace.into();
        let name = name.into();
        match category {
            Category::Profile => Self::ProfileNotFound { namespace, name },
            Category::Configuration => Self::ConfigurationNotFound { namespace, name },
            Category::Function => Self::FunctionNotFound { namespace, name },
        }
    }

    /// Stable name of the error kind, as reported to invokers and in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProfileNotFound { .. } => Category::Profile.not_found_kind(),
            Self::ConfigurationNotFound { .. } => Category::Configuration.not_found_kind(),
            Self::FunctionNotFound { .. } => Category::Function.not_found_kind(),
            Self::Backend(_) => "BackendError",
            Self::Decode { .. } => "DecodeError",
            Self::InvalidRequest(_) => "InvalidRequestError",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound { .. }
                | Self::ConfigurationNotFound { .. }
                | Self::FunctionNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_namespace_and_name() {
        let error = LookupError::not_found(Category::Profile, "default", "missing");
        assert_eq!(error.to_string(), "ProfileNotFound: default/missing");
        assert_eq!(error.kind(), "EMRProfileNotFoundError");
        assert!(error.is_not_found());
    }

    #[test]
    fn not_found_variant_follows_category() {
        let configuration = LookupError::not_found(Category::Configuration, "team-a", "spark");
        let function = LookupError::not_found(Category::Function, "team-a", "launch");

        assert!(matches!(
            configuration,
            LookupError::ConfigurationNotFound { ref namespace, ref name }
                if namespace == "team-a" && name == "spark"
        ));
        assert_eq!(function.to_string(), "FunctionNotFound: team-a/launch");
        assert_eq!(function.kind(), "EMRLaunchFunctionNotFoundError");
    }

    #[test]
    fn backend_errors_pass_through_unchanged() {
        let error = LookupError::from(StoreError::service(
            Some("AccessDeniedException"),
            "not authorized to perform ssm:GetParameter",
        ));
        assert_eq!(error.to_string(), "not authorized to perform ssm:GetParameter");
        assert_eq!(error.kind(), "BackendError");
        assert!(!error.is_not_found());
        assert!(matches!(
            error,
            LookupError::Backend(ref inner) if inner.code() == Some("AccessDeniedException")
        ));
    }
}
