//! Shared config lookup domain primitives.
//!
//! This crate owns the addressing scheme, request/response contracts, the
//! error taxonomy and the lookup engine. It intentionally excludes AWS SDK and
//! Lambda runtime concerns; those live in `config_lookup_lambda`.

pub mod address;
pub mod category;
pub mod contract;
pub mod engine;
pub mod error;
pub mod store;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use category::Category;
pub use engine::LookupEngine;
pub use error::{LookupError, StoreError};
pub use store::{ParameterPage, ParameterStore, StoredParameter};
