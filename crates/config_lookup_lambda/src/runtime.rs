pub use config_lookup_core::{address, category, contract, engine, error, store};
