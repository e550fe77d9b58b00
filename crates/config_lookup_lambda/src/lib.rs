//! AWS-oriented adapters and handlers for config lookups.
//!
//! This crate owns runtime integration details (Lambda entry points, the SSM
//! parameter store adapter, environment configuration and log setup) and
//! exposes the lookup domain through a single runtime module boundary.

pub mod adapters;
pub mod config;
pub mod entry;
pub mod handlers;
pub mod logging;
pub mod runtime;
