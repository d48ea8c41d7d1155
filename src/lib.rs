//! Cloud Translate - typed request/response model and async client for a
//! cloud machine-translation service
//!
//! Requests are plain value types with consuming `with_*` builders. They are
//! validated client-side and sent as JSON 1.1 POSTs by [`TranslateClient`].

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::TranslateClient,
    config::ClientConfig,
    errors::{Result, TranslateError, UnsupportedLanguagePairError},
    validation::{Validate, ValidationError, Violation},
    wire::Operation,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
