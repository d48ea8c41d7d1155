//! Service client, data model and wire protocol

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod validation;
pub mod wire;
