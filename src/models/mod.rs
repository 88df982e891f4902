//! Data models representing stored entities and API payloads.

/// Transaction model
pub mod transaction;
