//! Business logic services.
//!
//! Services contain validation and orchestration separated from HTTP handlers.

pub mod transaction_service;
