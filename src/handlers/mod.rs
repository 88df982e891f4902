//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, query string)
//! 2. Delegates validation and persistence to the service layer
//! 3. Returns HTTP response (JSON, status code)

/// Service health endpoint
pub mod health;
/// Transaction endpoints
pub mod transactions;
