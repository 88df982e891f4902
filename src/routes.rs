//! Router construction.
//!
//! The router is generic over the store so that the binary can serve
//! PostgreSQL and tests can serve an in-memory store through identical routes.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, store::TransactionStore};

pub fn app<S: TransactionStore>(store: Arc<S>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check::<S>))
        .route(
            "/api/transactions",
            post(handlers::transactions::create_transaction::<S>)
                .get(handlers::transactions::list_transactions::<S>),
        )
        .route(
            "/api/transactions/{transaction_id}",
            get(handlers::transactions::get_transaction::<S>)
                .put(handlers::transactions::update_transaction_status::<S>),
        )
        .layer(
            ServiceBuilder::new()
                // Per-request spans and latency logging
                .layer(TraceLayer::new_for_http())
                // Any origin may call the API
                .layer(CorsLayer::permissive()),
        )
        // Share the store with all handlers via State extraction
        .with_state(store)
}
