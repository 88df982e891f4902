//! Health check endpoint for service monitoring.

use std::sync::Arc;

use crate::{error::AppError, store::TransactionStore};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
///
/// Returns service status and storage connectivity.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Storage connection status
    pub storage: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "storage": "connected",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
///
/// # Response (500 Internal Server Error)
///
/// If storage is unreachable, returns standard error response.
pub async fn health_check<S: TransactionStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<HealthResponse>, AppError> {
    store.ping().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        storage: "connected".to_string(),
        timestamp: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::{
        error::AppError,
        models::transaction::{NewTransaction, Transaction, TransactionStatus},
        routes,
        store::{MemoryTransactionStore, StatusUpdate, TransactionStore},
    };

    /// Store whose backend is unreachable.
    struct UnreachableStore;

    fn unreachable() -> AppError {
        AppError::Storage(sqlx::Error::PoolTimedOut)
    }

    impl TransactionStore for UnreachableStore {
        async fn ping(&self) -> Result<(), AppError> {
            Err(unreachable())
        }

        async fn insert(&self, _new: NewTransaction) -> Result<Transaction, AppError> {
            Err(unreachable())
        }

        async fn find_by_user(&self, _user: &str) -> Result<Vec<Transaction>, AppError> {
            Err(unreachable())
        }

        async fn find_by_transaction_id(
            &self,
            _transaction_id: i64,
        ) -> Result<Option<Transaction>, AppError> {
            Err(unreachable())
        }

        async fn update_status(
            &self,
            _transaction_id: i64,
            _status: TransactionStatus,
        ) -> Result<StatusUpdate, AppError> {
            Err(unreachable())
        }
    }

    #[tokio::test]
    async fn reports_healthy_with_memory_store() {
        let server = TestServer::try_new(routes::app(Arc::new(MemoryTransactionStore::new())))
            .expect("Could not create test server.");

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storage"], "connected");
    }

    #[tokio::test]
    async fn reports_error_when_storage_is_unreachable() {
        let server = TestServer::try_new(routes::app(Arc::new(UnreachableStore)))
            .expect("Could not create test server.");

        let response = server.get("/health").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<Value>();
        assert_eq!(body["error"], sqlx::Error::PoolTimedOut.to_string());
    }

    #[tokio::test]
    async fn transaction_routes_report_storage_errors() {
        let server = TestServer::try_new(routes::app(Arc::new(UnreachableStore)))
            .expect("Could not create test server.");

        let response = server.get("/api/transactions/1").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.json::<Value>()["error"].is_string());
    }
}
