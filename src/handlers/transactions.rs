//! Transaction HTTP handlers.
//!
//! This module implements the transaction API endpoints:
//! - POST /api/transactions - Create a transaction
//! - GET /api/transactions?user_id=... - List a user's transactions
//! - GET /api/transactions/{transaction_id} - Get transaction details
//! - PUT /api/transactions/{transaction_id} - Update transaction status

use std::sync::Arc;

use crate::{
    error::AppError,
    models::transaction::{
        CreateTransactionRequest, CreatedTransactionResponse, ListTransactionsQuery,
        ListTransactionsResponse, TransactionResponse, UpdateStatusRequest,
    },
    services::transaction_service,
    store::TransactionStore,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

/// Create a transaction.
///
/// # Request Body
///
/// ```json
/// {
///   "amount": 100,
///   "transaction_type": "debit",
///   "user": "u1"
/// }
/// ```
///
/// # Response (201)
///
/// ```json
/// {
///   "transaction_id": 1,
///   "record_id": "770e8400-...",
///   "amount": 100.0,
///   "transaction_type": "debit",
///   "status": "PENDING",
///   "user": "u1",
///   "timestamp": "2025-12-21T16:00:00Z"
/// }
/// ```
///
/// - **Error (400)**: a required field is missing or the body is not valid JSON
/// - **Error (500)**: storage error
pub async fn create_transaction<S: TransactionStore>(
    State(store): State<Arc<S>>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedTransactionResponse>), AppError> {
    let Json(request) = payload?;

    let transaction = transaction_service::create_transaction(store.as_ref(), request).await?;

    Ok((StatusCode::CREATED, Json(transaction.into())))
}

/// List all transactions for a user.
///
/// # Endpoint
///
/// `GET /api/transactions?user_id=u1`
///
/// # Response (200)
///
/// `{ "transactions": [...] }` with full records, possibly empty.
pub async fn list_transactions<S: TransactionStore>(
    State(store): State<Arc<S>>,
    query: Result<Query<ListTransactionsQuery>, QueryRejection>,
) -> Result<Json<ListTransactionsResponse>, AppError> {
    let Query(query) = query?;

    let transactions = transaction_service::list_transactions(store.as_ref(), query.user_id).await?;

    Ok(Json(ListTransactionsResponse { transactions }))
}

/// Get transaction by its numeric id.
///
/// Returns 404 when no transaction matches, including ids that are not integers.
pub async fn get_transaction<S: TransactionStore>(
    State(store): State<Arc<S>>,
    Path(transaction_id): Path<String>,
) -> Result<Json<TransactionResponse>, AppError> {
    let transaction = transaction_service::get_transaction(store.as_ref(), &transaction_id).await?;

    Ok(Json(transaction.into()))
}

/// Update the status of a transaction.
///
/// # Request Body
///
/// ```json
/// { "status": "COMPLETED" }
/// ```
///
/// # Response
///
/// - **Success (200)**: the updated transaction
/// - **Error (400)**: status is not `COMPLETED`/`FAILED`, or the transaction
///   already holds the other final status
/// - **Error (404)**: transaction not found
pub async fn update_transaction_status<S: TransactionStore>(
    State(store): State<Arc<S>>,
    Path(transaction_id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<TransactionResponse>, AppError> {
    let Json(request) = payload?;

    let transaction =
        transaction_service::update_status(store.as_ref(), &transaction_id, request.status)
            .await?;

    Ok(Json(transaction.into()))
}
