//! Transaction service - validation and orchestration for transaction operations.
//!
//! Handlers deal with HTTP extraction and response shapes; everything that
//! decides whether a request is acceptable lives here, generic over the
//! [`TransactionStore`] it writes to.

use crate::{
    error::AppError,
    models::transaction::{
        CreateTransactionRequest, NewTransaction, Transaction, TransactionStatus,
    },
    store::{StatusUpdate, TransactionStore},
};

const MISSING_FIELDS: &str = "All fields (amount, transaction_type, user) are required.";
const MISSING_USER_ID: &str = "user_id is required as a query parameter.";
const INVALID_STATUS: &str = "Invalid status value. Must be 'COMPLETED' or 'FAILED'.";

/// Create a transaction.
///
/// # Validation
///
/// `amount` must be present and non-zero; `transaction_type` and `user` must
/// be present and non-empty. Nothing is written when validation fails.
///
/// # Errors
///
/// - `Validation`: a required field is missing or empty
/// - `Storage`: the insert failed
pub async fn create_transaction<S: TransactionStore>(
    store: &S,
    request: CreateTransactionRequest,
) -> Result<Transaction, AppError> {
    let new = validate_create(request)?;

    let transaction = store.insert(new).await?;
    tracing::info!(
        transaction_id = transaction.transaction_id,
        user = %transaction.user,
        "transaction created"
    );

    Ok(transaction)
}

fn validate_create(request: CreateTransactionRequest) -> Result<NewTransaction, AppError> {
    let missing = || AppError::Validation(MISSING_FIELDS.to_string());

    let amount = request.amount.filter(|amount| *amount != 0.0).ok_or_else(missing)?;
    let transaction_type = non_empty(request.transaction_type).ok_or_else(missing)?;
    let user = non_empty(request.user).ok_or_else(missing)?;

    Ok(NewTransaction {
        amount,
        transaction_type,
        user,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// List every transaction owned by `user_id`.
///
/// An unknown user yields an empty list, not an error.
pub async fn list_transactions<S: TransactionStore>(
    store: &S,
    user_id: Option<String>,
) -> Result<Vec<Transaction>, AppError> {
    let user_id =
        non_empty(user_id).ok_or_else(|| AppError::Validation(MISSING_USER_ID.to_string()))?;

    store.find_by_user(&user_id).await
}

/// Fetch a single transaction by its application id.
///
/// `transaction_id` is the raw path segment; anything that is not an integer
/// cannot match a record and is reported as not found.
pub async fn get_transaction<S: TransactionStore>(
    store: &S,
    transaction_id: &str,
) -> Result<Transaction, AppError> {
    let transaction_id = parse_transaction_id(transaction_id)?;

    store
        .find_by_transaction_id(transaction_id)
        .await?
        .ok_or(AppError::NotFound)
}

/// Move a transaction to `COMPLETED` or `FAILED`.
///
/// The status is validated before the lookup, so an invalid status is a 400
/// even for an unknown id.
///
/// # Errors
///
/// - `Validation`: status missing, not `COMPLETED`/`FAILED`, or the
///   transaction already holds the other terminal status
/// - `NotFound`: no transaction with this id
/// - `Storage`: the update failed
pub async fn update_status<S: TransactionStore>(
    store: &S,
    transaction_id: &str,
    status: Option<String>,
) -> Result<Transaction, AppError> {
    let status = status
        .as_deref()
        .and_then(TransactionStatus::parse_update)
        .ok_or_else(|| AppError::Validation(INVALID_STATUS.to_string()))?;

    tracing::debug!(transaction_id, %status, "status update requested");

    let Ok(id) = parse_transaction_id(transaction_id) else {
        tracing::info!(transaction_id, "transaction not found");
        return Err(AppError::NotFound);
    };

    match store.update_status(id, status).await? {
        StatusUpdate::Updated(transaction) => {
            tracing::info!(transaction_id = id, %status, "transaction status updated");
            Ok(transaction)
        }
        StatusUpdate::Rejected(existing) => Err(AppError::Validation(format!(
            "Transaction {id} is already {}.",
            existing.status
        ))),
        StatusUpdate::NotFound => {
            tracing::info!(transaction_id = id, "transaction not found");
            Err(AppError::NotFound)
        }
    }
}

fn parse_transaction_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::NotFound)
}
