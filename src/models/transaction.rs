//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: Stored entity representing a transaction
//! - `TransactionStatus`: Lifecycle state of a transaction
//! - Request types for create, list and status-update operations
//! - Response bodies returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a transaction.
///
/// Every transaction starts as `Pending` and may move once to either
/// `Completed` or `Failed`. Neither terminal state can be left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "transaction_status", rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    /// Parse a status a client is allowed to set.
    ///
    /// Only `COMPLETED` and `FAILED` are accepted; `PENDING` is the initial
    /// state and cannot be requested.
    pub fn parse_update(value: &str) -> Option<Self> {
        match value {
            "COMPLETED" => Some(Self::Completed),
            "FAILED" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }

    /// Whether a transaction currently in `self` may be set to `next`.
    ///
    /// Re-applying the current terminal status is allowed so that a retried
    /// update is harmless.
    pub fn can_become(&self, next: TransactionStatus) -> bool {
        *self == Self::Pending || *self == next
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a transaction record from the store.
///
/// # Database Table
///
/// Maps to the `transactions` table. Each transaction:
/// - Has a store-assigned `record_id` and an application `transaction_id`
/// - Belongs to exactly one user
/// - Is never deleted
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Transaction {
    /// Opaque identifier assigned by the store on insert
    pub record_id: Uuid,

    /// Sequential identifier clients use for lookups
    ///
    /// Strictly increasing across creations, starting at 1.
    pub transaction_id: i64,

    pub amount: f64,

    /// Free-form category such as "debit" or "credit"
    pub transaction_type: String,

    pub status: TransactionStatus,

    /// Owning user
    pub user: String,

    /// When the transaction was created
    pub timestamp: DateTime<Utc>,
}

/// Validated input for inserting a transaction.
///
/// The store assigns `record_id`, `transaction_id`, `status` and `timestamp`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub transaction_type: String,
    pub user: String,
}

/// Request to create a transaction.
///
/// # JSON Example
///
/// ```json
/// {
///   "amount": 100,
///   "transaction_type": "debit",
///   "user": "u1"
/// }
/// ```
///
/// Fields are optional at the type level so that a missing field produces
/// the service's own validation message.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub amount: Option<f64>,
    pub transaction_type: Option<String>,
    pub user: Option<String>,
}

/// Request to change the status of a transaction.
///
/// # JSON Example
///
/// ```json
/// { "status": "COMPLETED" }
/// ```
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// Query string for listing a user's transactions.
#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    pub user_id: Option<String>,
}

/// Response returned when fetching or updating a transaction.
///
/// The owning user is not included.
///
/// # JSON Example
///
/// ```json
/// {
///   "transaction_id": 1,
///   "record_id": "770e8400-e29b-41d4-a716-446655440002",
///   "amount": 100.0,
///   "transaction_type": "debit",
///   "status": "PENDING",
///   "timestamp": "2025-12-21T16:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub transaction_id: i64,
    pub record_id: Uuid,
    pub amount: f64,
    pub transaction_type: String,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            transaction_id: transaction.transaction_id,
            record_id: transaction.record_id,
            amount: transaction.amount,
            transaction_type: transaction.transaction_type,
            status: transaction.status,
            timestamp: transaction.timestamp,
        }
    }
}

/// Response returned by the create endpoint: the summary plus the owning user.
#[derive(Debug, Serialize)]
pub struct CreatedTransactionResponse {
    #[serde(flatten)]
    pub transaction: TransactionResponse,
    pub user: String,
}

impl From<Transaction> for CreatedTransactionResponse {
    fn from(transaction: Transaction) -> Self {
        let user = transaction.user.clone();
        Self {
            transaction: transaction.into(),
            user,
        }
    }
}

/// Response body for listing a user's transactions.
#[derive(Debug, Serialize)]
pub struct ListTransactionsResponse {
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Transaction {
        Transaction {
            record_id: Uuid::nil(),
            transaction_id: 7,
            amount: 12.5,
            transaction_type: "credit".to_string(),
            status: TransactionStatus::Pending,
            user: "u1".to_string(),
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn only_terminal_statuses_can_be_requested() {
        assert_eq!(
            TransactionStatus::parse_update("COMPLETED"),
            Some(TransactionStatus::Completed)
        );
        assert_eq!(
            TransactionStatus::parse_update("FAILED"),
            Some(TransactionStatus::Failed)
        );
        assert_eq!(TransactionStatus::parse_update("PENDING"), None);
        assert_eq!(TransactionStatus::parse_update("completed"), None);
        assert_eq!(TransactionStatus::parse_update(""), None);
    }

    #[test]
    fn terminal_statuses_are_final() {
        use TransactionStatus::*;

        assert!(Pending.can_become(Completed));
        assert!(Pending.can_become(Failed));
        assert!(Completed.can_become(Completed));
        assert!(!Completed.can_become(Failed));
        assert!(!Failed.can_become(Completed));
    }

    #[test]
    fn status_serializes_upper_case() {
        assert_eq!(
            serde_json::to_value(TransactionStatus::Pending).unwrap(),
            json!("PENDING")
        );
    }

    #[test]
    fn summary_omits_user_and_created_response_keeps_it() {
        let summary = serde_json::to_value(TransactionResponse::from(sample())).unwrap();
        assert!(summary.get("user").is_none());
        assert_eq!(summary["transaction_id"], 7);

        let created = serde_json::to_value(CreatedTransactionResponse::from(sample())).unwrap();
        assert_eq!(created["user"], "u1");
        assert_eq!(created["transaction_type"], "credit");
        assert_eq!(created["status"], "PENDING");
    }
}
