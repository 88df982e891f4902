//! Persistence layer for transactions.
//!
//! Handlers and services never talk to a database directly. They are generic
//! over [`TransactionStore`], which is constructed once at startup and shared
//! through the router state. Two implementations exist:
//!
//! - [`PgTransactionStore`]: PostgreSQL via sqlx
//! - [`MemoryTransactionStore`]: in-process, used by tests and `STORAGE=memory`

use std::future::Future;

use crate::{
    error::AppError,
    models::transaction::{NewTransaction, Transaction, TransactionStatus},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryTransactionStore;
pub use postgres::PgTransactionStore;

/// Result of attempting a status change.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusUpdate {
    /// The status was applied (or already had the requested value).
    Updated(Transaction),

    /// The transaction exists but is already in a different terminal state.
    /// Carries the record unchanged.
    Rejected(Transaction),

    /// No transaction has the given id.
    NotFound,
}

/// Storage operations needed by the transaction service.
///
/// Implementations must be safe to share across concurrently running requests.
pub trait TransactionStore: Send + Sync + 'static {
    /// Check that the backing store is reachable.
    fn ping(&self) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Insert a transaction, assigning the next `transaction_id`.
    ///
    /// Id assignment and insertion are atomic with respect to other inserts:
    /// two concurrent calls never receive the same id.
    fn insert(
        &self,
        new: NewTransaction,
    ) -> impl Future<Output = Result<Transaction, AppError>> + Send;

    /// All transactions owned by `user`, in creation order.
    fn find_by_user(
        &self,
        user: &str,
    ) -> impl Future<Output = Result<Vec<Transaction>, AppError>> + Send;

    /// The transaction with the given application id, if any.
    fn find_by_transaction_id(
        &self,
        transaction_id: i64,
    ) -> impl Future<Output = Result<Option<Transaction>, AppError>> + Send;

    /// Set the status of a transaction, honouring the allowed transitions.
    fn update_status(
        &self,
        transaction_id: i64,
        status: TransactionStatus,
    ) -> impl Future<Output = Result<StatusUpdate, AppError>> + Send;
}
