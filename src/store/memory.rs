//! In-process transaction store.
//!
//! All state sits behind one mutex, so id assignment and insertion happen
//! together and concurrent inserts get distinct, increasing ids.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::transaction::{NewTransaction, Transaction, TransactionStatus},
};

use super::{StatusUpdate, TransactionStore};

#[derive(Debug, Default)]
struct Inner {
    transactions: Vec<Transaction>,
    last_transaction_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryTransactionStore {
    inner: Mutex<Inner>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave `Inner` half-written, so a
    // poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TransactionStore for MemoryTransactionStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert(&self, new: NewTransaction) -> Result<Transaction, AppError> {
        let mut inner = self.lock();
        inner.last_transaction_id += 1;

        let transaction = Transaction {
            record_id: Uuid::new_v4(),
            transaction_id: inner.last_transaction_id,
            amount: new.amount,
            transaction_type: new.transaction_type,
            status: TransactionStatus::Pending,
            user: new.user,
            timestamp: Utc::now(),
        };
        inner.transactions.push(transaction.clone());

        Ok(transaction)
    }

    async fn find_by_user(&self, user: &str) -> Result<Vec<Transaction>, AppError> {
        Ok(self
            .lock()
            .transactions
            .iter()
            .filter(|transaction| transaction.user == user)
            .cloned()
            .collect())
    }

    async fn find_by_transaction_id(
        &self,
        transaction_id: i64,
    ) -> Result<Option<Transaction>, AppError> {
        Ok(self
            .lock()
            .transactions
            .iter()
            .find(|transaction| transaction.transaction_id == transaction_id)
            .cloned())
    }

    async fn update_status(
        &self,
        transaction_id: i64,
        status: TransactionStatus,
    ) -> Result<StatusUpdate, AppError> {
        let mut inner = self.lock();
        let Some(transaction) = inner
            .transactions
            .iter_mut()
            .find(|transaction| transaction.transaction_id == transaction_id)
        else {
            return Ok(StatusUpdate::NotFound);
        };

        if !transaction.status.can_become(status) {
            return Ok(StatusUpdate::Rejected(transaction.clone()));
        }

        transaction.status = status;
        Ok(StatusUpdate::Updated(transaction.clone()))
    }
}
