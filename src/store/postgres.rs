//! PostgreSQL-backed transaction store.
//!
//! `transaction_id` comes from the `transaction_id_seq` sequence via the
//! column default, so id assignment is a single atomic `nextval` inside the
//! insert rather than a read-max-then-write.

use crate::{
    db::DbPool,
    error::AppError,
    models::transaction::{NewTransaction, Transaction, TransactionStatus},
};

use super::{StatusUpdate, TransactionStore};

/// Column list shared by every query. `user` is a reserved word in PostgreSQL.
const COLUMNS: &str = r#"record_id, transaction_id, amount, transaction_type, status, "user", timestamp"#;

#[derive(Debug, Clone)]
pub struct PgTransactionStore {
    pool: DbPool,
}

impl PgTransactionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl TransactionStore for PgTransactionStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }

    async fn insert(&self, new: NewTransaction) -> Result<Transaction, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(&format!(
            r#"
            INSERT INTO transactions (amount, transaction_type, "user")
            VALUES ($1, $2, $3)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(new.amount)
        .bind(new.transaction_type)
        .bind(new.user)
        .fetch_one(&self.pool)
        .await?;

        Ok(transaction)
    }

    async fn find_by_user(&self, user: &str) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(&format!(
            r#"SELECT {COLUMNS} FROM transactions WHERE "user" = $1 ORDER BY transaction_id"#
        ))
        .bind(user)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    async fn find_by_transaction_id(
        &self,
        transaction_id: i64,
    ) -> Result<Option<Transaction>, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(&format!(
            "SELECT {COLUMNS} FROM transactions WHERE transaction_id = $1"
        ))
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }

    async fn update_status(
        &self,
        transaction_id: i64,
        status: TransactionStatus,
    ) -> Result<StatusUpdate, AppError> {
        // The transition check lives in the WHERE clause so that two racing
        // updates cannot both move a pending transaction.
        let updated = sqlx::query_as::<_, Transaction>(&format!(
            r#"
            UPDATE transactions
            SET status = $1
            WHERE transaction_id = $2
              AND (status = 'PENDING' OR status = $1)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(status)
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(transaction) = updated {
            return Ok(StatusUpdate::Updated(transaction));
        }

        Ok(match self.find_by_transaction_id(transaction_id).await? {
            Some(existing) => StatusUpdate::Rejected(existing),
            None => StatusUpdate::NotFound,
        })
    }
}
