//! PostgreSQL-backed account repository.

use super::AccountRepository;
use crate::error::AppError;
use crate::model::Account;
use crate::sql::{self, QueryBuf};
use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{PgPool, Postgres, Row};
use std::future::Future;
use std::time::Duration;

pub struct PgAccountRepository {
    pool: PgPool,
    timeout: Duration,
}

impl PgAccountRepository {
    /// `timeout` bounds every store call, including waiting for a pooled connection.
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    async fn deadline<T, F>(&self, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(res) => res.map_err(AppError::from),
            Err(_) => Err(AppError::Timeout(self.timeout)),
        }
    }

    async fn fetch_accounts(&self, q: &QueryBuf) -> Result<Vec<Account>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = self.deadline(bind_all(q).fetch_all(&self.pool)).await?;
        let accounts = rows
            .iter()
            .map(row_to_account)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(accounts)
    }
}

fn bind_all(q: &QueryBuf) -> sqlx::query::Query<'_, Postgres, PgArguments> {
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    query
}

/// A column that fails to decode aborts the whole read.
fn row_to_account(row: &PgRow) -> Result<Account, sqlx::Error> {
    Ok(Account {
        id: row.try_get("uid")?,
        firstname: row.try_get("firstname")?,
        lastname: row.try_get("lastname")?,
        mobilenumber: row.try_get("mobilenumber")?,
        password: row.try_get("password")?,
    })
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn insert(&self, account: &Account) -> Result<i64, AppError> {
        let q = sql::insert(account);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = self.deadline(bind_all(&q).fetch_one(&self.pool)).await?;
        let id: i64 = row.try_get("uid")?;
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Account>, AppError> {
        self.fetch_accounts(&sql::select_all()).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Vec<Account>, AppError> {
        self.fetch_accounts(&sql::select_by_id(id)).await
    }

    async fn update_fields(&self, id: i64, patch: &Account) -> Result<(), AppError> {
        let Some(q) = sql::update(id, patch) else {
            tracing::debug!(id, "update with no assignments, skipped");
            return Ok(());
        };
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        self.deadline(bind_all(&q).execute(&self.pool)).await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let q = sql::delete(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let res = self.deadline(bind_all(&q).execute(&self.pool)).await?;
        tracing::debug!(id, rows = res.rows_affected(), "delete");
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.deadline(sqlx::query("SELECT 1").fetch_optional(&self.pool))
            .await
            .map(|_| ())
    }
}
