//! In-process account repository. Same contract as the PostgreSQL backend; ids start at 1.

use super::AccountRepository;
use crate::error::AppError;
use crate::model::Account;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Account>,
}

#[derive(Default)]
pub struct MemoryAccountRepository {
    inner: RwLock<Inner>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn insert(&self, account: &Account) -> Result<i64, AppError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        let mut row = account.clone();
        row.id = id;
        inner.rows.insert(id, row);
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Vec<Account>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned().into_iter().collect())
    }

    async fn update_fields(&self, id: i64, patch: &Account) -> Result<(), AppError> {
        if let Some(row) = self.inner.write().await.rows.get_mut(&id) {
            row.apply(patch);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
