//! Account persistence: the repository contract and its backends.

mod memory;
mod postgres;

pub use memory::MemoryAccountRepository;
pub use postgres::PgAccountRepository;

use crate::error::AppError;
use crate::model::Account;
use async_trait::async_trait;

/// All reads and writes against the account store. Implementations are shared
/// across concurrent requests and must not require external locking.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Store a new account and return the id the store assigned. `account.id` is ignored.
    async fn insert(&self, account: &Account) -> Result<i64, AppError>;

    /// Every stored account. An empty store yields an empty vec, not an error.
    async fn find_all(&self) -> Result<Vec<Account>, AppError>;

    /// Zero or one account. An empty vec means "no such id".
    async fn find_by_id(&self, id: i64) -> Result<Vec<Account>, AppError>;

    /// Apply the non-default fields of `patch` to the row with `id`.
    /// Does not check existence; an unmatched id is a silent no-op.
    async fn update_fields(&self, id: i64, patch: &Account) -> Result<(), AppError>;

    /// Remove the row with `id`. Succeeds when nothing matched.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Cheap liveness probe for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
