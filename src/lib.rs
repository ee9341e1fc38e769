//! Account registry: REST create/read/update/delete over PostgreSQL-backed account records.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod password;
pub mod repository;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Config, DbConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::Account;
pub use repository::{AccountRepository, MemoryAccountRepository, PgAccountRepository};
pub use routes::{account_routes, common_routes_with_ready};
pub use state::AppState;
pub use store::ensure_accounts_table;
