//! Accounts table DDL.

use crate::error::AppError;
use crate::sql::ACCOUNTS_TABLE;
use sqlx::PgPool;

/// Create the accounts table if it does not exist. Existing tables are left as they are.
pub async fn ensure_accounts_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            uid BIGSERIAL PRIMARY KEY,
            firstname TEXT NOT NULL DEFAULT '',
            lastname TEXT NOT NULL DEFAULT '',
            password TEXT NOT NULL DEFAULT '',
            mobilenumber BIGINT NOT NULL DEFAULT 0
        )
        "#,
        ACCOUNTS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}
