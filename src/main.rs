//! Account registry server: reads config from env, connects the store, mounts account and common routes.

use account_registry::{
    account_routes, common_routes_with_ready, ensure_accounts_table, AccountRepository, AppState,
    Config, MemoryAccountRepository, PgAccountRepository, StoreKind,
};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("account_registry=info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(db = ?config.db, store = ?config.store, "configuration loaded");

    let accounts: Arc<dyn AccountRepository> = match config.store {
        StoreKind::Postgres => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(config.store_timeout)
                .connect_with(config.db.connect_options())
                .await?;
            ensure_accounts_table(&pool).await?;
            tracing::info!("store connected");
            Arc::new(PgAccountRepository::new(pool, config.store_timeout))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory account store; data is lost on exit");
            Arc::new(MemoryAccountRepository::new())
        }
    };
    let state = AppState::new(accounts);

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(account_routes(state))
        .layer(RequestBodyLimitLayer::new(config.body_limit));

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
