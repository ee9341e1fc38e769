//! Process configuration, read once from the environment at startup.

pub mod loader;

use sqlx::postgres::PgConnectOptions;
use std::net::SocketAddr;
use std::time::Duration;

/// Which repository backend serves requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

/// Store connection parameters (`dbhost`, `dbport`, `dbuser`, `dbpassword`, `dbname`).
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("dbname", &self.dbname)
            .finish()
    }
}

impl DbConfig {
    /// Typed connect options; no connection string is assembled from raw values.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub db: DbConfig,
    pub listen_addr: SocketAddr,
    pub max_connections: u32,
    /// Deadline for each store call and for pool acquisition.
    pub store_timeout: Duration,
    pub body_limit: usize,
    pub store: StoreKind,
}
