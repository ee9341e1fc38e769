//! Build `Config` from environment variables (or any key lookup, for tests).

use super::{Config, DbConfig, StoreKind};
use crate::error::ConfigError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_LISTEN_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);
const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Missing keys take defaults; present but unparseable values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let db = DbConfig {
            host: text("dbhost", "localhost"),
            port: parsed(&lookup, "dbport", 5432)?,
            user: text("dbuser", "postgres"),
            password: text("dbpassword", ""),
            dbname: text("dbname", "postgres"),
        };
        let listen_addr: SocketAddr = parsed(&lookup, "LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?;
        let max_connections: u32 = parsed(&lookup, "DB_MAX_CONNECTIONS", 5)?;
        let store_timeout = Duration::from_secs(parsed(&lookup, "STORE_TIMEOUT_SECS", 5)?);
        let body_limit: usize = parsed(&lookup, "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT)?;
        let store = match lookup("ACCOUNT_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => StoreKind::Postgres,
            Some("memory") => StoreKind::Memory,
            Some(other) => return Err(ConfigError::UnknownStore(other.to_string())),
        };

        Ok(Config {
            db,
            listen_addr,
            max_connections,
            store_timeout,
            body_limit,
            store,
        })
    }
}

fn parsed<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
