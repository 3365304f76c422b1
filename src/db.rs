// src/db.rs

//! Pool construction and the startup connectivity probe.

use crate::config::DatabaseConfig;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

/// Builds the shared connection pool.
///
/// The pool is constructed lazily: an unreachable database is logged but does
/// not keep the server from starting, so requests fail individually against a
/// dead connection rather than the process refusing to boot.
pub fn init_pool(cfg: &DatabaseConfig) -> MySqlPool {
  let options = MySqlConnectOptions::new()
    .host(&cfg.host)
    .port(cfg.port)
    .username(&cfg.user)
    .password(&cfg.password)
    .database(&cfg.name);

  MySqlPoolOptions::new()
    .max_connections(cfg.max_connections)
    .connect_lazy_with(options)
}

/// Checks out one connection to report connectivity at startup.
pub async fn probe_connection(pool: &MySqlPool) {
  match pool.acquire().await {
    Ok(_conn) => tracing::info!("Connected to MySQL"),
    Err(e) => tracing::error!(error = %e, "Connection error"),
  }
}
