// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use catalog_api::config::{AppConfig, DatabaseConfig};
use catalog_api::state::AppState;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use std::sync::{Arc, Once};
use std::time::Duration;

pub fn setup_tracing() {
  static INIT: Once = Once::new();
  INIT.call_once(|| {
    let _ = tracing_subscriber::fmt()
      .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
      .with_test_writer()
      .try_init();
  });
}

/// Database coordinates pointing at a port nothing listens on.
pub fn unreachable_database_config() -> DatabaseConfig {
  DatabaseConfig {
    host: "127.0.0.1".to_string(),
    port: 1,
    user: "test".to_string(),
    password: "test".to_string(),
    name: "catalog_test".to_string(),
    max_connections: 2,
  }
}

/// An `AppState` whose pool can never produce a live connection. The pool is
/// built lazily, so handlers that never touch the database work normally and
/// the rest fail fast (short acquire timeout instead of sqlx's default).
pub fn unreachable_app_state() -> AppState {
  let db = unreachable_database_config();
  let options = MySqlConnectOptions::new()
    .host(&db.host)
    .port(db.port)
    .username(&db.user)
    .password(&db.password)
    .database(&db.name);
  let pool = MySqlPoolOptions::new()
    .max_connections(db.max_connections)
    .acquire_timeout(Duration::from_millis(500))
    .connect_lazy_with(options);

  AppState {
    db_pool: pool,
    config: Arc::new(AppConfig {
      server_host: "127.0.0.1".to_string(),
      server_port: 0,
      database: db,
    }),
  }
}
