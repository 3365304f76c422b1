// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database: DatabaseConfig,
}

/// Database coordinates, read from the same variables the original
/// deployment used (`DB_HOST`, `DB_USER`, ...).
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
  pub host: String,
  pub port: u16,
  pub user: String,
  pub password: String,
  pub name: String,
  pub max_connections: u32,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let db_host = get_env("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let db_port = get_env("DB_PORT")
      .unwrap_or_else(|_| "3306".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid DB_PORT: {}", e)))?;
    let db_user = get_env("DB_USER")?;
    let db_password = get_env("DB_PASSWORD")?;
    let db_name = get_env("DB_NAME")?;
    let db_max_connections = get_env("DB_MAX_CONNECTIONS")
      .unwrap_or_else(|_| "10".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database: DatabaseConfig {
        host: db_host,
        port: db_port,
        user: db_user,
        password: db_password,
        name: db_name,
        max_connections: db_max_connections,
      },
    })
  }
}
