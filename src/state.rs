// src/state.rs

use crate::config::AppConfig;
use sqlx::MySqlPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub db_pool: MySqlPool,
  pub config: Arc<AppConfig>, // Share loaded config
}
