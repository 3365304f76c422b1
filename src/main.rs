// src/main.rs

use actix_cors::Cors;
use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use catalog_api::config::AppConfig;
use catalog_api::state::AppState;
use catalog_api::{db, web};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting catalog API server...");

  // Load application configuration
  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);

  // Initialize the database pool. Construction is lazy: an unreachable
  // database is reported by the probe but does not halt startup.
  let db_pool = db::init_pool(&app_config.database);
  db::probe_connection(&db_pool).await;

  // Create AppState
  let app_state = AppState {
    db_pool: db_pool.clone(),
    config: app_config.clone(),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Middleware for tracing requests
      .wrap(Cors::permissive()) // Any origin, any method, any header
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind server to {}", server_address))?
  .run()
  .await
  .context("Server error")?;

  // Explicit pool lifecycle: close checked-out connections before exiting.
  db_pool.close().await;
  tracing::info!("Database pool closed, shutting down.");

  Ok(())
}
