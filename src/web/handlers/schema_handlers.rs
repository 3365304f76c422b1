// src/web/handlers/schema_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::errors::AppError;
use crate::schema;
use crate::state::AppState;

/// `GET /install`: create the five catalog tables. Safe to call repeatedly.
/// Reports the aggregate outcome; a failed statement surfaces as a 500
/// naming the affected tables instead of an unconditional success.
#[instrument(name = "handler::install", skip(app_state))]
pub async fn install_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  schema::install_schema(&app_state.db_pool).await?;
  Ok(HttpResponse::Ok().body("Tables created successfully"))
}
