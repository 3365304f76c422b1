// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::product::ProductDetail;
use crate::services::listing_service::{self, NewProductListing};
use crate::state::AppState;

const PRODUCT_DETAIL_COLUMNS: &str = "products.product_id, \
   products.product_url, \
   products.product_name, \
   product_description.product_brief_description, \
   product_description.product_description, \
   product_description.product_img, \
   product_description.product_link, \
   product_price.starting_price, \
   product_price.price_range";

const PRODUCT_DETAIL_JOINS: &str = "products \
   JOIN product_description ON products.product_id = product_description.product_id \
   JOIN product_price ON products.product_id = product_price.product_id";

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products: Vec<ProductDetail> = sqlx::query_as(&format!(
    "SELECT {} FROM {}",
    PRODUCT_DETAIL_COLUMNS, PRODUCT_DETAIL_JOINS
  ))
  .fetch_all(&app_state.db_pool)
  .await?;

  info!("Successfully fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({ "products": products })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = *path))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  // Nothing enforces at most one description or price row per product; if
  // several match, the first joined row wins.
  let product: Option<ProductDetail> = sqlx::query_as(&format!(
    "SELECT {} FROM {} WHERE products.product_id = ?",
    PRODUCT_DETAIL_COLUMNS, PRODUCT_DETAIL_JOINS
  ))
  .bind(product_id)
  .fetch_optional(&app_state.db_pool)
  .await?;

  match product {
    Some(product) => {
      info!("Product {} fetched successfully.", product_id);
      Ok(HttpResponse::Ok().json(json!({ "product": product })))
    }
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}

#[instrument(name = "handler::add_product", skip(app_state, payload))]
pub async fn add_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewProductListing>,
) -> Result<HttpResponse, AppError> {
  let ids = listing_service::create_product_listing(&app_state.db_pool, &payload).await?;

  Ok(HttpResponse::Ok().json(json!({
    "message": "Data inserted successfully!",
    "product_id": ids.product_id,
    "user_id": ids.user_id,
    "order_id": ids.order_id,
  })))
}
