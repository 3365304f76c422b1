// src/models/product.rs

use serde::Serialize;
use sqlx::FromRow;

/// One row of the three-way join between `products`, `product_description`
/// and `product_price` — the projection both read endpoints return.
///
/// Prices are stored and served as strings, matching the schema.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductDetail {
  pub product_id: i32,
  pub product_url: String,
  pub product_name: String,
  pub product_brief_description: String,
  pub product_description: String,
  pub product_img: String,
  pub product_link: String,
  pub starting_price: String,
  pub price_range: String,
}
