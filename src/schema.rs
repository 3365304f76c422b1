// src/schema.rs

//! Idempotent schema installation for the five catalog tables.

use crate::errors::{AppError, Result};
use sqlx::MySqlPool;
use tracing::{error, info, instrument};

/// `CREATE TABLE IF NOT EXISTS` statements in dependency order: referenced
/// tables (`products`, `users`) come before the tables holding foreign keys
/// into them.
pub const CREATE_TABLE_STATEMENTS: [(&str, &str); 5] = [
  (
    "products",
    "CREATE TABLE IF NOT EXISTS products (
      product_id INT AUTO_INCREMENT,
      product_url VARCHAR(255) NOT NULL,
      product_name VARCHAR(255) NOT NULL,
      PRIMARY KEY (product_id)
    )",
  ),
  (
    "product_description",
    "CREATE TABLE IF NOT EXISTS product_description (
      description_id INT AUTO_INCREMENT,
      product_id INT NOT NULL,
      product_brief_description TEXT NOT NULL,
      product_description TEXT NOT NULL,
      product_img VARCHAR(255) NOT NULL,
      product_link VARCHAR(255) NOT NULL,
      PRIMARY KEY (description_id),
      FOREIGN KEY (product_id) REFERENCES products(product_id)
    )",
  ),
  (
    "product_price",
    "CREATE TABLE IF NOT EXISTS product_price (
      price_id INT AUTO_INCREMENT,
      product_id INT NOT NULL,
      starting_price VARCHAR(255) NOT NULL,
      price_range VARCHAR(255) NOT NULL,
      PRIMARY KEY (price_id),
      FOREIGN KEY (product_id) REFERENCES products(product_id)
    )",
  ),
  (
    "users",
    "CREATE TABLE IF NOT EXISTS users (
      user_id INT AUTO_INCREMENT,
      user_name VARCHAR(255) NOT NULL,
      user_password VARCHAR(255) NOT NULL,
      PRIMARY KEY (user_id)
    )",
  ),
  (
    "orders",
    "CREATE TABLE IF NOT EXISTS orders (
      order_id INT AUTO_INCREMENT,
      product_id INT NOT NULL,
      user_id INT NOT NULL,
      PRIMARY KEY (order_id),
      FOREIGN KEY (product_id) REFERENCES products(product_id),
      FOREIGN KEY (user_id) REFERENCES users(user_id)
    )",
  ),
];

/// Issues all five statements, each attempted regardless of earlier
/// failures. Returns `Err` naming the tables whose statement failed, so the
/// caller can report the real outcome instead of an unconditional success.
#[instrument(name = "schema::install_schema", skip(pool))]
pub async fn install_schema(pool: &MySqlPool) -> Result<()> {
  let mut failed_tables: Vec<&str> = Vec::new();

  for (table, ddl) in CREATE_TABLE_STATEMENTS {
    match sqlx::query(ddl).execute(pool).await {
      Ok(_) => info!("Table '{}' is present.", table),
      Err(e) => {
        error!(error = %e, table = table, "Failed to create table.");
        failed_tables.push(table);
      }
    }
  }

  if failed_tables.is_empty() {
    Ok(())
  } else {
    Err(AppError::Schema(failed_tables.join(", ")))
  }
}
