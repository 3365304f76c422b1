// src/services/listing_service.rs

//! Creates a full product listing: the product row plus its description,
//! price, purchasing user, and the order linking product to user.

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;
use tracing::{info, instrument};

/// The flat payload `POST /add_product` accepts.
///
/// Every field is optional at the type level: an absent field binds SQL
/// `NULL`, which the schema's NOT NULL constraints reject, and the resulting
/// database error rolls the whole listing back. `products_url` keeps its
/// historical spelling; it is part of the wire format.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProductListing {
  pub product_name: Option<String>,
  pub products_url: Option<String>,
  pub product_description: Option<String>,
  pub product_brief_description: Option<String>,
  pub product_img: Option<String>,
  pub product_link: Option<String>,
  pub starting_price: Option<String>,
  pub price_range: Option<String>,
  pub user_name: Option<String>,
  pub user_password: Option<String>,
}

/// Identifiers generated while creating a listing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListingIds {
  pub product_id: u64,
  pub user_id: u64,
  pub order_id: u64,
}

/// Inserts the five related rows inside one transaction.
///
/// The product id feeds the description, price, and order inserts; the user
/// id feeds the order insert. Any failure rolls back every row already
/// written, so a listing is either fully present or fully absent.
#[instrument(name = "listing_service::create_product_listing", skip(pool, listing))]
pub async fn create_product_listing(pool: &MySqlPool, listing: &NewProductListing) -> Result<ListingIds> {
  let mut tx = pool.begin().await?;

  let product_id = sqlx::query("INSERT INTO products (product_url, product_name) VALUES (?, ?)")
    .bind(listing.products_url.as_deref())
    .bind(listing.product_name.as_deref())
    .execute(&mut *tx)
    .await?
    .last_insert_id();

  sqlx::query(
    "INSERT INTO product_description (product_id, product_brief_description, product_description, product_img, product_link) VALUES (?, ?, ?, ?, ?)",
  )
  .bind(product_id)
  .bind(listing.product_brief_description.as_deref())
  .bind(listing.product_description.as_deref())
  .bind(listing.product_img.as_deref())
  .bind(listing.product_link.as_deref())
  .execute(&mut *tx)
  .await?;

  sqlx::query("INSERT INTO product_price (product_id, starting_price, price_range) VALUES (?, ?, ?)")
    .bind(product_id)
    .bind(listing.starting_price.as_deref())
    .bind(listing.price_range.as_deref())
    .execute(&mut *tx)
    .await?;

  let user_id = sqlx::query("INSERT INTO users (user_name, user_password) VALUES (?, ?)")
    .bind(listing.user_name.as_deref())
    .bind(listing.user_password.as_deref())
    .execute(&mut *tx)
    .await?
    .last_insert_id();

  let order_id = sqlx::query("INSERT INTO orders (product_id, user_id) VALUES (?, ?)")
    .bind(product_id)
    .bind(user_id)
    .execute(&mut *tx)
    .await?
    .last_insert_id();

  tx.commit().await?;

  info!(product_id, user_id, order_id, "Product listing created.");

  Ok(ListingIds {
    product_id,
    user_id,
    order_id,
  })
}
