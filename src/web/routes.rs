// src/web/routes.rs

use actix_web::{web, HttpResponse};

use super::handlers::{product_handlers, schema_handlers};

// Liveness probe; deliberately touches nothing, so it answers even when the
// database is unreachable.
async fn server_status_handler() -> HttpResponse {
  HttpResponse::Ok().body("Server is running")
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/", web::get().to(server_status_handler))
    .route("/install", web::get().to(schema_handlers::install_handler))
    .route("/add_product", web::post().to(product_handlers::add_product_handler))
    .service(
      web::scope("/products")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
    );
}
