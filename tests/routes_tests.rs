// tests/routes_tests.rs
mod common;

use actix_web::web::Data;
use actix_web::{http::StatusCode, test, App};
use serde_json::json;

use catalog_api::web::configure_app_routes;

#[actix_web::test]
async fn root_reports_server_running() {
  common::setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(Data::new(common::unreachable_app_state()))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body = test::read_body(resp).await;
  assert_eq!(body, "Server is running");
}

#[actix_web::test]
async fn unknown_route_is_not_found() {
  common::setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(Data::new(common::unreachable_app_state()))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/no_such_route").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_products_reports_database_failure_as_500() {
  common::setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(Data::new(common::unreachable_app_state()))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/products").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

  // Error bodies are JSON, not plain text.
  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"error": "Database operation failed"}));
}

#[actix_web::test]
async fn get_product_reports_database_failure_as_500() {
  common::setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(Data::new(common::unreachable_app_state()))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/products/99999").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn non_numeric_product_id_never_reaches_sql() {
  common::setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(Data::new(common::unreachable_app_state()))
      .configure(configure_app_routes),
  )
  .await;

  // The typed path extractor rejects this before any query runs; against an
  // unreachable database a handler-level attempt would have been a 500.
  let req = test::TestRequest::get().uri("/products/not-a-number").to_request();
  let resp = test::call_service(&app, req).await;
  assert_ne!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn add_product_rejects_non_json_body() {
  common::setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(Data::new(common::unreachable_app_state()))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::post()
    .uri("/add_product")
    .insert_header(("content-type", "text/plain"))
    .set_payload("not json")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn add_product_reports_database_failure_as_500() {
  common::setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(Data::new(common::unreachable_app_state()))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::post()
    .uri("/add_product")
    .set_json(json!({
      "product_name": "Widget",
      "products_url": "w.png",
      "product_description": "Full desc",
      "product_brief_description": "Brief",
      "product_img": "img.png",
      "product_link": "link",
      "starting_price": "9.99",
      "price_range": "9-19",
      "user_name": "alice",
      "user_password": "secret"
    }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn install_reports_database_failure_as_500() {
  common::setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(Data::new(common::unreachable_app_state()))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/install").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Table creation failed");
  // All five statements are attempted even when the first one fails.
  let detail = body["detail"].as_str().unwrap();
  for table in ["products", "product_description", "product_price", "users", "orders"] {
    assert!(detail.contains(table), "missing '{}' in: {}", table, detail);
  }
}
