// tests/http_api_tests.rs
mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use common::*;
use serde_json::{json, Value};
use storefront::web::configure_app_routes;

macro_rules! storefront_app {
  ($state:expr) => {
    test::init_service(
      App::new()
        .app_data(web::Data::new($state))
        .configure(configure_app_routes),
    )
    .await
  };
}

#[actix_web::test]
async fn test_banner() {
  let (state, _store) = memory_state().await;
  let app = storefront_app!(state);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = test::read_body(resp).await;
  assert_eq!(body, web::Bytes::from_static(b"E-commerce Backend is running"));
}

#[actix_web::test]
async fn test_register_and_login_flow() {
  let (state, _store) = memory_state().await;
  let app = storefront_app!(state);

  let req = test::TestRequest::post()
    .uri("/register")
    .set_json(json!({ "username": "alice", "password": "s3cret" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "message": "User registered successfully" }));

  let req = test::TestRequest::post()
    .uri("/register")
    .set_json(json!({ "username": "alice", "password": "again" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "message": "User already exists" }));

  let req = test::TestRequest::post()
    .uri("/login")
    .set_json(json!({ "username": "alice", "password": "s3cret" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "message": "Login successful", "username": "alice" }));

  let req = test::TestRequest::post()
    .uri("/login")
    .set_json(json!({ "username": "alice", "password": "wrong" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "message": "Invalid credentials" }));
}

#[actix_web::test]
async fn test_register_with_missing_field_or_bad_body_is_400() {
  let (state, _store) = memory_state().await;
  let app = storefront_app!(state);

  let req = test::TestRequest::post()
    .uri("/register")
    .set_json(json!({ "username": "alice" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "message": "Invalid request body" }));

  let req = test::TestRequest::post()
    .uri("/register")
    .insert_header(("content-type", "application/json"))
    .set_payload("{ username: ")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_cart_lifecycle() {
  let (state, _store) = memory_state().await;
  let app = storefront_app!(state);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/cart/alice").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!([]));

  // Quantity defaults to 1.
  let req = test::TestRequest::post()
    .uri("/cart/alice/add")
    .set_json(json!({ "product": product_json(1, "Headphones", 1999) }))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body[0]["quantity"], json!(1));
  assert_eq!(body[0]["Description"], json!("Headphones description"));

  let req = test::TestRequest::post()
    .uri("/cart/alice/add")
    .set_json(json!({ "product": product_json(1, "Headphones", 1999), "quantity": 2 }))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body.as_array().unwrap().len(), 1);
  assert_eq!(body[0]["id"], json!(1));
  assert_eq!(body[0]["quantity"], json!(3));

  let req = test::TestRequest::post()
    .uri("/cart/alice/add")
    .set_json(json!({ "product": product_json(2, "Keyboard", 999), "quantity": 1 }))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body.as_array().unwrap().len(), 2);

  let req = test::TestRequest::put()
    .uri("/cart/alice/update")
    .set_json(json!({ "productId": 2, "quantity": 5 }))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body[1]["quantity"], json!(5));

  let req = test::TestRequest::put()
    .uri("/cart/alice/update")
    .set_json(json!({ "productId": 1, "quantity": 0 }))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body.as_array().unwrap().len(), 1);
  assert_eq!(body[0]["id"], json!(2));

  let req = test::TestRequest::delete().uri("/cart/alice/remove/2").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body, json!([]));

  let req = test::TestRequest::delete().uri("/cart/alice/clear").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "message": "Cart cleared successfully" }));
}

#[actix_web::test]
async fn test_cart_error_statuses() {
  let (state, _store) = memory_state().await;
  let app = storefront_app!(state);

  let req = test::TestRequest::put()
    .uri("/cart/ghost/update")
    .set_json(json!({ "productId": 1, "quantity": 2 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "message": "Cart not found" }));

  let req = test::TestRequest::post()
    .uri("/cart/alice/add")
    .set_json(json!({ "product": product_json(1, "Headphones", 1999), "quantity": -1 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let req = test::TestRequest::put()
    .uri("/cart/alice/update")
    .set_json(json!({ "productId": 9, "quantity": 2 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let req = test::TestRequest::delete().uri("/cart/alice/remove/not-a-number").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let req = test::TestRequest::delete().uri("/cart/ghost/remove/1").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "message": "Cart not found" }));
}

#[actix_web::test]
async fn test_add_accepts_product_with_only_an_id() {
  let (state, _store) = memory_state().await;
  let app = storefront_app!(state);

  let req = test::TestRequest::post()
    .uri("/cart/p/add")
    .set_json(json!({ "product": { "id": 1 }, "quantity": 1 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let req = test::TestRequest::post()
    .uri("/cart/p/add")
    .set_json(json!({ "product": { "id": 1 }, "quantity": 2 }))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body, json!([{ "id": 1, "quantity": 3 }]));
}

#[actix_web::test]
async fn test_integer_prices_are_not_rewritten() {
  let (state, _store) = memory_state().await;
  let app = storefront_app!(state);

  let req = test::TestRequest::post()
    .uri("/cart/alice/add")
    .set_json(json!({ "product": product_json(3, "Headphones", 1999) }))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body[0]["price"].to_string(), "1999");

  let req = test::TestRequest::post()
    .uri("/cart/alice/add")
    .set_json(json!({ "product": { "id": 4, "price": 12.5 } }))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body[1]["price"].to_string(), "12.5");
}

#[actix_web::test]
async fn test_orders_round_trip_with_extra_fields() {
  let (state, _store) = memory_state().await;
  let app = storefront_app!(state);

  let req = test::TestRequest::get().uri("/orders/alice").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body, json!([]));

  let req = test::TestRequest::post()
    .uri("/orders/alice")
    .set_json(order_json(1_760_000_000_000))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["message"], json!("Order saved"));
  assert_eq!(body["order"]["id"], json!(1_760_000_000_000_i64));
  assert_eq!(body["order"]["cartItems"][0]["id"], json!(3));

  let req = test::TestRequest::post()
    .uri("/orders/alice")
    .set_json(order_json(1_760_000_000_001))
    .to_request();
  test::call_service(&app, req).await;

  let req = test::TestRequest::get().uri("/orders/alice").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  let ids: Vec<i64> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|order| order["id"].as_i64().unwrap())
    .collect();
  assert_eq!(ids, vec![1_760_000_000_000, 1_760_000_000_001]);
  assert_eq!(body[0]["personName"], json!("Asha"));
  assert_eq!(body[0]["address2"], json!("Near the station"));
}

#[actix_web::test]
async fn test_malformed_order_is_rejected() {
  let (state, _store) = memory_state().await;
  let app = storefront_app!(state);

  let req = test::TestRequest::post()
    .uri("/orders/alice")
    .set_json(json!({ "id": "yesterday", "items": [] }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "message": "Invalid request body" }));
}

#[actix_web::test]
async fn test_order_is_stored_verbatim() {
  let (state, _store) = memory_state().await;
  let app = storefront_app!(state);

  let mut placed = order_json(1_760_000_000_002);
  placed["pincode"] = json!(411001);
  placed["contact"] = json!(9999999999_i64);
  placed["items"] = json!([
    { "name": "Headphones", "quantity": 1, "price": 1999, "id": 3, "image": "/images/3.png" }
  ]);

  let req = test::TestRequest::post()
    .uri("/orders/alice")
    .set_json(placed.clone())
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let req = test::TestRequest::get().uri("/orders/alice").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body, json!([placed]));
  assert_eq!(body[0]["totalAmount"].to_string(), "1999");
}
