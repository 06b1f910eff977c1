//! Handler tests for Products domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! They run against the in-memory repository, so no database is needed.
//! Full PostgreSQL coverage lives in integration_test.rs.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

fn test_app() -> Router {
    let repo = InMemoryProductRepository::new();
    let service = ProductService::new(repo);
    handlers::router(service)
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_create_product_handler_returns_201() {
    let app = test_app();

    let request = post_json(
        "/",
        json!({
            "name": "테스트 제품",
            "maker": "테스트 메이커",
            "price": 1000.0,
            "image_url": "http://test.com/test.jpg"
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name, "테스트 제품");
    assert_eq!(product.maker, "테스트 메이커");
    assert_eq!(product.price, 1000.0);
    assert_eq!(product.image_url.as_deref(), Some("http://test.com/test.jpg"));
}

#[tokio::test]
async fn test_create_product_handler_validates_input() {
    let app = test_app();

    // Invalid name (empty string)
    let request = post_json(
        "/",
        json!({
            "name": "",  // Invalid!
            "maker": "테스트 메이커",
            "price": 1000.0
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_handler_rejects_missing_name() {
    let app = test_app();

    let request = post_json("/", json!({ "maker": "테스트 메이커" }));

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_product_handler_returns_200() {
    let repo = InMemoryProductRepository::new();
    let service = ProductService::new(repo);

    let created = service
        .create_product(CreateProduct {
            name: "테스트 제품".to_string(),
            maker: "테스트 메이커".to_string(),
            price: 1000.0,
            image_url: None,
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, created.id);
    assert_eq!(product.name, "테스트 제품");
}

#[tokio::test]
async fn test_get_product_handler_returns_404_for_missing() {
    let app = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/9999")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_product_handler_returns_400_for_invalid_id() {
    let app = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/not-a-number")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_products_handler_empty() {
    let app = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_list_products_handler_returns_all_in_id_order() {
    let repo = InMemoryProductRepository::new();
    let service = ProductService::new(repo);

    for i in 0..3 {
        service
            .create_product(CreateProduct {
                name: format!("제품 {}", i),
                maker: "테스트 메이커".to_string(),
                price: 1000.0 * f64::from(i + 1),
                image_url: None,
            })
            .await
            .unwrap();
    }

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 3);
    let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_update_product_handler_replaces_fields_and_keeps_id() {
    let repo = InMemoryProductRepository::new();
    let service = ProductService::new(repo);

    let created = service
        .create_product(CreateProduct {
            name: "테스트 제품".to_string(),
            maker: "테스트 메이커".to_string(),
            price: 1000.0,
            image_url: Some("http://test.com/test.jpg".to_string()),
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = put_json(
        &format!("/{}", created.id),
        json!({
            "name": "업데이트 제품",
            "maker": "업데이트 메이커",
            "price": 2000.0
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, created.id);
    assert_eq!(product.name, "업데이트 제품");
    assert_eq!(product.maker, "업데이트 메이커");
    assert_eq!(product.price, 2000.0);
    // Omitted image_url clears the stored value
    assert_eq!(product.image_url, None);
}

#[tokio::test]
async fn test_update_product_handler_returns_404_for_missing() {
    let app = test_app();

    let request = put_json(
        "/9999",
        json!({
            "name": "업데이트 제품",
            "maker": "메이커",
            "price": 100.0
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_handler_returns_204_then_404() {
    let repo = InMemoryProductRepository::new();
    let service = ProductService::new(repo);

    let created = service
        .create_product(CreateProduct {
            name: "테스트 제품".to_string(),
            maker: "테스트 메이커".to_string(),
            price: 1000.0,
            image_url: None,
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleted products can no longer be fetched
    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_handler_returns_404_for_missing() {
    let app = test_app();

    let request = Request::builder()
        .method("DELETE")
        .uri("/9999")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
