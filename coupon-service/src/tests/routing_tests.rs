use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use coupon_shared::store::memory::MemoryCouponStore;
use coupon_shared::test_utils::failing_store::FailingCouponStore;
use coupon_shared::test_utils::http_test_utils::{create_test_request, response_to_json};
use coupon_shared::test_utils::test_logging::init_test_logging;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::config::ServiceConfig;
use crate::handlers::handle_panic;
use crate::routes;

#[tokio::test]
async fn test_unknown_route_returns_not_found_envelope() {
    init_test_logging();
    let app = routes::create_router_with_store(Arc::new(MemoryCouponStore::default()), "");

    let response = app
        .oneshot(create_test_request("GET", "/api/vouchers", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_to_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["statusCode"], 404);
    assert_eq!(
        body["errorMessages"],
        json!(["The requested resource was not found"])
    );
}

#[tokio::test]
async fn test_routes_nested_under_base_path() {
    init_test_logging();
    let config = ServiceConfig {
        base_path: "/Prod".into(),
        ..ServiceConfig::default()
    };
    let app = routes::create_router(&config);

    let prefixed = app
        .clone()
        .oneshot(create_test_request("GET", "/Prod/api/coupon/1", None))
        .await
        .unwrap();
    assert_eq!(prefixed.status(), StatusCode::OK);

    let bare = app
        .oneshot(create_test_request("GET", "/api/coupon/1", None))
        .await
        .unwrap();
    assert_eq!(bare.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_returns_generic_500() {
    init_test_logging();
    let store = Arc::new(FailingCouponStore::new("lock poisoned"));
    let app = routes::create_router_with_store(store, "");

    let response = app
        .oneshot(create_test_request("GET", "/api/coupon", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_to_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["statusCode"], 500);
    assert_eq!(body["errorMessages"], json!(["Internal server error"]));
}

#[tokio::test]
async fn test_validation_runs_before_store_access() {
    init_test_logging();
    let store = Arc::new(FailingCouponStore::new("should not be reached"));
    let app = routes::create_router_with_store(store, "");

    let response = app
        .oneshot(create_test_request(
            "POST",
            "/api/coupon",
            Some(json!({ "name": "BAD", "percent": 0, "isActive": true })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cors_headers_present() {
    init_test_logging();
    let app = routes::create_router_with_store(Arc::new(MemoryCouponStore::default()), "");

    let request = Request::builder()
        .method("GET")
        .uri("/api/coupon")
        .header("origin", "https://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_panic_handler_hides_detail() {
    let response = handle_panic(Box::new("secret internals".to_string()));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_to_json(response).await;
    assert_eq!(body["errorMessages"], json!(["Internal server error"]));
    assert!(!body.to_string().contains("secret"));
}
