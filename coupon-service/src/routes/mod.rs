use axum::{
    extract::Request,
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};
use coupon_shared::store::{memory::MemoryCouponStore, CouponStore};
use log::{info, warn};
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::handlers::{
    coupon_handlers::{create_coupon, delete_coupon, get_coupon, get_coupons, update_coupon},
    handle_panic,
};

/// Creates a router backed by a freshly seeded in-memory store
pub fn create_router(config: &ServiceConfig) -> Router {
    info!("Creating router with seeded in-memory store");

    let store = Arc::new(MemoryCouponStore::default());

    create_router_with_store(store, &config.base_path)
}

/// Creates a router with a given store implementation
pub fn create_router_with_store<S>(store: Arc<S>, prefix: &str) -> Router
where
    S: CouponStore + 'static,
{
    info!("Setting up API routes with prefix: '{}'", prefix);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    let api_routes = Router::new()
        .route(
            "/api/coupon",
            get(get_coupons::<S>)
                .post(create_coupon::<S>)
                .put(update_coupon::<S>),
        )
        .route(
            "/api/coupon/:id",
            get(get_coupon::<S>).delete(delete_coupon::<S>),
        )
        .with_state(store);

    let router = if prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(prefix, api_routes)
    };

    router
        .fallback(|req: Request| async move {
            warn!("No route matched for: {} {}", req.method(), req.uri());
            AppError::route_not_found()
        })
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
