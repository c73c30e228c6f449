use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use coupon_shared::error::ServiceError;
use coupon_shared::models::Coupon;
use coupon_shared::store::CouponStore;
use log::{debug, info};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{ApiResponse, CouponResponse, CreateCouponRequest, UpdateCouponRequest};
use crate::validation::{validate_create, validate_update};

// Only integer ids address a coupon; anything else is treated as an unknown route
fn coupon_id(path: std::result::Result<Path<i32>, PathRejection>) -> Result<i32> {
    path.map(|Path(id)| id).map_err(|rejection| {
        debug!("Rejected coupon path: {}", rejection.body_text());
        AppError::route_not_found()
    })
}

fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

// GET /api/coupon
pub async fn get_coupons<S>(
    State(store): State<Arc<S>>,
) -> Result<Json<ApiResponse<Vec<Coupon>>>>
where
    S: CouponStore,
{
    info!("Getting all coupons");

    let coupons = store.list().await?;

    Ok(Json(ApiResponse::success(StatusCode::OK, coupons)))
}

// GET /api/coupon/:id
pub async fn get_coupon<S>(
    State(store): State<Arc<S>>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<Coupon>>>
where
    S: CouponStore,
{
    let id = coupon_id(path)?;
    let coupon = store.find_by_id(id).await?;

    Ok(Json(ApiResponse::success(StatusCode::OK, coupon)))
}

// POST /api/coupon
//
// The envelope reports 201 while the response itself goes out as 200.
pub async fn create_coupon<S>(
    State(store): State<Arc<S>>,
    payload: std::result::Result<Json<CreateCouponRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CouponResponse>>>
where
    S: CouponStore,
{
    let new_coupon = validate_create(json_body(payload)?)?;

    // Name check, ID assignment and insert happen under the store's lock
    let created = store.add(new_coupon).await?;
    debug!("Created coupon id={} name={}", created.id, created.name);

    Ok(Json(ApiResponse::success(
        StatusCode::CREATED,
        CouponResponse::from(created),
    )))
}

// PUT /api/coupon
pub async fn update_coupon<S>(
    State(store): State<Arc<S>>,
    payload: std::result::Result<Json<UpdateCouponRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CouponResponse>>>
where
    S: CouponStore,
{
    let update = validate_update(json_body(payload)?)?;

    // A missing target is reported as a plain bad request, unlike get and delete
    let updated = store.update(update).await.map_err(|err| match err {
        ServiceError::NotFound(_) => AppError::BadRequest("Coupon Not Found!".into()),
        other => AppError::from(other),
    })?;
    debug!("Updated coupon id={}", updated.id);

    Ok(Json(ApiResponse::success(
        StatusCode::OK,
        CouponResponse::from(updated),
    )))
}

// DELETE /api/coupon/:id
pub async fn delete_coupon<S>(
    State(store): State<Arc<S>>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<()>>>
where
    S: CouponStore,
{
    let id = coupon_id(path)?;

    store.remove(id).await?;
    debug!("Deleted coupon id={}", id);

    Ok(Json(ApiResponse::empty(StatusCode::OK)))
}
