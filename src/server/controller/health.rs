use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::{HealthDto, ServiceInfoDto};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

/// Liveness check.
///
/// Requires no authentication and never touches the database.
///
/// # Returns
/// - `200 OK` - `{"status": "healthy"}`
#[utoipa::path(
    get,
    path = "/health",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "healthy".to_string(),
        }),
    )
}

/// Describes the service and where its API document lives.
#[utoipa::path(
    get,
    path = "/",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "Service information", body = ServiceInfoDto)
    ),
)]
pub async fn service_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ServiceInfoDto {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            openapi: "/api/v1/openapi.json".to_string(),
            authentication: "Authorization: Bearer <token>".to_string(),
        }),
    )
}
