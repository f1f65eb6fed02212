use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{
    config::{AllowedOrigins, ApiToken},
    data::store::SeaOrmStore,
    middleware::auth::AuthGuard,
    router::router,
    state::AppState,
};


const AUTHORIZATION: &str = "Bearer test-token";

/// Builds the full application router over the test database.
fn app(db: &DatabaseConnection) -> Router {
    let state = AppState::new(
        Arc::new(SeaOrmStore::new(db.clone())),
        AuthGuard::new(ApiToken::new("test-token").unwrap()),
    );

    router(state, &AllowedOrigins::Any)
}

/// Sends a GET request and returns the status with the JSON body, `Value::Null` when
/// the body is empty or not JSON.
async fn send(app: Router, uri: &str, authorization: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::get(uri);
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }

    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

async fn get_authorized(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, uri, Some(AUTHORIZATION)).await
}
