use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tower::ServiceExt;

use super::*;
use crate::server::middleware::auth::require_bearer_token;

fn guarded_router() -> Router {
    Router::new()
        .route("/guarded", get(|| async { "ok" }))
        .route_layer(middleware::from_fn_with_state(guard(), require_bearer_token))
}

/// Tests the middleware lets authenticated requests through to the handler.
///
/// Expected: 200 OK
#[tokio::test]
async fn passes_authenticated_request() {
    let response = guarded_router()
        .oneshot(
            Request::get("/guarded")
                .header(header::AUTHORIZATION, "Bearer test-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests the middleware answers 401 with a Bearer challenge for unauthenticated requests.
///
/// Expected: 401 Unauthorized with `WWW-Authenticate: Bearer`
#[tokio::test]
async fn rejects_unauthenticated_request() {
    let response = guarded_router()
        .oneshot(Request::get("/guarded").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}
