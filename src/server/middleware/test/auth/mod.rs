use axum::http::{header, HeaderMap, HeaderValue};

use crate::server::{
    config::ApiToken,
    error::auth::AuthError,
    middleware::auth::AuthGuard,
};

mod require;
mod require_bearer_token;

fn guard() -> AuthGuard {
    AuthGuard::new(ApiToken::new("test-token").unwrap())
}

fn headers_with(authorization: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(authorization).unwrap(),
    );
    headers
}
