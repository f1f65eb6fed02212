use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The request carries no `Authorization` header.
    #[error("Missing Authorization header")]
    MissingHeader,

    /// The `Authorization` header is not `Bearer <token>`.
    ///
    /// Covers non-ASCII header values, other schemes and an empty credential.
    #[error("Malformed Authorization header, expected 'Bearer <token>'")]
    MalformedHeader,

    /// The bearer credential does not equal the configured API token.
    #[error("Invalid or expired token")]
    InvalidToken,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant results in 401 Unauthorized with a `WWW-Authenticate: Bearer`
/// challenge and the error message in the body.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
