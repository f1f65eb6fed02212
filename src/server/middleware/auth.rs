use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{config::ApiToken, error::auth::AuthError};

/// Validates bearer credentials against the configured shared secret.
///
/// The secret is injected once at construction; the guard keeps no per-request state
/// and has no notion of users, sessions or expiry.
#[derive(Clone, Debug)]
pub struct AuthGuard {
    token: ApiToken,
}

impl AuthGuard {
    pub fn new(token: ApiToken) -> Self {
        Self { token }
    }

    /// Requires a valid `Authorization: Bearer <token>` header.
    ///
    /// # Arguments
    /// - `headers` - Headers of the incoming request
    ///
    /// # Returns
    /// - `Ok(())` - The bearer credential equals the configured token
    /// - `Err(AuthError::MissingHeader)` - No `Authorization` header
    /// - `Err(AuthError::MalformedHeader)` - Not a non-empty `Bearer` credential
    /// - `Err(AuthError::InvalidToken)` - Credential does not match
    pub fn require(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let value = headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingHeader)?;

        let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;
        let credential = bearer_credential(value).ok_or(AuthError::MalformedHeader)?;

        if !self.token.matches(credential) {
            return Err(AuthError::InvalidToken);
        }

        Ok(())
    }
}

/// Extracts the credential of a `Bearer` authorization value. The scheme is
/// case-insensitive.
fn bearer_credential(value: &str) -> Option<&str> {
    let (scheme, credential) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let credential = credential.trim();
    (!credential.is_empty()).then_some(credential)
}

/// Middleware rejecting requests that fail `AuthGuard::require` before any handler
/// or extractor of the guarded routes runs.
pub async fn require_bearer_token(
    State(guard): State<AuthGuard>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    if let Err(err) = guard.require(request.headers()) {
        tracing::debug!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request: {}",
            err
        );
        return Err(err);
    }

    Ok(next.run(request).await)
}
