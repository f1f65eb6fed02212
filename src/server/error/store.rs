use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Entity store failures that carry meaning for the caller.
///
/// Raw database failures stay `AppError::DbErr`; only outcomes a client can act on
/// are modeled here.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A lookup matched no row.
    ///
    /// Results in 404 Not Found.
    #[error("{entity} not found")]
    NotFound {
        /// Human readable entity name, e.g. "RDV"
        entity: &'static str,
    },

    /// A write would break referential integrity or a uniqueness rule.
    ///
    /// Results in 409 Conflict with the violated rule in the body.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn violation(rule: impl Into<String>) -> Self {
        Self::ConstraintViolation(rule.into())
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ConstraintViolation(_) => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
