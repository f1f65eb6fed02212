use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        rdv::{RdvDto, RdvWithRelationsDto},
    },
    server::{
        error::AppError,
        extract::ApiQuery,
        model::rdv::{Rdv, RdvLookup},
        service::rdv::RdvService,
        state::AppState,
    },
};

/// Tag for grouping RDV endpoints in OpenAPI documentation
pub static RDV_TAG: &str = "rdv";

/// Search criteria for a single RDV. The first present criterion is used, in
/// declaration order.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RdvSearchParams {
    pub party_id: Option<i64>,
    pub party_number: Option<i64>,
    pub infobip_external_id: Option<String>,
}

/// List all RDVs.
///
/// # Returns
/// - `200 OK` - Every RDV ordered by id
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/rdv/",
    tag = RDV_TAG,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "All RDVs", body = Vec<RdvDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_rdv(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = RdvService::new(state.store.as_ref());

    let rdvs: Vec<RdvDto> = service.list().await?.into_iter().map(Rdv::into_dto).collect();

    Ok((StatusCode::OK, Json(rdvs)))
}

/// Find an RDV with its people and conversations.
///
/// # Arguments
/// - `state` - Application state containing the entity store
/// - `params` - At least one of `party_id`, `party_number`, `infobip_external_id`
///
/// # Returns
/// - `200 OK` - RDV with relations
/// - `400 Bad Request` - No search criterion given
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No RDV matches
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/rdv/search",
    tag = RDV_TAG,
    security(("bearer_token" = [])),
    params(RdvSearchParams),
    responses(
        (status = 200, description = "RDV with people and conversations", body = RdvWithRelationsDto),
        (status = 400, description = "No search criterion given", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "RDV not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_rdv(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RdvSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = RdvLookup::from_criteria(
        params.party_id,
        params.party_number,
        params.infobip_external_id,
    )
    .ok_or_else(|| {
        AppError::BadRequest(
            "Provide party_id, party_number or infobip_external_id".to_string(),
        )
    })?;

    let service = RdvService::new(state.store.as_ref());
    let rdv = service.search(&lookup).await?;

    Ok((StatusCode::OK, Json(rdv.into_dto())))
}
