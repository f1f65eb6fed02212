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
        people::{PeopleDto, PeopleWithRelationsDto},
    },
    server::{
        error::AppError,
        extract::ApiQuery,
        model::people::{People, PeopleLookup},
        service::people::PeopleService,
        state::AppState,
    },
};

/// Tag for grouping people endpoints in OpenAPI documentation
pub static PEOPLE_TAG: &str = "people";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PeopleSearchParams {
    pub party_id: Option<i64>,
    pub party_number: Option<i64>,
    pub infobip_id: Option<String>,
}

/// List all people.
///
/// # Returns
/// - `200 OK` - Every person ordered by id
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/people/",
    tag = PEOPLE_TAG,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "All people", body = Vec<PeopleDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PeopleService::new(state.store.as_ref());

    let people: Vec<PeopleDto> = service
        .list()
        .await?
        .into_iter()
        .map(People::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(people)))
}

/// Find a person with their RDV and conversations.
///
/// Criteria are tried in the order `party_id`, `party_number`, `infobip_id`.
///
/// # Returns
/// - `200 OK` - Person with relations
/// - `400 Bad Request` - No search criterion given
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No person matches
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/people/search",
    tag = PEOPLE_TAG,
    security(("bearer_token" = [])),
    params(PeopleSearchParams),
    responses(
        (status = 200, description = "Person with RDV and conversations", body = PeopleWithRelationsDto),
        (status = 400, description = "No search criterion given", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_people(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PeopleSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let lookup =
        PeopleLookup::from_criteria(params.party_id, params.party_number, params.infobip_id)
            .ok_or_else(|| {
                AppError::BadRequest("Provide party_id, party_number or infobip_id".to_string())
            })?;

    let service = PeopleService::new(state.store.as_ref());
    let people = service.search(&lookup).await?;

    Ok((StatusCode::OK, Json(people.into_dto())))
}
