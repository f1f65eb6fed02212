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
        conversation::{
            ConversationDetailDto, ConversationDto, ConversationSummaryDto, ProgramSummaryDto,
        },
    },
    server::{
        error::AppError,
        extract::{ApiPath, ApiQuery},
        model::conversation::{
            Conversation, ConversationLookup, ConversationSummary, ProgramSummary,
        },
        service::conversation::ConversationService,
        state::AppState,
    },
};

/// Tag for grouping conversation endpoints in OpenAPI documentation
pub static CONVERSATION_TAG: &str = "conversations";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConversationDetailParams {
    /// Preferred over `lead_id` when both are given
    pub external_id: Option<String>,
    pub lead_id: Option<String>,
}

/// List all conversation rows.
///
/// # Returns
/// - `200 OK` - Every conversation row ordered by id
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/conversations/",
    tag = CONVERSATION_TAG,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "All conversations", body = Vec<ConversationDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_conversations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConversationService::new(state.store.as_ref());

    let conversations: Vec<ConversationDto> = service
        .list()
        .await?
        .into_iter()
        .map(Conversation::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(conversations)))
}

/// Get the latest row of a conversation with its message timeline.
///
/// # Returns
/// - `200 OK` - Conversation detail
/// - `400 Bad Request` - Neither `external_id` nor `lead_id` given
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No conversation matches
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/conversations/detail",
    tag = CONVERSATION_TAG,
    security(("bearer_token" = [])),
    params(ConversationDetailParams),
    responses(
        (status = 200, description = "Conversation with messages", body = ConversationDetailDto),
        (status = 400, description = "No search criterion given", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Conversation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_conversation_detail(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ConversationDetailParams>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = ConversationLookup::from_criteria(params.external_id, params.lead_id)
        .ok_or_else(|| AppError::BadRequest("Provide external_id or lead_id".to_string()))?;

    let service = ConversationService::new(state.store.as_ref());
    let detail = service.detail(&lookup).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Get the message timeline of a conversation by its external id.
///
/// # Returns
/// - `200 OK` - Conversation detail
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No conversation with this external id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/conversations/{external_id}/messages",
    tag = CONVERSATION_TAG,
    security(("bearer_token" = [])),
    params(
        ("external_id" = String, Path, description = "External conversation id")
    ),
    responses(
        (status = 200, description = "Conversation with messages", body = ConversationDetailDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Conversation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_conversation_messages(
    State(state): State<AppState>,
    ApiPath(external_id): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConversationService::new(state.store.as_ref());
    let detail = service
        .detail(&ConversationLookup::ExternalId(external_id))
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// List the CRM programs a person has conversations in.
///
/// # Returns
/// - `200 OK` - One summary per CRM code, most recently active first
/// - `400 Bad Request` - Party number is not an integer
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No person with this party number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/conversations/people/{party_number}/programs",
    tag = CONVERSATION_TAG,
    security(("bearer_token" = [])),
    params(
        ("party_number" = i64, Path, description = "Party number of the person")
    ),
    responses(
        (status = 200, description = "Programs of the person", body = Vec<ProgramSummaryDto>),
        (status = 400, description = "Party number is not an integer", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_people_programs(
    State(state): State<AppState>,
    ApiPath(party_number): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConversationService::new(state.store.as_ref());

    let programs: Vec<ProgramSummaryDto> = service
        .programs_of_people(party_number)
        .await?
        .into_iter()
        .map(ProgramSummary::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(programs)))
}

/// List a person's conversations within one CRM program.
///
/// # Returns
/// - `200 OK` - Conversation summaries, most recently updated first
/// - `400 Bad Request` - Party number is not an integer
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No person with this party number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/conversations/people/{party_number}/programs/{crm_code}/conversations",
    tag = CONVERSATION_TAG,
    security(("bearer_token" = [])),
    params(
        ("party_number" = i64, Path, description = "Party number of the person"),
        ("crm_code" = String, Path, description = "CRM program code")
    ),
    responses(
        (status = 200, description = "Conversations in the program", body = Vec<ConversationSummaryDto>),
        (status = 400, description = "Party number is not an integer", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_program_conversations(
    State(state): State<AppState>,
    ApiPath((party_number, crm_code)): ApiPath<(i64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConversationService::new(state.store.as_ref());

    let conversations: Vec<ConversationSummaryDto> = service
        .program_conversations(party_number, &crm_code)
        .await?
        .into_iter()
        .map(ConversationSummary::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(conversations)))
}

/// List the conversations linked to a lead.
///
/// An unknown lead yields an empty list rather than 404.
#[utoipa::path(
    get,
    path = "/api/v1/conversations/lead/{lead_id}/conversations",
    tag = CONVERSATION_TAG,
    security(("bearer_token" = [])),
    params(
        ("lead_id" = String, Path, description = "CRM lead id")
    ),
    responses(
        (status = 200, description = "Conversations of the lead", body = Vec<ConversationSummaryDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_lead_conversations(
    State(state): State<AppState>,
    ApiPath(lead_id): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConversationService::new(state.store.as_ref());

    let conversations: Vec<ConversationSummaryDto> = service
        .lead_conversations(&lead_id)
        .await?
        .into_iter()
        .map(ConversationSummary::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(conversations)))
}
