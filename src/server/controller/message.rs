use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, message::MessageDto},
    server::{
        error::AppError, extract::ApiPath, model::message::Message,
        service::message::MessageService, state::AppState,
    },
};

/// Tag for grouping message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "messages";

/// List all messages.
///
/// # Returns
/// - `200 OK` - Every message ordered by id
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/messages/",
    tag = MESSAGE_TAG,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "All messages", body = Vec<MessageDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_messages(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(state.store.as_ref());

    let messages: Vec<MessageDto> = service
        .list()
        .await?
        .into_iter()
        .map(Message::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(messages)))
}

/// List the messages of a conversation in timeline order.
///
/// An unknown conversation yields an empty list rather than 404.
#[utoipa::path(
    get,
    path = "/api/v1/messages/by-conversation/{external_id}",
    tag = MESSAGE_TAG,
    security(("bearer_token" = [])),
    params(
        ("external_id" = String, Path, description = "External conversation id")
    ),
    responses(
        (status = 200, description = "Messages of the conversation", body = Vec<MessageDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_messages_by_conversation(
    State(state): State<AppState>,
    ApiPath(external_id): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(state.store.as_ref());

    let messages: Vec<MessageDto> = service
        .by_conversation(&external_id)
        .await?
        .into_iter()
        .map(Message::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(messages)))
}

/// Get a single message.
///
/// # Returns
/// - `200 OK` - The message
/// - `400 Bad Request` - Id is not an integer
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No message with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/messages/{id}",
    tag = MESSAGE_TAG,
    security(("bearer_token" = [])),
    params(
        ("id" = i32, Path, description = "Message id")
    ),
    responses(
        (status = 200, description = "The message", body = MessageDto),
        (status = 400, description = "Id is not an integer", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_message(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(state.store.as_ref());
    let message = service.get(id).await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}
