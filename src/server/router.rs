//! HTTP routing, CORS and the OpenAPI document.
//!
//! Every route under `/api/v1` except the OpenAPI document sits behind the bearer token
//! guard. `/` and `/health` are public.

use axum::{
    http::Method,
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{ErrorDto, HealthDto, ServiceInfoDto},
        conversation::{
            ConversationDetailDto, ConversationDto, ConversationSummaryDto, ProgramSummaryDto,
        },
        message::{MessageDto, MessageTimelineItemDto},
        people::{PeopleDto, PeopleWithRelationsDto},
        rdv::{RdvDto, RdvWithRelationsDto},
    },
    server::{
        config::AllowedOrigins,
        controller::{conversation, health, message, people, rdv},
        middleware::auth::require_bearer_token,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "InfobipExt API", description = "Read access to RDVs, people, conversations and messages"),
    paths(
        health::health,
        health::service_info,
        rdv::list_rdv,
        rdv::search_rdv,
        people::list_people,
        people::search_people,
        conversation::list_conversations,
        conversation::get_conversation_detail,
        conversation::get_conversation_messages,
        conversation::list_people_programs,
        conversation::list_program_conversations,
        conversation::list_lead_conversations,
        message::list_messages,
        message::list_messages_by_conversation,
        message::get_message,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        ServiceInfoDto,
        RdvDto,
        RdvWithRelationsDto,
        PeopleDto,
        PeopleWithRelationsDto,
        ConversationDto,
        ConversationDetailDto,
        ConversationSummaryDto,
        ProgramSummaryDto,
        MessageDto,
        MessageTimelineItemDto,
    )),
    modifiers(&BearerSecurity),
)]
pub struct ApiDoc;

/// Registers the `bearer_token` scheme referenced by the guarded paths.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

/// Builds the application router with guard, tracing and CORS layers applied.
///
/// # Arguments
/// - `state` - Shared state; its `AuthGuard` protects the resource routes
/// - `allowed_origins` - Origins accepted by the CORS layer
pub fn router(state: AppState, allowed_origins: &AllowedOrigins) -> Router {
    let api = Router::new()
        .route("/rdv/", get(rdv::list_rdv))
        .route("/rdv/search", get(rdv::search_rdv))
        .route("/people/", get(people::list_people))
        .route("/people/search", get(people::search_people))
        .route("/conversations/", get(conversation::list_conversations))
        .route(
            "/conversations/detail",
            get(conversation::get_conversation_detail),
        )
        .route(
            "/conversations/{external_id}/messages",
            get(conversation::get_conversation_messages),
        )
        .route(
            "/conversations/people/{party_number}/programs",
            get(conversation::list_people_programs),
        )
        .route(
            "/conversations/people/{party_number}/programs/{crm_code}/conversations",
            get(conversation::list_program_conversations),
        )
        .route(
            "/conversations/lead/{lead_id}/conversations",
            get(conversation::list_lead_conversations),
        )
        .route("/messages/", get(message::list_messages))
        .route(
            "/messages/by-conversation/{external_id}",
            get(message::list_messages_by_conversation),
        )
        .route("/messages/{id}", get(message::get_message))
        .route_layer(middleware::from_fn_with_state(
            state.auth_guard.clone(),
            require_bearer_token,
        ))
        // Added after the guard so the document stays public
        .route("/openapi.json", get(openapi));

    Router::new()
        .route("/", get(health::service_info))
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(allowed_origins: &AllowedOrigins) -> CorsLayer {
    let origin = match allowed_origins {
        AllowedOrigins::Any => AllowOrigin::any(),
        AllowedOrigins::List(origins) => AllowOrigin::list(origins.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers(Any)
}
