use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AuditEvent, AuditOutcome, AuthClaims, JwtAuth, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
    extract_ip_from_headers, extract_user_agent, optional_jwt_auth_middleware,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::{CreateEvent, Event, EventListQuery, EventPage, Registration};
use crate::service::EventService;

/// OpenAPI documentation for the events API
#[derive(OpenApi)]
#[openapi(
    paths(list_events, create_event, get_event, register_for_event),
    components(
        schemas(Event, CreateEvent, EventPage, EventListQuery),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "events", description = "Event listing, creation, and registration")
    )
)]
pub struct ApiDoc;

/// Create the events router.
///
/// Listing and lookup are public; creation and registration need a
/// valid token, checked in the handlers from the optionally-attached
/// claims.
pub fn router(service: EventService, auth: JwtAuth) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/{id}", get(get_event))
        .route("/{id}/register", post(register_for_event))
        .layer(axum::middleware::from_fn_with_state(
            auth,
            optional_jwt_auth_middleware,
        ))
        .with_state(shared_service)
}

/// List events across the per-category collections
#[utoipa::path(
    get,
    path = "",
    tag = "events",
    params(EventListQuery),
    responses(
        (status = 200, description = "One page of events with pagination metadata", body = EventPage),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events(
    State(service): State<Arc<EventService>>,
    Query(query): Query<EventListQuery>,
) -> EventResult<Json<EventPage>> {
    let page = service.list_events(query).await?;
    Ok(Json(page))
}

/// Create a new event
#[utoipa::path(
    post,
    path = "",
    tag = "events",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event(
    State(service): State<Arc<EventService>>,
    AuthClaims(claims): AuthClaims,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateEvent>,
) -> EventResult<impl IntoResponse> {
    let event = service.create_event(input).await?;

    AuditEvent::new(
        Some(claims.sub.clone()),
        "event.create",
        Some(format!("event:{}", event.id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .with_details(json!({
        "category": event.category.to_string(),
        "title": event.title,
        "mode": event.mode.to_string(),
    }))
    .log();

    Ok((StatusCode::CREATED, Json(event)))
}

/// Get one event by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "events",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_event(
    State(service): State<Arc<EventService>>,
    UuidPath(id): UuidPath,
) -> EventResult<Json<Event>> {
    let event = service.get_event(id).await?;
    Ok(Json(event))
}

/// Register the authenticated user for an event
#[utoipa::path(
    post,
    path = "/{id}/register",
    tag = "events",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Registered", body = Event),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register_for_event(
    State(service): State<Arc<EventService>>,
    AuthClaims(claims): AuthClaims,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> EventResult<Json<Event>> {
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| EventError::Unauthorized)?;
    let registration = Registration {
        user_id,
        name: claims.name.clone(),
        email: claims.email.clone(),
        registered_at: Utc::now(),
    };

    let event = service.register(id, registration).await?;

    AuditEvent::new(
        Some(claims.sub),
        "event.register",
        Some(format!("event:{}", id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .log();

    Ok(Json(event))
}
