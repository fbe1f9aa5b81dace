use axum::{
    Extension, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AuditEvent, AuditOutcome, JwtAuth, JwtClaims, ValidatedJson, extract_ip_from_headers,
    extract_user_agent, jwt_auth_middleware,
};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UpdateProfile, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the auth/users router.
///
/// Public routes: POST /register, POST /login.
/// Protected routes (JWT): GET /me, PUT /me.
pub fn router<R: UserRepository + 'static>(service: UserService<R>, auth: JwtAuth) -> Router {
    let shared_service = Arc::new(service);

    let protected = Router::new()
        .route("/me", get(me).put(update_me))
        .layer(axum::middleware::from_fn_with_state(
            auth,
            jwt_auth_middleware,
        ))
        .with_state(shared_service.clone());

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(shared_service)
        .merge(protected)
}

/// Register a new account
///
/// POST /auth/register
async fn register<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> UserResult<impl IntoResponse> {
    let response = service.register(input).await?;

    AuditEvent::new(
        Some(response.user.id.to_string()),
        "user.register",
        Some(format!("user:{}", response.user.id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .with_details(json!({ "account_type": response.user.account_type }))
    .log();

    Ok((StatusCode::CREATED, Json(response)))
}

/// Log in with email and password
///
/// POST /auth/login
async fn login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<AuthResponse>> {
    let response = service.login(input).await?;

    AuditEvent::new(
        Some(response.user.id.to_string()),
        "user.login",
        None,
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .log();

    Ok(Json(response))
}

/// Get the authenticated user's profile
///
/// GET /auth/me
async fn me<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Extension(claims): Extension<JwtClaims>,
) -> UserResult<Json<UserResponse>> {
    let id = parse_subject(&claims)?;
    let user = service.get_profile(id).await?;
    Ok(Json(user))
}

/// Update the authenticated user's profile
///
/// PUT /auth/me
async fn update_me<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Extension(claims): Extension<JwtClaims>,
    ValidatedJson(input): ValidatedJson<UpdateProfile>,
) -> UserResult<Json<UserResponse>> {
    let id = parse_subject(&claims)?;
    let user = service.update_profile(id, input).await?;
    Ok(Json(user))
}

fn parse_subject(claims: &JwtClaims) -> UserResult<Uuid> {
    Uuid::parse_str(&claims.sub).map_err(|_| UserError::Unauthorized)
}
