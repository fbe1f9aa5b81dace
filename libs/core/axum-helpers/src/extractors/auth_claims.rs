//! Extractor for JWT claims attached by the auth middleware.

use crate::auth::JwtClaims;
use crate::errors::AppError;
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extracts the authenticated user's claims from request extensions.
///
/// Works behind either `jwt_auth_middleware` or
/// `optional_jwt_auth_middleware`; with the latter this is what turns
/// "no valid token" into a 401 on routes that need one.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::AuthClaims;
///
/// async fn create_thing(AuthClaims(claims): AuthClaims) -> String {
///     format!("created by {}", claims.sub)
/// }
/// ```
pub struct AuthClaims(pub JwtClaims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<JwtClaims>()
            .cloned()
            .map(AuthClaims)
            .ok_or_else(|| {
                AppError::Unauthorized("Authentication required".to_string()).into_response()
            })
    }
}
