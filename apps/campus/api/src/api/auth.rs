use axum::Router;
use domain_users::handlers;

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(state.user_service.clone(), state.jwt_auth.clone())
}
