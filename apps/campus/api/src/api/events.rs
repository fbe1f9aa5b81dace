use axum::Router;
use domain_events::handlers;

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(state.event_service.clone(), state.jwt_auth.clone())
}
