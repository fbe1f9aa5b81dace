use axum::Router;
use domain_universities::handlers;

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(state.university_cache.clone())
}
