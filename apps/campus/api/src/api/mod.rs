use axum::Router;

pub mod auth;
pub mod events;
pub mod health;
pub mod universities;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Takes a reference to AppState and wires up all domain routers.
/// Returns a stateless Router (all sub-routers have state already
/// applied), so only cheap Arc clones happen here.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/auth", auth::router(state)) // Auth routes at /api/auth
        .nest("/events", events::router(state))
        .nest("/universities", universities::router(state))
}

/// Creates a router with the /ready endpoint that performs actual
/// dependency checks.
///
/// This router has state applied and can be merged with the stateless
/// app router from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
