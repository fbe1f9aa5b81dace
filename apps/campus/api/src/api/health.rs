//! Application-specific readiness checks.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};
use domain_events::EventListQuery;

/// Readiness check endpoint that exercises the actual dependencies:
/// the event store (a minimal listing) and the university source
/// (through the cache).
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "events",
            Box::pin(async {
                state
                    .event_service
                    .list_events(EventListQuery {
                        limit: 1,
                        ..Default::default()
                    })
                    .await
                    .map(|_| ())
                    .map_err(|e| format!("Event store probe failed: {}", e))
            }),
        ),
        (
            "universities",
            Box::pin(async {
                state
                    .university_cache
                    .get()
                    .await
                    .map(|_| ())
                    .map_err(|e| format!("University source probe failed: {}", e))
            }),
        ),
    ];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
