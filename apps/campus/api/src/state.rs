use std::sync::Arc;

use axum_helpers::JwtAuth;
use domain_events::EventService;
use domain_universities::UniversityCache;
use domain_users::{InMemoryUserRepository, UserService};

use crate::config::Config;

/// Shared application state.
///
/// Everything here is cheap to clone: services hold `Arc`s internally.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub jwt_auth: JwtAuth,
    pub user_service: UserService<InMemoryUserRepository>,
    pub event_service: EventService,
    pub university_cache: Arc<UniversityCache>,
}
