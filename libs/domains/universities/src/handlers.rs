use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::cache::UniversityCache;
use crate::error::UniversityResult;
use crate::models::University;

/// Query parameters for the universities endpoint
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct UniversityQuery {
    /// Case-insensitive substring match on the university name
    pub search: Option<String>,
    /// Exact country match (case-insensitive)
    pub country: Option<String>,
}

/// Create the universities router
pub fn router(cache: Arc<UniversityCache>) -> Router {
    Router::new().route("/", get(list_universities)).with_state(cache)
}

/// List universities from the cached dataset
///
/// GET /universities?search=&country=
async fn list_universities(
    State(cache): State<Arc<UniversityCache>>,
    Query(query): Query<UniversityQuery>,
) -> UniversityResult<Json<Vec<University>>> {
    let universities = cache.get().await?;

    let filtered: Vec<University> = universities
        .iter()
        .filter(|u| {
            if let Some(ref search) = query.search {
                if !u.name.to_lowercase().contains(&search.to_lowercase()) {
                    return false;
                }
            }
            if let Some(ref country) = query.country {
                if !u.country.eq_ignore_ascii_case(country) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect();

    Ok(Json(filtered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SystemClock;
    use crate::source::StaticUniversitySource;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let cache = Arc::new(UniversityCache::new(
            Arc::new(StaticUniversitySource::builtin()),
            Arc::new(SystemClock),
            Duration::from_secs(60),
        ));
        router(cache)
    }

    async fn get_universities(app: Router, query: &str) -> Vec<University> {
        let request = Request::builder()
            .method("GET")
            .uri(format!("/{}", query))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_all() {
        let universities = get_universities(test_app(), "").await;
        assert!(universities.len() >= 5);
    }

    #[tokio::test]
    async fn test_search_filter() {
        let universities = get_universities(test_app(), "?search=technology").await;
        assert!(!universities.is_empty());
        assert!(universities
            .iter()
            .all(|u| u.name.to_lowercase().contains("technology")));
    }

    #[tokio::test]
    async fn test_country_filter() {
        let universities = get_universities(test_app(), "?country=india").await;
        assert_eq!(universities.len(), 1);
        assert_eq!(universities[0].country, "India");
    }

    #[tokio::test]
    async fn test_combined_filters_can_exclude_everything() {
        let universities =
            get_universities(test_app(), "?search=cambridge&country=Switzerland").await;
        assert!(universities.is_empty());
    }
}
