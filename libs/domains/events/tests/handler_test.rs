//! Handler tests for the events domain
//!
//! These tests drive the events router over HTTP (via oneshot) against
//! an in-memory store, verifying the wire contract of the listing path:
//! the response envelope, the pagination metadata, the filter semantics,
//! and the auth requirements of the mutating routes.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{JwtAuth, JwtConfig};
use domain_events::{handlers, EventService, EventStore};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn jwt() -> JwtAuth {
    JwtAuth::new(&JwtConfig::new("handler-test-secret-that-is-32-chars!!"))
}

fn test_app() -> Router {
    let service = EventService::new(EventStore::in_memory());
    handlers::router(service, jwt())
}

fn bearer_token() -> String {
    jwt()
        .create_token(
            &uuid::Uuid::new_v4().to_string(),
            "organizer@example.com",
            "Organizer",
            &["club".to_string()],
        )
        .unwrap()
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn create_payload(title: &str, start_date: &str, category_details: Value) -> Value {
    json!({
        "title": title,
        "description": "An event",
        "organizer": "Builders Club",
        "organizer_type": "club",
        "mode": "in-person",
        "tags": ["tech"],
        "start_date": start_date,
        "is_free": true,
        "details": category_details
    })
}

fn hackathon_details() -> Value {
    json!({
        "category": "hackathon",
        "team_size_min": 1,
        "team_size_max": 4,
        "prize_pool": null
    })
}

fn workshop_details() -> Value {
    json!({
        "category": "workshop",
        "materials_provided": true,
        "seats_per_session": null
    })
}

async fn create_event(app: &Router, token: &str, payload: Value) -> Value {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

async fn list(app: &Router, query: &str) -> Value {
    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", query))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_list_empty_store_has_envelope() {
    let app = test_app();

    let body = list(&app, "").await;

    assert_eq!(body["events"], json!([]));
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["pagination"]["totalEvents"], 0);
    assert_eq!(body["pagination"]["totalPages"], 0);
    assert_eq!(body["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_create_requires_token() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&create_payload(
                "No Auth",
                "2024-05-01T09:00:00Z",
                hackathon_details(),
            ))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_then_list_round_trip() {
    let app = test_app();
    let token = bearer_token();

    let created = create_event(
        &app,
        &token,
        create_payload("Spring Hackathon", "2024-04-12T09:00:00Z", hackathon_details()),
    )
    .await;

    assert_eq!(created["status"], "active");
    assert_eq!(created["category"], "hackathon");

    let body = list(&app, "").await;
    assert_eq!(body["pagination"]["totalEvents"], 1);
    assert_eq!(body["events"][0]["title"], "Spring Hackathon");
    assert_eq!(body["events"][0]["type"], "hackathon");
    assert_eq!(body["events"][0]["hasSpots"], true);
    // The attendee list never leaves the server
    assert!(body["events"][0].get("attendees").is_none());
    // Identity is serialized as a plain string
    assert!(body["events"][0]["id"].is_string());
}

#[tokio::test]
async fn test_list_type_filter_restricts_collection() {
    let app = test_app();
    let token = bearer_token();

    create_event(
        &app,
        &token,
        create_payload("Hack Night", "2024-04-01T09:00:00Z", hackathon_details()),
    )
    .await;
    create_event(
        &app,
        &token,
        create_payload("Rust Workshop", "2024-04-02T09:00:00Z", workshop_details()),
    )
    .await;

    let body = list(&app, "?type=workshop").await;

    assert_eq!(body["pagination"]["totalEvents"], 1);
    assert_eq!(body["events"][0]["type"], "workshop");
}

#[tokio::test]
async fn test_list_pagination_walk_order() {
    let app = test_app();
    let token = bearer_token();

    // Three hackathons and two workshops; dates interleave across the
    // collections.
    for (title, date) in [
        ("h1", "2024-01-01T09:00:00Z"),
        ("h2", "2024-01-05T09:00:00Z"),
        ("h3", "2024-01-10T09:00:00Z"),
    ] {
        create_event(&app, &token, create_payload(title, date, hackathon_details())).await;
    }
    for (title, date) in [
        ("w1", "2024-01-03T09:00:00Z"),
        ("w2", "2024-01-08T09:00:00Z"),
    ] {
        create_event(&app, &token, create_payload(title, date, workshop_details())).await;
    }

    // Page 1 is filled from the hackathon collection alone, even though
    // w1 predates h2.
    let body = list(&app, "?limit=2&page=1").await;
    let titles: Vec<&str> = body["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["h1", "h2"]);

    assert_eq!(body["pagination"]["totalEvents"], 5);
    assert_eq!(body["pagination"]["totalPages"], 3);
    assert_eq!(body["pagination"]["hasMore"], true);

    // The final page
    let body = list(&app, "?limit=2&page=3").await;
    let titles: Vec<&str> = body["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["w2"]);
    assert_eq!(body["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_list_unrecognized_is_free_value_is_ignored() {
    let app = test_app();
    let token = bearer_token();

    create_event(
        &app,
        &token,
        create_payload("Free Event", "2024-04-01T09:00:00Z", hackathon_details()),
    )
    .await;

    // "maybe" is neither "true" nor "false": the filter is simply absent
    let body = list(&app, "?isFree=maybe").await;
    assert_eq!(body["pagination"]["totalEvents"], 1);
}

#[tokio::test]
async fn test_search_combines_with_other_filters() {
    let app = test_app();
    let token = bearer_token();

    let mut paid = create_payload("Spring Hackathon", "2024-04-01T09:00:00Z", hackathon_details());
    paid["is_free"] = json!(false);
    paid["price"] = json!(10.0);
    create_event(&app, &token, paid).await;

    create_event(
        &app,
        &token,
        create_payload("Hackathon Meetup", "2024-04-02T09:00:00Z", hackathon_details()),
    )
    .await;

    let body = list(&app, "?isFree=false&search=hackathon").await;

    assert_eq!(body["pagination"]["totalEvents"], 1);
    assert_eq!(body["events"][0]["title"], "Spring Hackathon");
}

#[tokio::test]
async fn test_get_event_by_id() {
    let app = test_app();
    let token = bearer_token();

    let created = create_event(
        &app,
        &token,
        create_payload("Lookup Me", "2024-04-01T09:00:00Z", workshop_details()),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Unknown id
    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", uuid::Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Malformed id
    let request = Request::builder()
        .method("GET")
        .uri("/not-a-uuid")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_flow() {
    let app = test_app();
    let token = bearer_token();

    let mut payload = create_payload("Tiny Workshop", "2024-04-01T09:00:00Z", workshop_details());
    payload["max_attendees"] = json!(1);
    let created = create_event(&app, &token, payload).await;
    let id = created["id"].as_str().unwrap().to_string();

    let register = |token: String| {
        let app = app.clone();
        let id = id.clone();
        async move {
            let request = Request::builder()
                .method("POST")
                .uri(format!("/{}/register", id))
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap();
            app.oneshot(request).await.unwrap()
        }
    };

    // Unauthenticated registration is refused
    let request = Request::builder()
        .method("POST")
        .uri(format!("/{}/register", id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // First registration succeeds and fills the event
    let response = register(token.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["attendees"].as_array().unwrap().len(), 1);

    // Same user again
    let response = register(token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Different user, event is full
    let response = register(bearer_token()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The listing now reports no spots
    let body = list(&app, "?type=workshop").await;
    assert_eq!(body["events"][0]["hasSpots"], false);
    assert_eq!(body["events"][0]["currentAttendees"], 1);
}
