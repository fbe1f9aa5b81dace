use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Event categories, one backing collection each.
///
/// The array order below is the walk order of the listing path. When a
/// page boundary falls mid-collection, this order decides which
/// collection's records fill the page first, so it is part of the
/// observable pagination contract and must not be reordered.
pub const CATEGORY_WALK_ORDER: [EventCategory; 5] = [
    EventCategory::Hackathon,
    EventCategory::Culturals,
    EventCategory::ExpertLecture,
    EventCategory::Workshop,
    EventCategory::Conference,
];

/// Event category (identifies the backing collection)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EventCategory {
    Hackathon,
    Culturals,
    ExpertLecture,
    Workshop,
    Conference,
}

/// How the event is held
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EventMode {
    InPerson,
    Virtual,
    Hybrid,
}

/// Who is organizing the event
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrganizerType {
    Startup,
    Club,
    University,
}

/// Event lifecycle status.
///
/// Creation always produces `Active`; the listing path only ever returns
/// active events.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Active,
    Draft,
    Cancelled,
    Completed,
}

/// A single attendee registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Registration {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

/// Category-specific event fields.
///
/// The serde tag doubles as the collection name, so a create payload's
/// details decide which collection the record lands in.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum EventDetails {
    Hackathon {
        team_size_min: u32,
        team_size_max: u32,
        prize_pool: Option<String>,
        #[serde(default)]
        judging_criteria: Vec<String>,
    },
    Culturals {
        performance_type: String,
        #[serde(default)]
        stage_required: bool,
    },
    ExpertLecture {
        speaker: String,
        affiliation: Option<String>,
        topic: String,
    },
    Workshop {
        #[serde(default)]
        prerequisites: Vec<String>,
        #[serde(default)]
        materials_provided: bool,
        seats_per_session: Option<u32>,
    },
    Conference {
        tracks: Vec<String>,
        #[serde(default)]
        speakers: Vec<String>,
    },
}

/// Validation function for one detail variant
type DetailValidator = fn(&EventDetails) -> Result<(), String>;

fn validate_hackathon(details: &EventDetails) -> Result<(), String> {
    let EventDetails::Hackathon {
        team_size_min,
        team_size_max,
        ..
    } = details
    else {
        return Err("expected hackathon details".to_string());
    };

    if *team_size_min < 1 {
        return Err("Minimum team size must be at least 1".to_string());
    }
    if team_size_max < team_size_min {
        return Err("Maximum team size cannot be below the minimum".to_string());
    }
    Ok(())
}

fn validate_culturals(details: &EventDetails) -> Result<(), String> {
    let EventDetails::Culturals {
        performance_type, ..
    } = details
    else {
        return Err("expected culturals details".to_string());
    };

    if performance_type.trim().is_empty() {
        return Err("Performance type is required".to_string());
    }
    Ok(())
}

fn validate_expert_lecture(details: &EventDetails) -> Result<(), String> {
    let EventDetails::ExpertLecture { speaker, topic, .. } = details else {
        return Err("expected expert-lecture details".to_string());
    };

    if speaker.trim().is_empty() {
        return Err("Speaker name is required".to_string());
    }
    if topic.trim().is_empty() {
        return Err("Lecture topic is required".to_string());
    }
    Ok(())
}

fn validate_workshop(details: &EventDetails) -> Result<(), String> {
    let EventDetails::Workshop {
        seats_per_session, ..
    } = details
    else {
        return Err("expected workshop details".to_string());
    };

    if let Some(seats) = seats_per_session {
        if *seats < 1 {
            return Err("Seats per session must be at least 1".to_string());
        }
    }
    Ok(())
}

fn validate_conference(details: &EventDetails) -> Result<(), String> {
    let EventDetails::Conference { tracks, .. } = details else {
        return Err("expected conference details".to_string());
    };

    if tracks.is_empty() {
        return Err("A conference needs at least one track".to_string());
    }
    Ok(())
}

/// Per-variant validators, keyed by category
fn validator_for(category: EventCategory) -> DetailValidator {
    match category {
        EventCategory::Hackathon => validate_hackathon,
        EventCategory::Culturals => validate_culturals,
        EventCategory::ExpertLecture => validate_expert_lecture,
        EventCategory::Workshop => validate_workshop,
        EventCategory::Conference => validate_conference,
    }
}

impl EventDetails {
    /// The category (and therefore the backing collection) of this variant
    pub fn category(&self) -> EventCategory {
        match self {
            EventDetails::Hackathon { .. } => EventCategory::Hackathon,
            EventDetails::Culturals { .. } => EventCategory::Culturals,
            EventDetails::ExpertLecture { .. } => EventCategory::ExpertLecture,
            EventDetails::Workshop { .. } => EventCategory::Workshop,
            EventDetails::Conference { .. } => EventCategory::Conference,
        }
    }

    /// Validate the variant through its category's validator
    pub fn validate(&self) -> Result<(), String> {
        validator_for(self.category())(self)
    }
}

/// Event entity, stored in the collection matching its category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Unique identifier (assigned at insertion, immutable)
    pub id: Uuid,
    /// Category, implied by the backing collection
    pub category: EventCategory,
    pub title: String,
    pub description: String,
    /// Display name of the organizer
    pub organizer: String,
    pub organizer_type: OrganizerType,
    /// Account that created the event
    pub organizer_id: Option<Uuid>,
    pub mode: EventMode,
    pub tags: Vec<String>,
    /// Global sort key of the listing path
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_free: bool,
    /// Ticket price, present for paid events
    pub price: Option<f64>,
    /// Attendance cap; None means unlimited
    pub max_attendees: Option<u32>,
    pub status: EventStatus,
    /// Ordered registration records, mutated only by the register operation
    pub attendees: Vec<Registration>,
    pub details: EventDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a new event from a create request. Status is always Active.
    pub fn new(input: CreateEvent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            category: input.details.category(),
            title: input.title,
            description: input.description,
            organizer: input.organizer,
            organizer_type: input.organizer_type,
            organizer_id: input.organizer_id,
            mode: input.mode,
            tags: input.tags,
            start_date: input.start_date,
            end_date: input.end_date,
            is_free: input.is_free,
            price: input.price,
            max_attendees: input.max_attendees,
            status: EventStatus::Active,
            attendees: Vec::new(),
            details: input.details,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the event still has capacity for another registration
    pub fn has_spots(&self) -> bool {
        match self.max_attendees {
            Some(max) => (self.attendees.len() as u32) < max,
            None => true,
        }
    }
}

/// DTO for creating a new event
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEvent {
    #[validate(length(min = 3, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    #[validate(length(min = 1, max = 200))]
    pub organizer: String,
    pub organizer_type: OrganizerType,
    pub organizer_id: Option<Uuid>,
    pub mode: EventMode,
    #[serde(default)]
    pub tags: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default = "default_is_free")]
    pub is_free: bool,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub max_attendees: Option<u32>,
    /// Tagged by category; decides the backing collection
    pub details: EventDetails,
}

fn default_is_free() -> bool {
    true
}

/// Filter predicate shared by every candidate collection in one query.
///
/// All fields combine with AND; `search` is an OR over title,
/// description, and organizer. Active status is enforced by the
/// collections themselves, on top of this predicate.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub mode: Option<EventMode>,
    pub organizer_type: Option<OrganizerType>,
    pub is_free: Option<bool>,
    pub organizer_id: Option<Uuid>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl EventFilter {
    /// Evaluate the predicate against one event.
    ///
    /// Inactive events never match, regardless of the other fields.
    pub fn matches(&self, event: &Event) -> bool {
        if event.status != EventStatus::Active {
            return false;
        }
        if let Some(mode) = self.mode {
            if event.mode != mode {
                return false;
            }
        }
        if let Some(organizer_type) = self.organizer_type {
            if event.organizer_type != organizer_type {
                return false;
            }
        }
        if let Some(is_free) = self.is_free {
            if event.is_free != is_free {
                return false;
            }
        }
        if let Some(organizer_id) = self.organizer_id {
            if event.organizer_id != Some(organizer_id) {
                return false;
            }
        }
        if let Some(ref tag) = self.tag {
            let needle = tag.to_lowercase();
            if !event
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        if let Some(ref search) = self.search {
            let needle = search.to_lowercase();
            let hit = event.title.to_lowercase().contains(&needle)
                || event.description.to_lowercase().contains(&needle)
                || event.organizer.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Query parameters of the listing endpoint.
///
/// `is_free` is deliberately a raw string: only the literals "true" and
/// "false" activate the filter, anything else means "no filter", so a
/// stray value must not fail deserialization.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct EventListQuery {
    /// Restrict to one category's collection instead of walking all five
    #[serde(rename = "type")]
    pub category: Option<EventCategory>,
    pub mode: Option<EventMode>,
    pub organizer_type: Option<OrganizerType>,
    pub is_free: Option<String>,
    pub organizer_id: Option<Uuid>,
    /// Case-insensitive substring match against any tag
    pub tag: Option<String>,
    /// Case-insensitive substring match on title, description, or organizer
    pub search: Option<String>,
    /// 1-indexed page, not validated against an upper bound
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

impl Default for EventListQuery {
    fn default() -> Self {
        Self {
            category: None,
            mode: None,
            organizer_type: None,
            is_free: None,
            organizer_id: None,
            tag: None,
            search: None,
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl EventListQuery {
    /// Tri-state free filter: only the literal strings "true"/"false" count
    pub fn is_free_filter(&self) -> Option<bool> {
        match self.is_free.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }

    /// The per-collection predicate part of this query
    pub fn filter(&self) -> EventFilter {
        EventFilter {
            mode: self.mode,
            organizer_type: self.organizer_type,
            is_free: self.is_free_filter(),
            organizer_id: self.organizer_id,
            tag: self.tag.clone(),
            search: self.search.clone(),
        }
    }
}

/// Public projection of an event for listing responses.
///
/// The attendee list is internal; clients get the count and a
/// `hasSpots` flag instead.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    /// Identity as a plain string
    pub id: String,
    /// Source collection of this record
    #[serde(rename = "type")]
    pub category: EventCategory,
    pub title: String,
    pub description: String,
    pub organizer: String,
    pub organizer_type: OrganizerType,
    pub mode: EventMode,
    pub tags: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_free: bool,
    pub price: Option<f64>,
    pub max_attendees: Option<u32>,
    pub current_attendees: usize,
    pub has_spots: bool,
    pub status: EventStatus,
    pub details: EventDetails,
}

impl From<Event> for EventSummary {
    fn from(event: Event) -> Self {
        let has_spots = event.has_spots();
        Self {
            id: event.id.to_string(),
            category: event.category,
            title: event.title,
            description: event.description,
            organizer: event.organizer,
            organizer_type: event.organizer_type,
            mode: event.mode,
            tags: event.tags,
            start_date: event.start_date,
            end_date: event.end_date,
            is_free: event.is_free,
            price: event.price,
            max_attendees: event.max_attendees,
            current_attendees: event.attendees.len(),
            has_spots,
            status: event.status,
            details: event.details,
        }
    }
}

/// Pagination metadata of a listing response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total_events: i64,
    pub total_pages: i64,
    pub has_more: bool,
}

/// One page of events plus pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventPage {
    pub events: Vec<EventSummary>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_event(title: &str, mode: EventMode, is_free: bool) -> Event {
        Event::new(CreateEvent {
            title: title.to_string(),
            description: "A sample event".to_string(),
            organizer: "Robotics Club".to_string(),
            organizer_type: OrganizerType::Club,
            organizer_id: None,
            mode,
            tags: vec!["AI".to_string(), "Robotics".to_string()],
            start_date: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            end_date: None,
            is_free,
            price: if is_free { None } else { Some(10.0) },
            max_attendees: Some(2),
            details: EventDetails::Workshop {
                prerequisites: vec![],
                materials_provided: true,
                seats_per_session: None,
            },
        })
    }

    #[test]
    fn test_category_names_match_collection_names() {
        assert_eq!(EventCategory::Hackathon.to_string(), "hackathon");
        assert_eq!(EventCategory::ExpertLecture.to_string(), "expert-lecture");
        assert_eq!(
            "culturals".parse::<EventCategory>().unwrap(),
            EventCategory::Culturals
        );
    }

    #[test]
    fn test_details_tag_decides_category() {
        let details: EventDetails = serde_json::from_value(serde_json::json!({
            "category": "expert-lecture",
            "speaker": "Dr. Liskov",
            "affiliation": null,
            "topic": "Substitution"
        }))
        .unwrap();

        assert_eq!(details.category(), EventCategory::ExpertLecture);
        assert!(details.validate().is_ok());
    }

    #[test]
    fn test_detail_validation_dispatch() {
        let bad_hackathon = EventDetails::Hackathon {
            team_size_min: 4,
            team_size_max: 2,
            prize_pool: None,
            judging_criteria: vec![],
        };
        assert!(bad_hackathon.validate().is_err());

        let bad_conference = EventDetails::Conference {
            tracks: vec![],
            speakers: vec![],
        };
        assert!(bad_conference.validate().is_err());

        let ok_culturals = EventDetails::Culturals {
            performance_type: "dance".to_string(),
            stage_required: true,
        };
        assert!(ok_culturals.validate().is_ok());
    }

    #[test]
    fn test_filter_conjunction() {
        let event = sample_event("AI Workshop", EventMode::Virtual, true);

        let matching = EventFilter {
            mode: Some(EventMode::Virtual),
            is_free: Some(true),
            ..Default::default()
        };
        assert!(matching.matches(&event));

        let wrong_mode = EventFilter {
            mode: Some(EventMode::InPerson),
            is_free: Some(true),
            ..Default::default()
        };
        assert!(!wrong_mode.matches(&event));
    }

    #[test]
    fn test_filter_search_is_an_or_across_fields() {
        let event = sample_event("Spring Gala", EventMode::InPerson, true);

        // Matches via organizer, not title
        let by_organizer = EventFilter {
            search: Some("robotics".to_string()),
            ..Default::default()
        };
        assert!(by_organizer.matches(&event));

        let no_hit = EventFilter {
            search: Some("chess".to_string()),
            ..Default::default()
        };
        assert!(!no_hit.matches(&event));
    }

    #[test]
    fn test_filter_tag_substring_case_insensitive() {
        let event = sample_event("AI Workshop", EventMode::Virtual, true);

        let filter = EventFilter {
            tag: Some("robot".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&event));
    }

    #[test]
    fn test_filter_never_matches_inactive() {
        let mut event = sample_event("AI Workshop", EventMode::Virtual, true);
        event.status = EventStatus::Cancelled;

        assert!(!EventFilter::default().matches(&event));
    }

    #[test]
    fn test_is_free_tri_state() {
        let mut query = EventListQuery {
            is_free: Some("true".to_string()),
            ..Default::default()
        };
        assert_eq!(query.is_free_filter(), Some(true));

        query.is_free = Some("false".to_string());
        assert_eq!(query.is_free_filter(), Some(false));

        // Anything else means "no filter"
        query.is_free = Some("yes".to_string());
        assert_eq!(query.is_free_filter(), None);

        query.is_free = None;
        assert_eq!(query.is_free_filter(), None);
    }

    #[test]
    fn test_summary_strips_attendees_and_computes_spots() {
        let mut event = sample_event("AI Workshop", EventMode::Virtual, true);
        event.attendees.push(Registration {
            user_id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            registered_at: Utc::now(),
        });
        event.attendees.push(Registration {
            user_id: Uuid::new_v4(),
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            registered_at: Utc::now(),
        });

        let summary = EventSummary::from(event.clone());
        assert_eq!(summary.id, event.id.to_string());
        assert_eq!(summary.current_attendees, 2);
        // max_attendees = 2, so the event is full
        assert!(!summary.has_spots);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("attendees").is_none());
        assert_eq!(json["type"], "workshop");
        assert_eq!(json["hasSpots"], false);
    }

    #[test]
    fn test_no_cap_means_spots_available() {
        let mut event = sample_event("AI Workshop", EventMode::Virtual, true);
        event.max_attendees = None;

        assert!(event.has_spots());
    }
}
