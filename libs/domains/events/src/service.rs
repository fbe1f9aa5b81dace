use uuid::Uuid;
use validator::Validate;

use crate::error::{EventError, EventResult};
use crate::models::{CreateEvent, Event, EventListQuery, EventPage, Registration};
use crate::pager;
use crate::store::EventStore;

/// Service layer for events business logic
#[derive(Clone)]
pub struct EventService {
    store: EventStore,
}

impl EventService {
    pub fn new(store: EventStore) -> Self {
        Self { store }
    }

    /// Create a new event in its category's collection.
    ///
    /// The category comes from the tagged details payload; status is
    /// always set to active.
    pub async fn create_event(&self, input: CreateEvent) -> EventResult<Event> {
        input
            .validate()
            .map_err(|e| EventError::Validation(e.to_string()))?;

        input.details.validate().map_err(EventError::Validation)?;

        if let Some(end_date) = input.end_date {
            if end_date < input.start_date {
                return Err(EventError::Validation(
                    "End date cannot be before the start date".to_string(),
                ));
            }
        }

        if !input.is_free && input.price.is_none() {
            return Err(EventError::Validation(
                "A paid event needs a price".to_string(),
            ));
        }

        let event = Event::new(input);

        let collection = self
            .store
            .collection(event.category)
            .ok_or_else(|| EventError::Persist(format!("no collection for {}", event.category)))?;

        collection.insert(event).await
    }

    /// List events across the candidate collections.
    pub async fn list_events(&self, query: EventListQuery) -> EventResult<EventPage> {
        let filter = query.filter();
        pager::paginate(&self.store, query.category, &filter, query.page, query.limit).await
    }

    /// Find one event by id, walking the collections in order.
    pub async fn get_event(&self, id: Uuid) -> EventResult<Event> {
        for collection in self.store.collections() {
            if let Some(event) = collection.get(id).await? {
                return Ok(event);
            }
        }
        Err(EventError::NotFound(id))
    }

    /// Register an attendee for an event.
    ///
    /// Walks the collections in order; the owning collection enforces
    /// duplicate and capacity rules under its own lock.
    pub async fn register(&self, event_id: Uuid, registration: Registration) -> EventResult<Event> {
        for collection in self.store.collections() {
            match collection.add_registration(event_id, registration.clone()).await {
                Err(EventError::NotFound(_)) => continue,
                other => return other,
            }
        }
        Err(EventError::NotFound(event_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventDetails, EventMode, EventStatus, OrganizerType};
    use chrono::{TimeZone, Utc};

    fn create_input() -> CreateEvent {
        CreateEvent {
            title: "Spring Hackathon".to_string(),
            description: "48 hours of building".to_string(),
            organizer: "Builders Club".to_string(),
            organizer_type: OrganizerType::Club,
            organizer_id: None,
            mode: EventMode::InPerson,
            tags: vec!["coding".to_string()],
            start_date: Utc.with_ymd_and_hms(2024, 4, 12, 9, 0, 0).unwrap(),
            end_date: Some(Utc.with_ymd_and_hms(2024, 4, 14, 18, 0, 0).unwrap()),
            is_free: true,
            price: None,
            max_attendees: Some(100),
            details: EventDetails::Hackathon {
                team_size_min: 2,
                team_size_max: 5,
                prize_pool: Some("$5000".to_string()),
                judging_criteria: vec!["novelty".to_string()],
            },
        }
    }

    fn registration(name: &str) -> Registration {
        Registration {
            user_id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name),
            registered_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_lands_in_category_collection() {
        let service = EventService::new(EventStore::in_memory());

        let event = service.create_event(create_input()).await.unwrap();

        assert_eq!(event.category.to_string(), "hackathon");
        assert_eq!(event.status, EventStatus::Active);
        assert!(event.attendees.is_empty());

        // Listed under the category restriction
        let page = service
            .list_events(EventListQuery {
                category: Some(event.category),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.events.len(), 1);
        assert_eq!(page.events[0].id, event.id.to_string());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_details() {
        let service = EventService::new(EventStore::in_memory());

        let mut input = create_input();
        input.details = EventDetails::Hackathon {
            team_size_min: 0,
            team_size_max: 5,
            prize_pool: None,
            judging_criteria: vec![],
        };

        let result = service.create_event(input).await;
        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_backwards_dates() {
        let service = EventService::new(EventStore::in_memory());

        let mut input = create_input();
        input.end_date = Some(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());

        let result = service.create_event(input).await;
        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_paid_event_requires_price() {
        let service = EventService::new(EventStore::in_memory());

        let mut input = create_input();
        input.is_free = false;
        input.price = None;

        let result = service.create_event(input).await;
        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_event_searches_all_collections() {
        let service = EventService::new(EventStore::in_memory());

        let mut input = create_input();
        input.details = EventDetails::Conference {
            tracks: vec!["systems".to_string()],
            speakers: vec![],
        };
        let created = service.create_event(input).await.unwrap();

        let fetched = service.get_event(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);

        let missing = service.get_event(Uuid::new_v4()).await;
        assert!(matches!(missing, Err(EventError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_register_and_duplicate() {
        let service = EventService::new(EventStore::in_memory());
        let created = service.create_event(create_input()).await.unwrap();

        let attendee = registration("ada");
        let updated = service
            .register(created.id, attendee.clone())
            .await
            .unwrap();
        assert_eq!(updated.attendees.len(), 1);

        let dup = service.register(created.id, attendee).await;
        assert!(matches!(dup, Err(EventError::AlreadyRegistered(_))));
    }

    #[tokio::test]
    async fn test_register_full_event() {
        let service = EventService::new(EventStore::in_memory());

        let mut input = create_input();
        input.max_attendees = Some(1);
        let created = service.create_event(input).await.unwrap();

        service
            .register(created.id, registration("ada"))
            .await
            .unwrap();

        let result = service.register(created.id, registration("grace")).await;
        assert!(matches!(result, Err(EventError::Full(_))));
    }
}
