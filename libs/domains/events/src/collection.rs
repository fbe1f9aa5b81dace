use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventCategory, EventFilter, Registration};

/// A page provider over one category's backing collection.
///
/// `count` and `page` must apply the same filter predicate, with `page`
/// returning records sorted ascending by start date. The listing path
/// consults providers strictly in the declared category order and expects
/// each call to be independent (no cursor state between calls).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventCollection: Send + Sync {
    /// The category this collection backs
    fn category(&self) -> EventCategory;

    /// Number of documents matching the filter
    async fn count(&self, filter: &EventFilter) -> EventResult<usize>;

    /// Matching documents sorted ascending by start date, after `skip`,
    /// at most `limit`
    async fn page(&self, filter: &EventFilter, skip: usize, limit: usize)
        -> EventResult<Vec<Event>>;

    /// Insert a new event
    async fn insert(&self, event: Event) -> EventResult<Event>;

    /// Fetch one event by id
    async fn get(&self, id: Uuid) -> EventResult<Option<Event>>;

    /// Append a registration to an event's attendee list.
    ///
    /// Fails with `NotFound` if the event is not in this collection,
    /// `AlreadyRegistered` for a duplicate user, and `Full` when the
    /// attendance cap is reached.
    async fn add_registration(&self, id: Uuid, registration: Registration) -> EventResult<Event>;
}

/// In-memory implementation of one category collection
/// (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryEventCollection {
    category: EventCategory,
    events: Arc<RwLock<Vec<Event>>>,
}

impl InMemoryEventCollection {
    pub fn new(category: EventCategory) -> Self {
        Self {
            category,
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl EventCollection for InMemoryEventCollection {
    fn category(&self) -> EventCategory {
        self.category
    }

    async fn count(&self, filter: &EventFilter) -> EventResult<usize> {
        let events = self.events.read().await;
        Ok(events.iter().filter(|e| filter.matches(e)).count())
    }

    async fn page(
        &self,
        filter: &EventFilter,
        skip: usize,
        limit: usize,
    ) -> EventResult<Vec<Event>> {
        let events = self.events.read().await;

        let mut matching: Vec<Event> = events
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();

        // Stable sort keeps insertion order among equal start dates
        matching.sort_by(|a, b| a.start_date.cmp(&b.start_date));

        Ok(matching.into_iter().skip(skip).take(limit).collect())
    }

    async fn insert(&self, event: Event) -> EventResult<Event> {
        if event.category != self.category {
            return Err(EventError::Validation(format!(
                "Event of category '{}' does not belong in the '{}' collection",
                event.category, self.category
            )));
        }

        let mut events = self.events.write().await;
        events.push(event.clone());

        tracing::info!(event_id = %event.id, category = %event.category, "Created event");
        Ok(event)
    }

    async fn get(&self, id: Uuid) -> EventResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn add_registration(&self, id: Uuid, registration: Registration) -> EventResult<Event> {
        let mut events = self.events.write().await;

        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EventError::NotFound(id))?;

        if event
            .attendees
            .iter()
            .any(|r| r.user_id == registration.user_id)
        {
            return Err(EventError::AlreadyRegistered(id));
        }

        if !event.has_spots() {
            return Err(EventError::Full(id));
        }

        event.attendees.push(registration);
        event.updated_at = chrono::Utc::now();

        tracing::info!(event_id = %id, attendees = event.attendees.len(), "Registered attendee");
        Ok(event.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateEvent, EventDetails, EventMode, OrganizerType};
    use chrono::{TimeZone, Utc};

    fn workshop(title: &str, day: u32) -> Event {
        Event::new(CreateEvent {
            title: title.to_string(),
            description: "desc".to_string(),
            organizer: "Org".to_string(),
            organizer_type: OrganizerType::Club,
            organizer_id: None,
            mode: EventMode::InPerson,
            tags: vec![],
            start_date: Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap(),
            end_date: None,
            is_free: true,
            price: None,
            max_attendees: Some(1),
            details: EventDetails::Workshop {
                prerequisites: vec![],
                materials_provided: false,
                seats_per_session: None,
            },
        })
    }

    fn registration() -> Registration {
        Registration {
            user_id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            registered_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_rejects_wrong_category() {
        let collection = InMemoryEventCollection::new(EventCategory::Hackathon);

        let result = collection.insert(workshop("W", 1)).await;
        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_page_sorts_and_slices() {
        let collection = InMemoryEventCollection::new(EventCategory::Workshop);

        // Inserted out of date order
        collection.insert(workshop("third", 10)).await.unwrap();
        collection.insert(workshop("first", 1)).await.unwrap();
        collection.insert(workshop("second", 5)).await.unwrap();

        let filter = EventFilter::default();
        assert_eq!(collection.count(&filter).await.unwrap(), 3);

        let page = collection.page(&filter, 1, 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title, "second");
    }

    #[tokio::test]
    async fn test_register_duplicate_and_full() {
        let collection = InMemoryEventCollection::new(EventCategory::Workshop);
        let event = collection.insert(workshop("W", 1)).await.unwrap();

        let first = registration();
        collection
            .add_registration(event.id, first.clone())
            .await
            .unwrap();

        // Same user again
        let dup = collection.add_registration(event.id, first).await;
        assert!(matches!(dup, Err(EventError::AlreadyRegistered(_))));

        // Different user, but max_attendees = 1
        let full = collection.add_registration(event.id, registration()).await;
        assert!(matches!(full, Err(EventError::Full(_))));
    }

    #[tokio::test]
    async fn test_register_missing_event() {
        let collection = InMemoryEventCollection::new(EventCategory::Workshop);

        let result = collection
            .add_registration(Uuid::new_v4(), registration())
            .await;
        assert!(matches!(result, Err(EventError::NotFound(_))));
    }
}
