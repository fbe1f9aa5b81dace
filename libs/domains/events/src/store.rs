use std::sync::Arc;

use crate::collection::{EventCollection, InMemoryEventCollection};
use crate::models::{EventCategory, CATEGORY_WALK_ORDER};

/// The ordered set of per-category collections behind the events API.
///
/// Collections are held in the declared walk order; every query walks
/// them in that same order, which is part of the pagination contract.
#[derive(Clone)]
pub struct EventStore {
    collections: Vec<Arc<dyn EventCollection>>,
}

impl EventStore {
    /// Build a store from explicit collections, keeping their order.
    pub fn new(collections: Vec<Arc<dyn EventCollection>>) -> Self {
        Self { collections }
    }

    /// Build a store with one in-memory collection per category,
    /// in the declared walk order.
    pub fn in_memory() -> Self {
        Self {
            collections: CATEGORY_WALK_ORDER
                .iter()
                .map(|&category| {
                    Arc::new(InMemoryEventCollection::new(category)) as Arc<dyn EventCollection>
                })
                .collect(),
        }
    }

    /// All collections in walk order.
    pub fn collections(&self) -> &[Arc<dyn EventCollection>] {
        &self.collections
    }

    /// The collection backing one category, if registered.
    pub fn collection(&self, category: EventCategory) -> Option<&Arc<dyn EventCollection>> {
        self.collections.iter().find(|c| c.category() == category)
    }

    /// The candidate collections of one query: a single collection when a
    /// category restriction is given, otherwise all of them in walk order.
    pub fn candidates(&self, category: Option<EventCategory>) -> Vec<Arc<dyn EventCollection>> {
        match category {
            Some(category) => self
                .collection(category)
                .map(|c| vec![c.clone()])
                .unwrap_or_default(),
            None => self.collections.clone(),
        }
    }
}
