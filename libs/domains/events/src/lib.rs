//! Events Domain
//!
//! Campus events live in five independent per-category collections
//! (hackathon, culturals, expert-lecture, workshop, conference). A single
//! listing endpoint serves all of them through a cross-collection pager
//! that apportions one page's quota across the collections in a fixed
//! walk order.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (list, create, get, register)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, category dispatch
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │    Pager    │  ← Cross-collection skip/limit walk
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Collections │  ← Page providers (trait + in-memory impl), one per category
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, per-category detail variants
//! └─────────────┘
//! ```

pub mod collection;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pager;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use collection::{EventCollection, InMemoryEventCollection};
pub use error::{EventError, EventResult};
pub use models::{
    CreateEvent, Event, EventCategory, EventDetails, EventFilter, EventListQuery, EventMode,
    EventPage, EventStatus, EventSummary, OrganizerType, Pagination, Registration,
    CATEGORY_WALK_ORDER,
};
pub use service::EventService;
pub use store::EventStore;
