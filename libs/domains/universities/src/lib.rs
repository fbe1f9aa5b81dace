//! Universities Domain
//!
//! Read-only university reference data served through an explicit TTL
//! cache. The cache object is constructed once at startup with an
//! injected clock and shared by reference; the dataset itself comes from
//! a `UniversitySource` implementation.

pub mod cache;
pub mod error;
pub mod handlers;
pub mod models;
pub mod source;

pub use cache::{Clock, SystemClock, UniversityCache};
pub use error::{UniversityError, UniversityResult};
pub use models::University;
pub use source::{StaticUniversitySource, UniversitySource};
