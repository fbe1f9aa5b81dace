//! Users Domain
//!
//! Registration, login, and profile management for the three kinds of
//! platform accounts: students, startups, and clubs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/register, /login, /me)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Password hashing, credential checks, JWT issuance
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{
    AccountType, AuthResponse, LoginRequest, RegisterRequest, UpdateProfile, User, UserResponse,
};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
