use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    async fn create(&self, user: User) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by email (case-insensitive)
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Check whether an email is already registered
    async fn email_exists(&self, email: &str) -> UserResult<bool>;

    /// Replace an existing user record
    async fn update(&self, user: User) -> UserResult<User>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        let email_exists = users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email));

        if email_exists {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email.eq_ignore_ascii_case(email)))
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;

    fn sample_user(email: &str) -> User {
        User::new(
            email.to_string(),
            "Sample".to_string(),
            "hash".to_string(),
            AccountType::Student,
            None,
        )
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let repo = InMemoryUserRepository::new();

        let user = repo.create(sample_user("a@example.com")).await.unwrap();

        let fetched = repo.get_by_id(user.id).await.unwrap();
        assert_eq!(fetched.unwrap().email, "a@example.com");

        let by_email = repo.get_by_email("A@EXAMPLE.COM").await.unwrap();
        assert_eq!(by_email.unwrap().id, user.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_error() {
        let repo = InMemoryUserRepository::new();

        repo.create(sample_user("dup@example.com")).await.unwrap();
        let result = repo.create(sample_user("DUP@example.com")).await;

        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();

        let result = repo.update(sample_user("ghost@example.com")).await;
        assert!(matches!(result, Err(UserError::NotFound(_))));
    }
}
