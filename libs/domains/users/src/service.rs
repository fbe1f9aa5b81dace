use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum_helpers::JwtAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{
    AuthResponse, LoginRequest, RegisterRequest, UpdateProfile, User, UserResponse,
};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    jwt: JwtAuth,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, jwt: JwtAuth) -> Self {
        Self {
            repository: Arc::new(repository),
            jwt,
        }
    }

    /// Register a new account and issue a session token
    pub async fn register(&self, input: RegisterRequest) -> UserResult<AuthResponse> {
        self.validate_password(&input.password)?;

        if self.repository.email_exists(&input.email).await? {
            return Err(UserError::DuplicateEmail(input.email));
        }

        let password_hash = self.hash_password(&input.password)?;

        let user = User::new(
            input.email,
            input.name,
            password_hash,
            input.account_type,
            input.university,
        );

        let created = self.repository.create(user).await?;
        let token = self.issue_token(&created)?;

        Ok(AuthResponse {
            user: created.into(),
            token,
        })
    }

    /// Verify credentials and issue a session token
    pub async fn login(&self, input: LoginRequest) -> UserResult<AuthResponse> {
        let user = self
            .repository
            .get_by_email(&input.email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !user.is_active {
            return Err(UserError::Validation("Account is inactive".to_string()));
        }

        if !self.verify_password(&input.password, &user.password_hash)? {
            return Err(UserError::InvalidCredentials);
        }

        let token = self.issue_token(&user)?;

        Ok(AuthResponse {
            user: user.into(),
            token,
        })
    }

    /// Get a user's profile by ID
    pub async fn get_profile(&self, id: Uuid) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        Ok(user.into())
    }

    /// Update a user's profile
    pub async fn update_profile(&self, id: Uuid, input: UpdateProfile) -> UserResult<UserResponse> {
        let mut user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        user.apply_update(input);

        let updated = self.repository.update(user).await?;
        Ok(updated.into())
    }

    // Token helpers

    fn issue_token(&self, user: &User) -> UserResult<String> {
        self.jwt
            .create_token(
                &user.id.to_string(),
                &user.email,
                &user.name,
                &[user.account_type.to_string()],
            )
            .map_err(|e| UserError::Token(e.to_string()))
    }

    // Password helpers

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    fn validate_password(&self, password: &str) -> UserResult<()> {
        if password.len() < 8 {
            return Err(UserError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        if password.len() > 128 {
            return Err(UserError::Validation(
                "Password cannot exceed 128 characters".to_string(),
            ));
        }

        if !password.chars().any(|c| c.is_uppercase()) {
            return Err(UserError::Validation(
                "Password must contain at least one uppercase letter".to_string(),
            ));
        }

        if !password.chars().any(|c| c.is_lowercase()) {
            return Err(UserError::Validation(
                "Password must contain at least one lowercase letter".to_string(),
            ));
        }

        if !password.chars().any(|c| c.is_numeric()) {
            return Err(UserError::Validation(
                "Password must contain at least one digit".to_string(),
            ));
        }

        Ok(())
    }
}
