use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Kind of account on the platform
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccountType {
    #[default]
    Student,
    Startup,
    Club,
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// User email (unique)
    pub email: String,
    /// Display name
    pub name: String,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Kind of account (student, startup, club)
    pub account_type: AccountType,
    /// University affiliation
    pub university: Option<String>,
    /// Field of study (students)
    pub major: Option<String>,
    /// Expected graduation year (students)
    pub graduation_year: Option<i32>,
    /// Short bio shown on the profile page
    pub bio: Option<String>,
    /// Skill tags
    pub skills: Vec<String>,
    /// Interest tags
    pub interests: Vec<String>,
    /// Personal or company website
    pub website: Option<String>,
    /// LinkedIn profile URL
    pub linkedin: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Account active status
    pub is_active: bool,
}

/// User response DTO (without password_hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub account_type: AccountType,
    pub university: Option<String>,
    pub major: Option<String>,
    pub graduation_year: Option<i32>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            account_type: user.account_type,
            university: user.university,
            major: user.major,
            graduation_year: user.graduation_year,
            bio: user.bio,
            skills: user.skills,
            interests: user.interests,
            website: user.website,
            linkedin: user.linkedin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for user registration
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub account_type: AccountType,
    pub university: Option<String>,
}

/// DTO for user login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
}

/// DTO for profile updates
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProfile {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
    #[validate(range(min = 1950, max = 2100))]
    pub graduation_year: Option<i32>,
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(url)]
    pub linkedin: Option<String>,
}

/// Response after successful login/register
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

impl User {
    /// Create a new user (password must already be hashed by the service layer)
    pub fn new(
        email: String,
        name: String,
        password_hash: String,
        account_type: AccountType,
        university: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            email,
            name,
            password_hash,
            account_type,
            university,
            major: None,
            graduation_year: None,
            bio: None,
            skills: Vec::new(),
            interests: Vec::new(),
            website: None,
            linkedin: None,
            created_at: now,
            updated_at: now,
            is_active: true,
        }
    }

    /// Apply profile updates
    pub fn apply_update(&mut self, update: UpdateProfile) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(university) = update.university {
            self.university = Some(university);
        }
        if let Some(major) = update.major {
            self.major = Some(major);
        }
        if let Some(year) = update.graduation_year {
            self.graduation_year = Some(year);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(skills) = update.skills {
            self.skills = skills;
        }
        if let Some(interests) = update.interests {
            self.interests = interests;
        }
        if let Some(website) = update.website {
            self.website = Some(website);
        }
        if let Some(linkedin) = update.linkedin {
            self.linkedin = Some(linkedin);
        }
        self.updated_at = Utc::now();
    }
}
