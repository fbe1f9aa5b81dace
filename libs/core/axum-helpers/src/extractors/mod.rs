pub mod auth_claims;
pub mod uuid_path;
pub mod validated_json;

pub use auth_claims::AuthClaims;
pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
