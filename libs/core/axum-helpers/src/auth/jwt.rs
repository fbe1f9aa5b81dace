use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token time-to-live (7 days)
pub const TOKEN_TTL: i64 = 604800;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,        // Subject (user ID)
    pub email: String,      // User email
    pub name: String,       // User name
    pub roles: Vec<String>, // User roles
    pub exp: i64,           // Expiration time
    pub iat: i64,           // Issued at
    pub jti: String,        // JWT ID
}

/// Stateless JWT authentication.
///
/// Tokens are signed with HS256 and validated by signature and expiry
/// only; there is no server-side session store, so a token stays valid
/// until it expires.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
}

impl JwtAuth {
    /// Create a new JWT auth instance from configuration.
    ///
    /// # Example
    /// ```ignore
    /// use axum_helpers::{JwtAuth, JwtConfig};
    /// use core_config::FromEnv;
    ///
    /// let config = JwtConfig::from_env()?;
    /// let jwt_auth = JwtAuth::new(&config);
    /// ```
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
        }
    }

    /// Create a session token (7 days)
    pub fn create_token(
        &self,
        user_id: &str,
        email: &str,
        name: &str,
        roles: &[String],
    ) -> eyre::Result<String> {
        self.create_token_with_ttl(user_id, email, name, roles, TOKEN_TTL)
    }

    /// Create a JWT token with the specified TTL
    pub fn create_token_with_ttl(
        &self,
        user_id: &str,
        email: &str,
        name: &str,
        roles: &[String],
        ttl_seconds: i64,
    ) -> eyre::Result<String> {
        let now = Utc::now();
        let exp = (now + Duration::seconds(ttl_seconds)).timestamp();
        let iat = now.timestamp();
        let jti = Uuid::new_v4().to_string();

        let claims = JwtClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            roles: roles.to_vec(),
            exp,
            iat,
            jti,
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify JWT token signature and decode claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("unit-test-secret-that-is-32-chars-long!"))
    }

    #[test]
    fn test_token_round_trip() {
        let auth = test_auth();
        let user_id = Uuid::new_v4().to_string();

        let token = auth
            .create_token(&user_id, "ada@example.com", "Ada", &["student".to_string()])
            .unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.roles, vec!["student".to_string()]);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let auth = test_auth();

        // Well past the default validation leeway
        let token = auth
            .create_token_with_ttl("user", "a@b.c", "A", &[], -300)
            .unwrap();

        assert!(auth.verify_token(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let auth = test_auth();
        let other = JwtAuth::new(&JwtConfig::new("a-different-secret-also-32-chars-long!"));

        let token = auth.create_token("user", "a@b.c", "A", &[]).unwrap();

        assert!(other.verify_token(&token).is_err());
        assert!(auth.verify_token(&token).is_ok());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let auth = test_auth();
        assert!(auth.verify_token("not.a.jwt").is_err());
    }
}
