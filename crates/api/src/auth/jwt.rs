//! Verification of identity-service access tokens.
//!
//! Tokens are HS256-signed JWTs issued by the hosted identity service. Its
//! claim layout puts role names under `app_metadata.roles`; only the
//! subject, email and roles are consumed here.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sciday_core::roles::Principal;
use serde::{Deserialize, Serialize};

/// Claims carried by an identity-service access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the identity-service user id.
    pub sub: String,
    #[serde(default)]
    pub email: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppMetadata {
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    pub fn into_principal(self) -> Principal {
        Principal::new(self.sub, self.email, self.app_metadata.roles)
    }
}

/// Configuration for token validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC-SHA256 secret of the identity service.
    pub secret: String,
    /// Expected `aud` claim. When unset the audience is not checked.
    pub audience: Option<String>,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var        | Required | Default |
    /// |----------------|----------|---------|
    /// | `JWT_SECRET`   | **yes**  | --      |
    /// | `JWT_AUDIENCE` | no       | unset   |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let audience = std::env::var("JWT_AUDIENCE")
            .ok()
            .filter(|a| !a.trim().is_empty());

        Self { secret, audience }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::default(); // HS256, validates exp
        match &self.audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }
        validation
    }
}

/// Validate and decode an access token, returning the embedded [`Claims`].
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &config.validation(),
    )?;
    Ok(token_data.claims)
}

/// Sign a token with the identity-service claim layout.
///
/// The service itself never issues tokens; this exists for local tooling
/// and tests that need a token the server will accept.
pub fn sign_token(claims: &Claims, config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}
