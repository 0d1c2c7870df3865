//! JWT issuance and validation
//!
//! Bearer tokens are stateless HS256 assertions of identity: validity is
//! determined purely by signature, issuer, audience, and expiry at
//! request time. Nothing is persisted and nothing can be revoked early;
//! a user may hold any number of live tokens at once.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::users::User;
use crate::server::config::JwtConfig;

/// Token lifetime in hours
const TOKEN_TTL_HOURS: i64 = 2;

/// Claim set carried by every issued token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's stable id
    pub sub: String,
    /// The user's email; doubles as the ownership scope key
    pub name: String,
    /// Unique token id, fresh per issuance
    pub jti: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issue a token for a user
///
/// Builds the claim set, signs it with the configured symmetric key, and
/// returns the encoded token together with its expiry (now + 2 hours).
/// Issuance has no side effects; previously issued tokens stay valid.
pub fn issue(
    config: &JwtConfig,
    user: &User,
) -> Result<(String, DateTime<Utc>), jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(TOKEN_TTL_HOURS);

    let claims = Claims {
        sub: user.id.to_string(),
        name: user.email.clone(),
        jti: Uuid::new_v4().to_string(),
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    let key = EncodingKey::from_secret(config.key.as_ref());
    let token = encode(&Header::default(), &claims, &key)?;

    Ok((token, expires_at))
}

/// Verify a token and return its claims
///
/// Checks signature, issuer, audience, and expiry with zero leeway: a
/// token is valid iff every check passes and the current time is before
/// `exp`. Any failure means the request is unauthorized; callers must
/// not leak the reason to the client.
pub fn validate(config: &JwtConfig, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(config.key.as_ref());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);

    let data = decode::<Claims>(token, &key, &validation)?;
    Ok(data.claims)
}
