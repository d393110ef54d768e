//! JWT Token Handler
//! Mission: Sign caller-supplied claims and validate presented tokens

use crate::auth::models::Claims;
use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{json, Value};
use tracing::debug;

/// JWT Handler for token operations
pub struct JwtHandler {
    secret: String,
    expiration_hours: i64,
}

impl JwtHandler {
    /// Create a new JWT handler with secret key and expiry window
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret,
            expiration_hours,
        }
    }

    /// Sign the posted claims object verbatim, adding only `exp`.
    ///
    /// No claim is validated here: token issuance is a claims-signing
    /// endpoint, not a login flow. Integrators front it with their own
    /// identity check.
    pub fn generate_token(&self, claims: &Value) -> Result<String> {
        let mut payload = claims
            .as_object()
            .cloned()
            .context("Token claims must be a JSON object")?;

        let expiration = Utc::now()
            .checked_add_signed(chrono::Duration::hours(self.expiration_hours))
            .context("Invalid timestamp")?
            .timestamp();

        payload.insert("exp".to_string(), json!(expiration));

        debug!(
            "Signing token for {:?}, expires in {}h",
            payload.get("email"),
            self.expiration_hours
        );

        encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to generate JWT")
    }

    /// Validate a JWT token and extract claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .context("Invalid or expired token")?;

        debug!("Validated JWT for {}", decoded.claims.email);

        Ok(decoded.claims)
    }

    /// Pull the bearer token out of an `Authorization` header value.
    ///
    /// The token is the second whitespace-delimited segment, whatever the
    /// scheme word says.
    pub fn extract_bearer(header: &str) -> Option<&str> {
        header.split_whitespace().nth(1)
    }
}
