//! Authentication Models
//! Mission: Define the token payload and issuance types

use serde::{Deserialize, Serialize};

/// JWT Claims payload
///
/// Issuance signs whatever object the caller posts; only the identity
/// email and the expiry matter downstream. A token signed without an
/// email decodes with an empty one and fails every ownership check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub email: String,
    pub exp: usize, // expiration timestamp
}

/// Token issuance response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
