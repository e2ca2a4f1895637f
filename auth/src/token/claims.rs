use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::role::Role;

/// Claims carried by every access token.
///
/// The payload is fixed by the API contract: the principal's identity plus
/// issuance and expiration timestamps. Nothing else rides in the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject: the principal's user id.
    pub sub: Uuid,

    pub username: String,

    pub role: Role,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration time (Unix timestamp). Always present; a token without an
    /// expiration never validates.
    pub exp: i64,
}

impl AccessClaims {
    /// Check whether the token is past its expiration.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
