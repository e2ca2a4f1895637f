use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::AccessClaims;
use super::errors::TokenError;
use crate::role::Role;

/// Issues and verifies signed access tokens.
///
/// Tokens are HS256 JWTs with a fixed time-to-live window from issuance.
/// Verification is a pure computation: signature check plus timestamp
/// comparison, no I/O and no server-side token state.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

/// A freshly issued token together with its absolute expiration.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl TokenService {
    /// Create a token service from the signing secret and token lifetime.
    ///
    /// # Arguments
    /// * `secret` - HMAC signing secret (at least 32 bytes recommended)
    /// * `ttl` - Validity window applied to every issued token
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty. Callers treat this as a
    ///   fatal configuration error at process startup.
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        })
    }

    /// Issue a signed token for an authenticated principal.
    ///
    /// # Arguments
    /// * `user_id` - Principal identifier, becomes the `sub` claim
    /// * `username` - Username claim
    /// * `role` - Role claim
    ///
    /// # Returns
    /// The encoded token and its absolute expiration timestamp
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        user_id: Uuid,
        username: &str,
        role: Role,
    ) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expires_at = now + self.ttl;

        let claims = AccessClaims {
            sub: user_id,
            username: username.to_string(),
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify a token's signature and expiration, returning its claims.
    ///
    /// A token whose signature fails is never partially trusted; no claim is
    /// readable through this method unless the whole token validates.
    ///
    /// # Errors
    /// * `Expired` - Past the `exp` claim
    /// * `Invalid` - Signature, structure, or claim validation failed
    pub fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // No clock leeway: expired means expired.
        validation.leeway = 0;

        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
