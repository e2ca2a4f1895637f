use std::sync::Arc;

use auth::PasswordError;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::DateTime;
use chrono::Utc;

use super::errors::AccessError;
use super::models::AccountStatus;
use super::models::LoginCommand;
use super::models::Principal;
use super::ports::CredentialStore;

/// Login operation: credential lookup, status check, password
/// verification, token issuance.
pub struct AccessService {
    credentials: Arc<dyn CredentialStore>,
    tokens: Arc<TokenService>,
    password_hasher: PasswordHasher,
    // Verified when the username is unknown, so that path costs roughly the
    // same as a real password mismatch.
    decoy_hash: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub principal: Principal,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessService {
    /// Create the login service.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing the decoy password failed
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        tokens: Arc<TokenService>,
    ) -> Result<Self, PasswordError> {
        let password_hasher = PasswordHasher::new();
        let decoy_hash = password_hasher.hash("decoy-password")?;

        Ok(Self {
            credentials,
            tokens,
            password_hasher,
            decoy_hash,
        })
    }

    /// Authenticate a username/password pair and issue an access token.
    ///
    /// Unknown usernames and wrong passwords produce the same
    /// `InvalidCredentials` error. An `Inactivo` account is rejected before
    /// password verification and never receives a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or password mismatch
    /// * `AccountInactive` - Account exists but is disabled
    /// * `Token` - Token issuance failed
    /// * `Store` - Credential lookup failed
    pub async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AccessError> {
        let credential = self.credentials.find_by_username(&command.username).await?;

        let Some(credential) = credential else {
            self.password_hasher.verify(&command.password, &self.decoy_hash);
            tracing::warn!(username = %command.username, "Login rejected: unknown username");
            return Err(AccessError::InvalidCredentials);
        };

        if credential.status == AccountStatus::Inactivo {
            tracing::warn!(username = %credential.username, "Login rejected: account inactive");
            return Err(AccessError::AccountInactive);
        }

        if !self
            .password_hasher
            .verify(&command.password, &credential.password_hash)
        {
            tracing::warn!(username = %credential.username, "Login rejected: password mismatch");
            return Err(AccessError::InvalidCredentials);
        }

        let issued = self
            .tokens
            .issue(credential.user_id, &credential.username, credential.role)?;

        tracing::info!(
            username = %credential.username,
            role = %credential.role,
            expires_at = %issued.expires_at,
            "Login succeeded"
        );

        Ok(LoginOutcome {
            principal: Principal {
                user_id: credential.user_id,
                username: credential.username,
                role: credential.role,
            },
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}
