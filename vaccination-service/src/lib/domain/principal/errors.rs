use auth::TokenError;
use thiserror::Error;

use crate::domain::errors::StoreError;

/// Error for account status strings outside the fixed set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown account status: {0}")]
pub struct UnknownStatus(pub String);

/// Errors produced by the login operation.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Unknown username or wrong password. One variant for both; callers
    /// must not be able to enumerate usernames.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User account is inactive")]
    AccountInactive,

    #[error("Token issuance failed: {0}")]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
