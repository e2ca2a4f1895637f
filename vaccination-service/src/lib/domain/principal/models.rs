use std::fmt;
use std::str::FromStr;

use auth::Role;
use uuid::Uuid;

use super::errors::UnknownStatus;

/// Authenticated identity attached to each request after token
/// verification, and returned (without the credential) from login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    pub username: String,
    pub role: Role,
}

/// Whether an account may log in.
///
/// Wire form is the exact stored text: `Activo` / `Inactivo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Activo,
    Inactivo,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Activo => "Activo",
            AccountStatus::Inactivo => "Inactivo",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Activo" => Ok(AccountStatus::Activo),
            "Inactivo" => Ok(AccountStatus::Inactivo),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Credential record as returned by the credential store.
///
/// Provisioned out-of-band; this backend only ever reads it, at login.
#[derive(Debug, Clone)]
pub struct StoredCredential {
    pub user_id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub status: AccountStatus,
}

/// Login request after field validation.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}
