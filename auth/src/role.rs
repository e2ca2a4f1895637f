use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Role attached to every principal and carried in token claims.
///
/// The set is closed; unknown role strings in stored records or tokens are
/// rejected rather than defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrador,
    Director,
    Doctor,
    User,
}

impl Role {
    /// Wire representation, as stored in the database and token claims.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrador => "administrador",
            Role::Director => "director",
            Role::Doctor => "doctor",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for role strings outside the fixed set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrador" => Ok(Role::Administrador),
            "director" => Ok(Role::Director),
            "doctor" => Ok(Role::Doctor),
            "user" => Ok(Role::User),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
