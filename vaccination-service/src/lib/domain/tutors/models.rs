use std::str::FromStr;

use uuid::Uuid;

use super::errors::EmailError;

/// Tutor or legal guardian of one or more children in the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tutor {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub document_id: String,
    pub email: EmailAddress,
    pub phone: String,
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated fields for creating or fully updating a tutor.
#[derive(Debug, Clone)]
pub struct CreateTutorCommand {
    pub first_name: String,
    pub last_name: String,
    pub document_id: String,
    pub email: EmailAddress,
    pub phone: String,
}
