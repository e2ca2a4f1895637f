use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::errors::CountryCodeError;

/// Country participating in a vaccination calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: Uuid,
    pub name: String,
    pub iso_code: CountryCode,
}

/// ISO 3166-1 alpha-2 country code value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a validated country code.
    ///
    /// # Errors
    /// * `WrongLength` - Not exactly 2 characters
    /// * `InvalidCharacters` - Contains anything but uppercase ASCII letters
    pub fn new(code: String) -> Result<Self, CountryCodeError> {
        if code.len() != 2 {
            return Err(CountryCodeError::WrongLength(code.len()));
        }
        if !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(CountryCodeError::InvalidCharacters);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CountryCode {
    type Err = CountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Validated fields for creating a country; a full update carries the same
/// fields (PUT replaces the record).
#[derive(Debug, Clone)]
pub struct CreateCountryCommand {
    pub name: String,
    pub iso_code: CountryCode,
}
