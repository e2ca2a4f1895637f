use thiserror::Error;

/// Error for ISO country code validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CountryCodeError {
    #[error("Country code must be exactly 2 characters, got {0}")]
    WrongLength(usize),

    #[error("Country code must contain only uppercase ASCII letters")]
    InvalidCharacters,
}
