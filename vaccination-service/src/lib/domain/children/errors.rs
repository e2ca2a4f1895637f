use thiserror::Error;

/// Error for gender strings outside the fixed set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Gender must be M or F, got {0}")]
pub struct UnknownGender(pub String);
