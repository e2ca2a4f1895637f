use thiserror::Error;

/// Error for appointment status strings outside the fixed set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown appointment status: {0}")]
pub struct UnknownAppointmentStatus(pub String);
