use thiserror::Error;

/// Error surfaced by every persistence port.
///
/// All resources share the same stored-procedure contract, so they share one
/// error type: a lookup miss, a business-rule violation raised by the
/// procedure, or an infrastructure failure. The HTTP boundary maps these to
/// 404, 400, and 500 respectively.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Lookup by identifier matched no row.
    #[error("{0} not found")]
    NotFound(String),

    /// Domain constraint violation reported by a stored procedure. The
    /// message is written by the procedure and safe to return to callers.
    #[error("{0}")]
    Constraint(String),

    /// Any other persistence failure. The message is for logs only and is
    /// never returned to callers.
    #[error("Database error: {0}")]
    Database(String),
}
