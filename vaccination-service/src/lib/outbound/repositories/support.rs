use crate::domain::errors::StoreError;

/// SQLSTATE class the stored procedures raise for business-rule
/// violations. Messages in this class are written by the procedures and are
/// safe to pass through to callers; everything else stays internal.
const DOMAIN_ERROR_CLASS: &str = "45";

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error() {
            if let Some(code) = db_err.code() {
                if code.starts_with(DOMAIN_ERROR_CLASS) {
                    return StoreError::Constraint(db_err.message().to_string());
                }
            }
        }
        StoreError::Database(e.to_string())
    }
}
