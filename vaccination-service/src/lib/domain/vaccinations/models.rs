use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// A dose applied to a child from a specific lot.
///
/// `applied_by` is always the authenticated principal who recorded the
/// event, never a caller-supplied value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vaccination {
    pub id: Uuid,
    pub child_id: Uuid,
    pub lot_id: Uuid,
    /// Position in the vaccine's scheme, 1 to 10.
    pub dose_number: i16,
    pub applied_by: Uuid,
    pub applied_at: DateTime<Utc>,
}

/// Validated fields for recording or correcting a vaccination event.
#[derive(Debug, Clone)]
pub struct CreateVaccinationCommand {
    pub child_id: Uuid,
    pub lot_id: Uuid,
    pub dose_number: i16,
    pub applied_by: Uuid,
    pub applied_at: DateTime<Utc>,
}
