use uuid::Uuid;

/// One entry of a country's vaccination calendar: which dose of which
/// vaccine is recommended at which age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub id: Uuid,
    pub country_id: Uuid,
    pub vaccine_id: Uuid,
    /// Position in the vaccine's scheme, 1 to 10.
    pub dose_number: i16,
    /// Recommended age in months, 0 to 216 (18 years).
    pub recommended_age_months: i16,
}

/// Validated fields for creating or fully updating a calendar entry.
#[derive(Debug, Clone)]
pub struct CreateCalendarEntryCommand {
    pub country_id: Uuid,
    pub vaccine_id: Uuid,
    pub dose_number: i16,
    pub recommended_age_months: i16,
}
