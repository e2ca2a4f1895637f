use uuid::Uuid;

/// Vaccine in the program catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vaccine {
    pub id: Uuid,
    pub name: String,
    pub disease: String,
    /// Doses in the complete scheme, 1 to 10.
    pub doses_required: i16,
}

/// Validated fields for creating or fully updating a vaccine.
#[derive(Debug, Clone)]
pub struct CreateVaccineCommand {
    pub name: String,
    pub disease: String,
    pub doses_required: i16,
}
