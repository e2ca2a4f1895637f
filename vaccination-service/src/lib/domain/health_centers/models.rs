use uuid::Uuid;

/// Health center where vaccinations and appointments take place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCenter {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub country_id: Uuid,
}

/// Validated fields for creating or fully updating a health center.
#[derive(Debug, Clone)]
pub struct CreateHealthCenterCommand {
    pub name: String,
    pub address: String,
    pub country_id: Uuid,
}
