use chrono::NaiveDate;
use uuid::Uuid;

/// Physical batch of vaccine doses.
///
/// Stock accounting (decrementing `quantity` as doses are applied) lives in
/// the stored procedures; a depleted or expired lot surfaces as a domain
/// constraint error when a vaccination references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccineLot {
    pub id: Uuid,
    pub vaccine_id: Uuid,
    pub lot_number: String,
    pub expiration_date: NaiveDate,
    pub quantity: i32,
}

/// Validated fields for creating or fully updating a vaccine lot.
#[derive(Debug, Clone)]
pub struct CreateVaccineLotCommand {
    pub vaccine_id: Uuid,
    pub lot_number: String,
    pub expiration_date: NaiveDate,
    pub quantity: i32,
}
