use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::parse_id;
use super::ApiError;
use super::ApiSuccess;
use super::AppJson;
use crate::domain::vaccine_lots::models::CreateVaccineLotCommand;
use crate::domain::vaccine_lots::models::VaccineLot;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::int_in_range;
use crate::inbound::http::validation::parse_date;
use crate::inbound::http::validation::parse_uuid;
use crate::inbound::http::validation::require_text;
use crate::inbound::http::validation::FieldError;
use crate::inbound::http::validation::FieldErrors;

pub async fn create_vaccine_lot(
    State(state): State<AppState>,
    AppJson(body): AppJson<VaccineLotRequest>,
) -> Result<ApiSuccess<VaccineLotData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .vaccine_lots
        .create(command)
        .await
        .map(|ref lot| ApiSuccess::new(StatusCode::CREATED, lot.into()))
        .map_err(ApiError::from)
}

pub async fn get_vaccine_lot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<VaccineLotData>, ApiError> {
    let id = parse_id(&id, "vaccine lot")?;

    state
        .vaccine_lots
        .find_by_id(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Vaccine lot {id} not found")))
        .map(|ref lot| ApiSuccess::new(StatusCode::OK, lot.into()))
}

pub async fn list_vaccine_lots(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<VaccineLotData>>, ApiError> {
    state
        .vaccine_lots
        .list()
        .await
        .map(|lots| {
            ApiSuccess::new(StatusCode::OK, lots.iter().map(VaccineLotData::from).collect())
        })
        .map_err(ApiError::from)
}

pub async fn update_vaccine_lot(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<VaccineLotRequest>,
) -> Result<ApiSuccess<VaccineLotData>, ApiError> {
    let id = parse_id(&id, "vaccine lot")?;
    let command = body.try_into_command()?;

    state
        .vaccine_lots
        .update(id, command)
        .await
        .map(|ref lot| ApiSuccess::new(StatusCode::OK, lot.into()))
        .map_err(ApiError::from)
}

pub async fn delete_vaccine_lot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "vaccine lot")?;

    state
        .vaccine_lots
        .delete(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(ApiError::from)
}

/// Raw JSON body for creating or updating a vaccine lot.
#[derive(Debug, Clone, Deserialize)]
pub struct VaccineLotRequest {
    vaccine_id: String,
    lot_number: String,
    expiration_date: String,
    quantity: i32,
}

impl VaccineLotRequest {
    fn try_into_command(self) -> Result<CreateVaccineLotCommand, Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        let vaccine_id = parse_uuid(&mut errors, "vaccine_id", &self.vaccine_id);
        let lot_number = require_text(&mut errors, "lot_number", self.lot_number);
        let expiration_date = parse_date(&mut errors, "expiration_date", &self.expiration_date);
        let quantity = int_in_range(&mut errors, "quantity", self.quantity, 1, i32::MAX);

        let (Some(vaccine_id), Some(lot_number), Some(expiration_date), Some(quantity)) =
            (vaccine_id, lot_number, expiration_date, quantity)
        else {
            return Err(errors.into_vec());
        };

        Ok(CreateVaccineLotCommand {
            vaccine_id,
            lot_number,
            expiration_date,
            quantity,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaccineLotData {
    pub id: Uuid,
    pub vaccine_id: Uuid,
    pub lot_number: String,
    pub expiration_date: NaiveDate,
    pub quantity: i32,
}

impl From<&VaccineLot> for VaccineLotData {
    fn from(lot: &VaccineLot) -> Self {
        Self {
            id: lot.id,
            vaccine_id: lot.vaccine_id,
            lot_number: lot.lot_number.clone(),
            expiration_date: lot.expiration_date,
            quantity: lot.quantity,
        }
    }
}
