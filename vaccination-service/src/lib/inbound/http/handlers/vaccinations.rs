use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::parse_id;
use super::ApiError;
use super::ApiSuccess;
use super::AppJson;
use crate::domain::principal::models::Principal;
use crate::domain::vaccinations::models::CreateVaccinationCommand;
use crate::domain::vaccinations::models::Vaccination;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::int_in_range;
use crate::inbound::http::validation::parse_datetime;
use crate::inbound::http::validation::parse_uuid;
use crate::inbound::http::validation::FieldError;
use crate::inbound::http::validation::FieldErrors;

pub async fn create_vaccination(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    AppJson(body): AppJson<VaccinationRequest>,
) -> Result<ApiSuccess<VaccinationData>, ApiError> {
    // The recording principal is taken from the verified token, never from
    // the request body.
    let command = body.try_into_command(principal.user_id)?;

    state
        .vaccinations
        .create(command)
        .await
        .map(|ref vaccination| ApiSuccess::new(StatusCode::CREATED, vaccination.into()))
        .map_err(ApiError::from)
}

pub async fn get_vaccination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<VaccinationData>, ApiError> {
    let id = parse_id(&id, "vaccination")?;

    state
        .vaccinations
        .find_by_id(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Vaccination {id} not found")))
        .map(|ref vaccination| ApiSuccess::new(StatusCode::OK, vaccination.into()))
}

pub async fn list_vaccinations(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<VaccinationData>>, ApiError> {
    state
        .vaccinations
        .list()
        .await
        .map(|vaccinations| {
            ApiSuccess::new(
                StatusCode::OK,
                vaccinations.iter().map(VaccinationData::from).collect(),
            )
        })
        .map_err(ApiError::from)
}

pub async fn update_vaccination(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    AppJson(body): AppJson<VaccinationRequest>,
) -> Result<ApiSuccess<VaccinationData>, ApiError> {
    let id = parse_id(&id, "vaccination")?;
    let command = body.try_into_command(principal.user_id)?;

    state
        .vaccinations
        .update(id, command)
        .await
        .map(|ref vaccination| ApiSuccess::new(StatusCode::OK, vaccination.into()))
        .map_err(ApiError::from)
}

pub async fn delete_vaccination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "vaccination")?;

    state
        .vaccinations
        .delete(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(ApiError::from)
}

/// Raw JSON body for recording or correcting a vaccination event.
/// `applied_at` defaults to the current instant when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct VaccinationRequest {
    child_id: String,
    lot_id: String,
    dose_number: i16,
    applied_at: Option<String>,
}

impl VaccinationRequest {
    fn try_into_command(
        self,
        applied_by: Uuid,
    ) -> Result<CreateVaccinationCommand, Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        let child_id = parse_uuid(&mut errors, "child_id", &self.child_id);
        let lot_id = parse_uuid(&mut errors, "lot_id", &self.lot_id);
        let dose_number = int_in_range(&mut errors, "dose_number", self.dose_number, 1, 10);
        let applied_at = match &self.applied_at {
            Some(raw) => parse_datetime(&mut errors, "applied_at", raw),
            None => Some(Utc::now()),
        };

        let (Some(child_id), Some(lot_id), Some(dose_number), Some(applied_at)) =
            (child_id, lot_id, dose_number, applied_at)
        else {
            return Err(errors.into_vec());
        };

        Ok(CreateVaccinationCommand {
            child_id,
            lot_id,
            dose_number,
            applied_by,
            applied_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaccinationData {
    pub id: Uuid,
    pub child_id: Uuid,
    pub lot_id: Uuid,
    pub dose_number: i16,
    pub applied_by: Uuid,
    pub applied_at: DateTime<Utc>,
}

impl From<&Vaccination> for VaccinationData {
    fn from(vaccination: &Vaccination) -> Self {
        Self {
            id: vaccination.id,
            child_id: vaccination.child_id,
            lot_id: vaccination.lot_id,
            dose_number: vaccination.dose_number,
            applied_by: vaccination.applied_by,
            applied_at: vaccination.applied_at,
        }
    }
}
