use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::parse_id;
use super::ApiError;
use super::ApiSuccess;
use super::AppJson;
use crate::domain::vaccines::models::CreateVaccineCommand;
use crate::domain::vaccines::models::Vaccine;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::int_in_range;
use crate::inbound::http::validation::require_text;
use crate::inbound::http::validation::FieldError;
use crate::inbound::http::validation::FieldErrors;

pub async fn create_vaccine(
    State(state): State<AppState>,
    AppJson(body): AppJson<VaccineRequest>,
) -> Result<ApiSuccess<VaccineData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .vaccines
        .create(command)
        .await
        .map(|ref vaccine| ApiSuccess::new(StatusCode::CREATED, vaccine.into()))
        .map_err(ApiError::from)
}

pub async fn get_vaccine(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<VaccineData>, ApiError> {
    let id = parse_id(&id, "vaccine")?;

    state
        .vaccines
        .find_by_id(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Vaccine {id} not found")))
        .map(|ref vaccine| ApiSuccess::new(StatusCode::OK, vaccine.into()))
}

pub async fn list_vaccines(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<VaccineData>>, ApiError> {
    state
        .vaccines
        .list()
        .await
        .map(|vaccines| {
            ApiSuccess::new(StatusCode::OK, vaccines.iter().map(VaccineData::from).collect())
        })
        .map_err(ApiError::from)
}

pub async fn update_vaccine(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<VaccineRequest>,
) -> Result<ApiSuccess<VaccineData>, ApiError> {
    let id = parse_id(&id, "vaccine")?;
    let command = body.try_into_command()?;

    state
        .vaccines
        .update(id, command)
        .await
        .map(|ref vaccine| ApiSuccess::new(StatusCode::OK, vaccine.into()))
        .map_err(ApiError::from)
}

pub async fn delete_vaccine(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "vaccine")?;

    state
        .vaccines
        .delete(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(ApiError::from)
}

/// Raw JSON body for creating or updating a vaccine.
#[derive(Debug, Clone, Deserialize)]
pub struct VaccineRequest {
    name: String,
    disease: String,
    doses_required: i16,
}

impl VaccineRequest {
    fn try_into_command(self) -> Result<CreateVaccineCommand, Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        let name = require_text(&mut errors, "name", self.name);
        let disease = require_text(&mut errors, "disease", self.disease);
        let doses_required = int_in_range(&mut errors, "doses_required", self.doses_required, 1, 10);

        let (Some(name), Some(disease), Some(doses_required)) = (name, disease, doses_required)
        else {
            return Err(errors.into_vec());
        };

        Ok(CreateVaccineCommand {
            name,
            disease,
            doses_required,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaccineData {
    pub id: Uuid,
    pub name: String,
    pub disease: String,
    pub doses_required: i16,
}

impl From<&Vaccine> for VaccineData {
    fn from(vaccine: &Vaccine) -> Self {
        Self {
            id: vaccine.id,
            name: vaccine.name.clone(),
            disease: vaccine.disease.clone(),
            doses_required: vaccine.doses_required,
        }
    }
}
