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
use crate::domain::health_centers::models::CreateHealthCenterCommand;
use crate::domain::health_centers::models::HealthCenter;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::parse_uuid;
use crate::inbound::http::validation::require_text;
use crate::inbound::http::validation::FieldError;
use crate::inbound::http::validation::FieldErrors;

pub async fn create_health_center(
    State(state): State<AppState>,
    AppJson(body): AppJson<HealthCenterRequest>,
) -> Result<ApiSuccess<HealthCenterData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .health_centers
        .create(command)
        .await
        .map(|ref center| ApiSuccess::new(StatusCode::CREATED, center.into()))
        .map_err(ApiError::from)
}

pub async fn get_health_center(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<HealthCenterData>, ApiError> {
    let id = parse_id(&id, "health center")?;

    state
        .health_centers
        .find_by_id(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Health center {id} not found")))
        .map(|ref center| ApiSuccess::new(StatusCode::OK, center.into()))
}

pub async fn list_health_centers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<HealthCenterData>>, ApiError> {
    state
        .health_centers
        .list()
        .await
        .map(|centers| {
            ApiSuccess::new(
                StatusCode::OK,
                centers.iter().map(HealthCenterData::from).collect(),
            )
        })
        .map_err(ApiError::from)
}

pub async fn update_health_center(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<HealthCenterRequest>,
) -> Result<ApiSuccess<HealthCenterData>, ApiError> {
    let id = parse_id(&id, "health center")?;
    let command = body.try_into_command()?;

    state
        .health_centers
        .update(id, command)
        .await
        .map(|ref center| ApiSuccess::new(StatusCode::OK, center.into()))
        .map_err(ApiError::from)
}

pub async fn delete_health_center(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "health center")?;

    state
        .health_centers
        .delete(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(ApiError::from)
}

/// Raw JSON body for creating or updating a health center.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthCenterRequest {
    name: String,
    address: String,
    country_id: String,
}

impl HealthCenterRequest {
    fn try_into_command(self) -> Result<CreateHealthCenterCommand, Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        let name = require_text(&mut errors, "name", self.name);
        let address = require_text(&mut errors, "address", self.address);
        let country_id = parse_uuid(&mut errors, "country_id", &self.country_id);

        let (Some(name), Some(address), Some(country_id)) = (name, address, country_id) else {
            return Err(errors.into_vec());
        };

        Ok(CreateHealthCenterCommand {
            name,
            address,
            country_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthCenterData {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub country_id: Uuid,
}

impl From<&HealthCenter> for HealthCenterData {
    fn from(center: &HealthCenter) -> Self {
        Self {
            id: center.id,
            name: center.name.clone(),
            address: center.address.clone(),
            country_id: center.country_id,
        }
    }
}
