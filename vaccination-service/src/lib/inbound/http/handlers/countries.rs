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
use crate::domain::countries::models::Country;
use crate::domain::countries::models::CountryCode;
use crate::domain::countries::models::CreateCountryCommand;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::parse_with;
use crate::inbound::http::validation::require_text;
use crate::inbound::http::validation::FieldError;
use crate::inbound::http::validation::FieldErrors;

pub async fn create_country(
    State(state): State<AppState>,
    AppJson(body): AppJson<CountryRequest>,
) -> Result<ApiSuccess<CountryData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .countries
        .create(command)
        .await
        .map(|ref country| ApiSuccess::new(StatusCode::CREATED, country.into()))
        .map_err(ApiError::from)
}

pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<CountryData>, ApiError> {
    let id = parse_id(&id, "country")?;

    state
        .countries
        .find_by_id(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Country {id} not found")))
        .map(|ref country| ApiSuccess::new(StatusCode::OK, country.into()))
}

pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CountryData>>, ApiError> {
    state
        .countries
        .list()
        .await
        .map(|countries| {
            ApiSuccess::new(StatusCode::OK, countries.iter().map(CountryData::from).collect())
        })
        .map_err(ApiError::from)
}

pub async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<CountryRequest>,
) -> Result<ApiSuccess<CountryData>, ApiError> {
    let id = parse_id(&id, "country")?;
    let command = body.try_into_command()?;

    state
        .countries
        .update(id, command)
        .await
        .map(|ref country| ApiSuccess::new(StatusCode::OK, country.into()))
        .map_err(ApiError::from)
}

pub async fn delete_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "country")?;

    state
        .countries
        .delete(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(ApiError::from)
}

/// Raw JSON body for creating or updating a country.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRequest {
    name: String,
    iso_code: String,
}

impl CountryRequest {
    fn try_into_command(self) -> Result<CreateCountryCommand, Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        let name = require_text(&mut errors, "name", self.name);
        let iso_code = parse_with(&mut errors, "iso_code", self.iso_code, CountryCode::new);

        let (Some(name), Some(iso_code)) = (name, iso_code) else {
            return Err(errors.into_vec());
        };

        Ok(CreateCountryCommand { name, iso_code })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryData {
    pub id: Uuid,
    pub name: String,
    pub iso_code: String,
}

impl From<&Country> for CountryData {
    fn from(country: &Country) -> Self {
        Self {
            id: country.id,
            name: country.name.clone(),
            iso_code: country.iso_code.as_str().to_string(),
        }
    }
}
