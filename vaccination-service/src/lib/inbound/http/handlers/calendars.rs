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
use crate::domain::calendars::models::CalendarEntry;
use crate::domain::calendars::models::CreateCalendarEntryCommand;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::int_in_range;
use crate::inbound::http::validation::parse_uuid;
use crate::inbound::http::validation::FieldError;
use crate::inbound::http::validation::FieldErrors;

pub async fn create_calendar_entry(
    State(state): State<AppState>,
    AppJson(body): AppJson<CalendarEntryRequest>,
) -> Result<ApiSuccess<CalendarEntryData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .calendars
        .create(command)
        .await
        .map(|ref entry| ApiSuccess::new(StatusCode::CREATED, entry.into()))
        .map_err(ApiError::from)
}

pub async fn get_calendar_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<CalendarEntryData>, ApiError> {
    let id = parse_id(&id, "calendar entry")?;

    state
        .calendars
        .find_by_id(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Calendar entry {id} not found")))
        .map(|ref entry| ApiSuccess::new(StatusCode::OK, entry.into()))
}

pub async fn list_calendar_entries(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CalendarEntryData>>, ApiError> {
    state
        .calendars
        .list()
        .await
        .map(|entries| {
            ApiSuccess::new(
                StatusCode::OK,
                entries.iter().map(CalendarEntryData::from).collect(),
            )
        })
        .map_err(ApiError::from)
}

pub async fn update_calendar_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<CalendarEntryRequest>,
) -> Result<ApiSuccess<CalendarEntryData>, ApiError> {
    let id = parse_id(&id, "calendar entry")?;
    let command = body.try_into_command()?;

    state
        .calendars
        .update(id, command)
        .await
        .map(|ref entry| ApiSuccess::new(StatusCode::OK, entry.into()))
        .map_err(ApiError::from)
}

pub async fn delete_calendar_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "calendar entry")?;

    state
        .calendars
        .delete(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(ApiError::from)
}

/// Raw JSON body for creating or updating a calendar entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarEntryRequest {
    country_id: String,
    vaccine_id: String,
    dose_number: i16,
    recommended_age_months: i16,
}

impl CalendarEntryRequest {
    fn try_into_command(self) -> Result<CreateCalendarEntryCommand, Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        let country_id = parse_uuid(&mut errors, "country_id", &self.country_id);
        let vaccine_id = parse_uuid(&mut errors, "vaccine_id", &self.vaccine_id);
        let dose_number = int_in_range(&mut errors, "dose_number", self.dose_number, 1, 10);
        let recommended_age_months = int_in_range(
            &mut errors,
            "recommended_age_months",
            self.recommended_age_months,
            0,
            216,
        );

        let (Some(country_id), Some(vaccine_id), Some(dose_number), Some(recommended_age_months)) =
            (country_id, vaccine_id, dose_number, recommended_age_months)
        else {
            return Err(errors.into_vec());
        };

        Ok(CreateCalendarEntryCommand {
            country_id,
            vaccine_id,
            dose_number,
            recommended_age_months,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntryData {
    pub id: Uuid,
    pub country_id: Uuid,
    pub vaccine_id: Uuid,
    pub dose_number: i16,
    pub recommended_age_months: i16,
}

impl From<&CalendarEntry> for CalendarEntryData {
    fn from(entry: &CalendarEntry) -> Self {
        Self {
            id: entry.id,
            country_id: entry.country_id,
            vaccine_id: entry.vaccine_id,
            dose_number: entry.dose_number,
            recommended_age_months: entry.recommended_age_months,
        }
    }
}
