use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::parse_id;
use super::ApiError;
use super::ApiSuccess;
use super::AppJson;
use crate::domain::appointments::models::Appointment;
use crate::domain::appointments::models::AppointmentStatus;
use crate::domain::appointments::models::CreateAppointmentCommand;
use crate::domain::appointments::models::UpdateAppointmentCommand;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::parse_datetime;
use crate::inbound::http::validation::parse_enum;
use crate::inbound::http::validation::parse_uuid;
use crate::inbound::http::validation::FieldError;
use crate::inbound::http::validation::FieldErrors;

pub async fn create_appointment(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateAppointmentRequest>,
) -> Result<ApiSuccess<AppointmentData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .appointments
        .create(command)
        .await
        .map(|ref appointment| ApiSuccess::new(StatusCode::CREATED, appointment.into()))
        .map_err(ApiError::from)
}

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<AppointmentData>, ApiError> {
    let id = parse_id(&id, "appointment")?;

    state
        .appointments
        .find_by_id(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Appointment {id} not found")))
        .map(|ref appointment| ApiSuccess::new(StatusCode::OK, appointment.into()))
}

pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AppointmentData>>, ApiError> {
    state
        .appointments
        .list()
        .await
        .map(|appointments| {
            ApiSuccess::new(
                StatusCode::OK,
                appointments.iter().map(AppointmentData::from).collect(),
            )
        })
        .map_err(ApiError::from)
}

pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<UpdateAppointmentRequest>,
) -> Result<ApiSuccess<AppointmentData>, ApiError> {
    let id = parse_id(&id, "appointment")?;
    let command = body.try_into_command()?;

    state
        .appointments
        .update(id, command)
        .await
        .map(|ref appointment| ApiSuccess::new(StatusCode::OK, appointment.into()))
        .map_err(ApiError::from)
}

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "appointment")?;

    state
        .appointments
        .delete(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(ApiError::from)
}

/// Raw JSON body for scheduling an appointment. New appointments always
/// start `Pendiente`, so no status field is accepted here.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointmentRequest {
    child_id: String,
    health_center_id: String,
    scheduled_at: String,
}

impl CreateAppointmentRequest {
    fn try_into_command(self) -> Result<CreateAppointmentCommand, Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        let child_id = parse_uuid(&mut errors, "child_id", &self.child_id);
        let health_center_id = parse_uuid(&mut errors, "health_center_id", &self.health_center_id);
        let scheduled_at = parse_datetime(&mut errors, "scheduled_at", &self.scheduled_at)
            .filter(|instant| {
                if *instant <= Utc::now() {
                    errors.push("scheduled_at", "must be in the future");
                    false
                } else {
                    true
                }
            });

        let (Some(child_id), Some(health_center_id), Some(scheduled_at)) =
            (child_id, health_center_id, scheduled_at)
        else {
            return Err(errors.into_vec());
        };

        Ok(CreateAppointmentCommand {
            child_id,
            health_center_id,
            scheduled_at,
        })
    }
}

/// Raw JSON body for a full appointment update: reschedule, move, or
/// status change. Past timestamps are allowed here so an attended
/// appointment can be recorded after the fact.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAppointmentRequest {
    child_id: String,
    health_center_id: String,
    scheduled_at: String,
    status: String,
}

impl UpdateAppointmentRequest {
    fn try_into_command(self) -> Result<UpdateAppointmentCommand, Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        let child_id = parse_uuid(&mut errors, "child_id", &self.child_id);
        let health_center_id = parse_uuid(&mut errors, "health_center_id", &self.health_center_id);
        let scheduled_at = parse_datetime(&mut errors, "scheduled_at", &self.scheduled_at);
        let status = parse_enum::<AppointmentStatus>(&mut errors, "status", &self.status);

        let (Some(child_id), Some(health_center_id), Some(scheduled_at), Some(status)) =
            (child_id, health_center_id, scheduled_at, status)
        else {
            return Err(errors.into_vec());
        };

        Ok(UpdateAppointmentCommand {
            child_id,
            health_center_id,
            scheduled_at,
            status,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentData {
    pub id: Uuid,
    pub child_id: Uuid,
    pub health_center_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub status: String,
}

impl From<&Appointment> for AppointmentData {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id,
            child_id: appointment.child_id,
            health_center_id: appointment.health_center_id,
            scheduled_at: appointment.scheduled_at,
            status: appointment.status.as_str().to_string(),
        }
    }
}
