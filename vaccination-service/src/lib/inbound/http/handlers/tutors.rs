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
use crate::domain::tutors::models::CreateTutorCommand;
use crate::domain::tutors::models::EmailAddress;
use crate::domain::tutors::models::Tutor;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::parse_with;
use crate::inbound::http::validation::require_text;
use crate::inbound::http::validation::FieldError;
use crate::inbound::http::validation::FieldErrors;

pub async fn create_tutor(
    State(state): State<AppState>,
    AppJson(body): AppJson<TutorRequest>,
) -> Result<ApiSuccess<TutorData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .tutors
        .create(command)
        .await
        .map(|ref tutor| ApiSuccess::new(StatusCode::CREATED, tutor.into()))
        .map_err(ApiError::from)
}

pub async fn get_tutor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<TutorData>, ApiError> {
    let id = parse_id(&id, "tutor")?;

    state
        .tutors
        .find_by_id(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Tutor {id} not found")))
        .map(|ref tutor| ApiSuccess::new(StatusCode::OK, tutor.into()))
}

pub async fn list_tutors(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<TutorData>>, ApiError> {
    state
        .tutors
        .list()
        .await
        .map(|tutors| ApiSuccess::new(StatusCode::OK, tutors.iter().map(TutorData::from).collect()))
        .map_err(ApiError::from)
}

pub async fn update_tutor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<TutorRequest>,
) -> Result<ApiSuccess<TutorData>, ApiError> {
    let id = parse_id(&id, "tutor")?;
    let command = body.try_into_command()?;

    state
        .tutors
        .update(id, command)
        .await
        .map(|ref tutor| ApiSuccess::new(StatusCode::OK, tutor.into()))
        .map_err(ApiError::from)
}

pub async fn delete_tutor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "tutor")?;

    state
        .tutors
        .delete(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(ApiError::from)
}

/// Raw JSON body for creating or updating a tutor.
#[derive(Debug, Clone, Deserialize)]
pub struct TutorRequest {
    first_name: String,
    last_name: String,
    document_id: String,
    email: String,
    phone: String,
}

impl TutorRequest {
    fn try_into_command(self) -> Result<CreateTutorCommand, Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        let first_name = require_text(&mut errors, "first_name", self.first_name);
        let last_name = require_text(&mut errors, "last_name", self.last_name);
        let document_id = require_text(&mut errors, "document_id", self.document_id);
        let email = parse_with(&mut errors, "email", self.email, EmailAddress::new);
        let phone = require_text(&mut errors, "phone", self.phone);

        let (Some(first_name), Some(last_name), Some(document_id), Some(email), Some(phone)) =
            (first_name, last_name, document_id, email, phone)
        else {
            return Err(errors.into_vec());
        };

        Ok(CreateTutorCommand {
            first_name,
            last_name,
            document_id,
            email,
            phone,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TutorData {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub document_id: String,
    pub email: String,
    pub phone: String,
}

impl From<&Tutor> for TutorData {
    fn from(tutor: &Tutor) -> Self {
        Self {
            id: tutor.id,
            first_name: tutor.first_name.clone(),
            last_name: tutor.last_name.clone(),
            document_id: tutor.document_id.clone(),
            email: tutor.email.as_str().to_string(),
            phone: tutor.phone.clone(),
        }
    }
}
