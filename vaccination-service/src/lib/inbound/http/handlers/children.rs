use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::parse_id;
use super::ApiError;
use super::ApiSuccess;
use super::AppJson;
use crate::domain::children::models::Child;
use crate::domain::children::models::CreateChildCommand;
use crate::domain::children::models::Gender;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::parse_date;
use crate::inbound::http::validation::parse_enum;
use crate::inbound::http::validation::parse_uuid;
use crate::inbound::http::validation::require_text;
use crate::inbound::http::validation::FieldError;
use crate::inbound::http::validation::FieldErrors;

pub async fn create_child(
    State(state): State<AppState>,
    AppJson(body): AppJson<ChildRequest>,
) -> Result<ApiSuccess<ChildData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .children
        .create(command)
        .await
        .map(|ref child| ApiSuccess::new(StatusCode::CREATED, child.into()))
        .map_err(ApiError::from)
}

pub async fn get_child(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<ChildData>, ApiError> {
    let id = parse_id(&id, "child")?;

    state
        .children
        .find_by_id(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Child {id} not found")))
        .map(|ref child| ApiSuccess::new(StatusCode::OK, child.into()))
}

pub async fn list_children(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ChildData>>, ApiError> {
    state
        .children
        .list()
        .await
        .map(|children| {
            ApiSuccess::new(StatusCode::OK, children.iter().map(ChildData::from).collect())
        })
        .map_err(ApiError::from)
}

pub async fn update_child(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<ChildRequest>,
) -> Result<ApiSuccess<ChildData>, ApiError> {
    let id = parse_id(&id, "child")?;
    let command = body.try_into_command()?;

    state
        .children
        .update(id, command)
        .await
        .map(|ref child| ApiSuccess::new(StatusCode::OK, child.into()))
        .map_err(ApiError::from)
}

pub async fn delete_child(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "child")?;

    state
        .children
        .delete(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(ApiError::from)
}

/// Raw JSON body for creating or updating a child record.
#[derive(Debug, Clone, Deserialize)]
pub struct ChildRequest {
    first_name: String,
    last_name: String,
    birth_date: String,
    gender: String,
    tutor_id: String,
    health_center_id: String,
}

impl ChildRequest {
    fn try_into_command(self) -> Result<CreateChildCommand, Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        let first_name = require_text(&mut errors, "first_name", self.first_name);
        let last_name = require_text(&mut errors, "last_name", self.last_name);
        let birth_date = parse_date(&mut errors, "birth_date", &self.birth_date);
        let gender = parse_enum::<Gender>(&mut errors, "gender", &self.gender);
        let tutor_id = parse_uuid(&mut errors, "tutor_id", &self.tutor_id);
        let health_center_id = parse_uuid(&mut errors, "health_center_id", &self.health_center_id);

        // A birth date in the future is always an entry mistake
        let birth_date = birth_date.filter(|date| {
            if *date > Utc::now().date_naive() {
                errors.push("birth_date", "must not be in the future");
                false
            } else {
                true
            }
        });

        let (
            Some(first_name),
            Some(last_name),
            Some(birth_date),
            Some(gender),
            Some(tutor_id),
            Some(health_center_id),
        ) = (
            first_name,
            last_name,
            birth_date,
            gender,
            tutor_id,
            health_center_id,
        )
        else {
            return Err(errors.into_vec());
        };

        Ok(CreateChildCommand {
            first_name,
            last_name,
            birth_date,
            gender,
            tutor_id,
            health_center_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildData {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub tutor_id: Uuid,
    pub health_center_id: Uuid,
}

impl From<&Child> for ChildData {
    fn from(child: &Child) -> Self {
        Self {
            id: child.id,
            first_name: child.first_name.clone(),
            last_name: child.last_name.clone(),
            birth_date: child.birth_date,
            gender: child.gender.as_str().to_string(),
            tutor_id: child.tutor_id,
            health_center_id: child.health_center_id,
        }
    }
}
