use auth::Role;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::ApiError;
use super::ApiSuccess;
use super::AppJson;
use crate::domain::principal::models::LoginCommand;
use crate::domain::principal::models::Principal;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::require_text;
use crate::inbound::http::validation::FieldError;
use crate::inbound::http::validation::FieldErrors;

pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let outcome = state.access.login(command).await.map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "Login successful".to_string(),
            token: outcome.token,
            user: (&outcome.principal).into(),
        },
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

impl LoginRequest {
    fn try_into_command(self) -> Result<LoginCommand, Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        let username = require_text(&mut errors, "username", self.username);
        let password = require_text(&mut errors, "password", self.password);

        let (Some(username), Some(password)) = (username, password) else {
            return Err(errors.into_vec());
        };

        Ok(LoginCommand { username, password })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub token: String,
    pub user: UserData,
}

/// Non-sensitive profile fields returned at login. The password hash never
/// leaves the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub user_id: Uuid,
    pub username: String,
    pub role: Role,
}

impl From<&Principal> for UserData {
    fn from(principal: &Principal) -> Self {
        Self {
            user_id: principal.user_id,
            username: principal.username.clone(),
            role: principal.role,
        }
    }
}
