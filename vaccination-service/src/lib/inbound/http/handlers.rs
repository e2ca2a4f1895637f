use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use super::validation::FieldError;
use crate::domain::errors::StoreError;
use crate::domain::principal::errors::AccessError;

pub mod appointments;
pub mod calendars;
pub mod children;
pub mod countries;
pub mod health_centers;
pub mod login;
pub mod tutors;
pub mod vaccinations;
pub mod vaccine_lots;
pub mod vaccines;

/// Success response: status code plus bare JSON payload.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Request body extractor that reports malformed JSON through the uniform
/// error payload instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Error taxonomy for the whole HTTP surface.
///
/// Handlers and middleware produce these; status codes and payload shapes
/// are assigned in `into_response` and nowhere else. 4xx bodies follow
/// `{error, data?}`; 500 bodies carry a generic message and the detail goes
/// to the log only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// One or more request fields failed validation.
    Validation(Vec<FieldError>),
    /// The request body or a path parameter could not be parsed at all.
    MalformedRequest(String),
    InvalidCredentials,
    TokenMissing,
    TokenInvalid(String),
    TokenExpired,
    AccountInactive,
    InsufficientPermissions,
    NotFound(String),
    /// Business-rule violation reported by a stored procedure; the message
    /// is passed through.
    Constraint(String),
    /// Anything unexpected. The payload is the internal detail, logged but
    /// never sent to the caller.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Validation failed", "data": fields })),
            )
                .into_response(),
            ApiError::MalformedRequest(message) => error_body(StatusCode::BAD_REQUEST, &message),
            ApiError::InvalidCredentials => {
                error_body(StatusCode::UNAUTHORIZED, "Invalid credentials")
            }
            ApiError::TokenMissing => {
                error_body(StatusCode::UNAUTHORIZED, "Missing Authorization header")
            }
            ApiError::TokenInvalid(_) => error_body(StatusCode::UNAUTHORIZED, "Invalid token"),
            ApiError::TokenExpired => error_body(StatusCode::UNAUTHORIZED, "Token expired"),
            ApiError::AccountInactive => {
                error_body(StatusCode::FORBIDDEN, "User account is inactive")
            }
            ApiError::InsufficientPermissions => {
                error_body(StatusCode::FORBIDDEN, "Insufficient permissions")
            }
            ApiError::NotFound(message) => error_body(StatusCode::NOT_FOUND, &message),
            ApiError::Constraint(message) => error_body(StatusCode::BAD_REQUEST, &message),
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "Request failed with internal error");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Path parameter parsed as a UUID; anything else is a malformed request,
/// not a 404.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::MalformedRequest(format!("{what} id must be a UUID")))
}

impl From<Vec<FieldError>> for ApiError {
    fn from(fields: Vec<FieldError>) -> Self {
        ApiError::Validation(fields)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(err.to_string()),
            StoreError::Constraint(message) => ApiError::Constraint(message),
            StoreError::Database(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::InvalidCredentials => ApiError::InvalidCredentials,
            AccessError::AccountInactive => ApiError::AccountInactive,
            AccessError::Token(e) => ApiError::Internal(e.to_string()),
            AccessError::Store(e) => ApiError::from(e),
        }
    }
}
