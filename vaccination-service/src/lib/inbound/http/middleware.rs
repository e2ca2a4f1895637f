use std::net::SocketAddr;

use auth::Role;
use auth::TokenError;
use axum::extract::ConnectInfo;
use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use super::router::AppState;
use crate::domain::principal::models::Principal;

/// Middleware that verifies the bearer token and attaches the decoded
/// principal to the request extensions.
///
/// Verification is pure (signature check plus timestamp comparison); no
/// handler runs for a request that fails here.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let peer = peer_addr(&req);

    let token = match bearer_token(&req) {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!(peer = %peer, "Authentication failed: no bearer token presented");
            return Err(err);
        }
    };

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::warn!(peer = %peer, reason = %e, "Authentication failed: token rejected");
        match e {
            TokenError::Expired => ApiError::TokenExpired,
            other => ApiError::TokenInvalid(other.to_string()),
        }
    })?;

    let principal = Principal {
        user_id: claims.sub,
        username: claims.username,
        role: claims.role,
    };

    tracing::info!(
        peer = %peer,
        username = %principal.username,
        role = %principal.role,
        "Request authenticated"
    );

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

/// Role gate for a route group.
///
/// Runs strictly after `authenticate`; a missing principal here means the
/// router is miswired, which is an internal error rather than a 401.
pub async fn authorize(allowed: &'static [Role], req: Request, next: Next) -> Response {
    let Some(principal) = req.extensions().get::<Principal>() else {
        tracing::error!("Authorization gate reached without an authenticated principal");
        return ApiError::Internal("authorization gate ran before authentication".to_string())
            .into_response();
    };

    if !allowed.contains(&principal.role) {
        tracing::warn!(
            username = %principal.username,
            role = %principal.role,
            "Request denied: role not permitted on this route"
        );
        return ApiError::InsufficientPermissions.into_response();
    }

    next.run(req).await
}

fn peer_addr(req: &Request) -> String {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn bearer_token(req: &Request) -> Result<&str, ApiError> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or(ApiError::TokenMissing)?;

    let value = header
        .to_str()
        .map_err(|_| ApiError::TokenInvalid("Authorization header is not valid UTF-8".to_string()))?;

    // Case-sensitive scheme, per the API contract
    value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::TokenInvalid("Expected: Bearer <token>".to_string()))
}
