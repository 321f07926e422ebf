//! Bearer-token extractor for protected routes.

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::error::ApiError;
use crate::models::User;
use crate::server::AppState;

/// The authenticated caller, resolved from the `Authorization` header.
///
/// Every rejection path (missing header, bad scheme, failed
/// verification, unknown identity) produces the identical
/// `401 {"user": null}` response; the reason only appears in logs.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(header::AUTHORIZATION) else {
            tracing::debug!("Missing Authorization header");
            return Err(ApiError::Unauthenticated);
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| {
                tracing::debug!("Authorization header is not a bearer token");
                ApiError::Unauthenticated
            })?;

        let github_id = state.codec.verify(token).ok_or(ApiError::Unauthenticated)?;

        let Some(user) = state.users.find_by_github_id(github_id).await else {
            tracing::debug!(github_id, "Token holder has no stored user");
            return Err(ApiError::Unauthenticated);
        };

        Ok(Self(user))
    }
}
