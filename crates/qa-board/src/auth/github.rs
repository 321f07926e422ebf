//! GitHub OAuth login flow.
//!
//! Two handlers: `/auth/github` redirects the browser to GitHub's
//! authorize page, and `/auth/github/callback` exchanges the returned
//! code for an access token, fetches the profile, resolves or creates
//! the user, and redirects to the frontend with a freshly minted
//! session token as a path segment.
//!
//! Provider or store failures answer with an explicit error response;
//! the request is never left hanging.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::server::AppState;

/// Query parameters GitHub sends to the callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

/// Token exchange response from GitHub.
#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: Option<String>,
    error_description: Option<String>,
}

/// The subset of the GitHub user profile this service stores.
#[derive(Debug, Deserialize)]
struct GithubProfile {
    id: i64,
    login: String,
    name: Option<String>,
    html_url: String,
}

/// `GET /auth/github`
///
/// Redirect to GitHub's authorize page.
pub async fn login(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let mut authorize_url = url::Url::parse(&state.config.github_oauth_url)
        .map_err(|err| ApiError::internal(format!("bad provider URL: {err}")))?;
    authorize_url.set_path("/login/oauth/authorize");
    authorize_url
        .query_pairs_mut()
        .append_pair("client_id", &state.config.github_client_id)
        .append_pair("redirect_uri", &state.config.github_callback_url);

    Ok((StatusCode::FOUND, [("Location", authorize_url.to_string())]).into_response())
}

/// `GET /auth/github/callback`
///
/// Resolve the OAuth code to a user, mint a session token, and send the
/// browser back to the frontend with the token embedded in the path.
pub async fn callback(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
) -> ApiResult<Response> {
    let Some(code) = query.code else {
        return Err(ApiError::Provider("callback received without a code".into()));
    };

    let access_token = exchange_code(&state, &code).await?;
    let profile = fetch_profile(&state, &access_token).await?;

    // GitHub profiles may have no display name set; fall back to the login.
    let name = profile.name.unwrap_or_else(|| profile.login.clone());
    let user = state.users.find_or_create(profile.id, &name, &profile.html_url).await;

    let token = state.codec.issue(user.github_id)?;

    tracing::info!(github_id = user.github_id, "Login completed");

    let redirect = format!("{}/auth/{}", state.config.client_url, token);
    Ok((StatusCode::FOUND, [("Location", redirect)]).into_response())
}

/// Exchange the authorization code for an access token.
async fn exchange_code(state: &AppState, code: &str) -> ApiResult<String> {
    let response = state
        .http
        .post(format!("{}/login/oauth/access_token", state.config.github_oauth_url))
        .header("Accept", "application/json")
        .json(&serde_json::json!({
            "client_id": state.config.github_client_id,
            "client_secret": state.config.github_client_secret,
            "code": code,
        }))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ApiError::Provider(format!(
            "token exchange returned {}",
            response.status()
        )));
    }

    let body: AccessTokenResponse = response.json().await?;
    body.access_token.ok_or_else(|| {
        ApiError::Provider(format!(
            "token exchange rejected: {}",
            body.error_description.unwrap_or_else(|| "no error description".into())
        ))
    })
}

/// Fetch the authenticated user's profile.
async fn fetch_profile(state: &AppState, access_token: &str) -> ApiResult<GithubProfile> {
    let response = state
        .http
        .get(format!("{}/user", state.config.github_api_url))
        .header("Accept", "application/json")
        .header("Authorization", format!("Bearer {access_token}"))
        // GitHub's API requires a User-Agent on every request.
        .header("User-Agent", concat!("qa-board/", env!("CARGO_PKG_VERSION")))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ApiError::Provider(format!(
            "profile fetch returned {}",
            response.status()
        )));
    }

    Ok(response.json().await?)
}
