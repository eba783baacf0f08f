//! `/auth/*` client calls.
//!
//! The backend issues opaque bearer tokens on login/register and
//! validates them on `/auth/me`. These calls sit outside the main
//! transport layer: they run before a token exists and never attach one
//! except where noted.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::AuthError;

/// Issued credentials: the account username and its bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub username: String,
    pub token: String,
}

#[derive(Serialize)]
struct AuthRequest<'a> {
    username: &'a str,
    password: &'a str,
}

fn http_client() -> Result<reqwest::Client, AuthError> {
    reqwest::Client::builder()
        .user_agent("campus/0.1")
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(AuthError::from)
}

async fn read_session(resp: reqwest::Response) -> Result<AuthSession, AuthError> {
    let status = resp.status();
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        let message = if message.is_empty() {
            status.to_string()
        } else {
            message
        };
        return Err(AuthError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp.json::<AuthSession>().await?)
}

/// Log in an existing account. `POST /auth/login`.
///
/// # Errors
///
/// Returns [`AuthError`] if the request fails or the backend rejects the
/// credentials; the error message carries the backend's response body.
pub async fn login(base_url: &str, username: &str, password: &str) -> Result<AuthSession, AuthError> {
    let url = format!("{}/auth/login", base_url.trim_end_matches('/'));
    let resp = http_client()?
        .post(&url)
        .json(&AuthRequest { username, password })
        .send()
        .await?;
    read_session(resp).await
}

/// Register a new account. `POST /auth/register`.
///
/// # Errors
///
/// Returns [`AuthError`] if the request fails or the backend rejects the
/// registration (e.g., a taken username).
pub async fn register(
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<AuthSession, AuthError> {
    let url = format!("{}/auth/register", base_url.trim_end_matches('/'));
    let resp = http_client()?
        .post(&url)
        .json(&AuthRequest { username, password })
        .send()
        .await?;
    read_session(resp).await
}

/// Validate a stored token against the backend. `GET /auth/me`.
///
/// # Errors
///
/// Returns [`AuthError::Api`] when the token is unknown or expired, or
/// [`AuthError::Http`] on transport failure.
pub async fn me(base_url: &str, token: &str) -> Result<AuthSession, AuthError> {
    let url = format!("{}/auth/me", base_url.trim_end_matches('/'));
    let resp = http_client()?
        .get(&url)
        .bearer_auth(token)
        .send()
        .await?;
    read_session(resp).await
}
