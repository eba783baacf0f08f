//! # campus-auth
//!
//! Bearer-token authentication for the Campus CLI.
//!
//! Provides the `/auth/login`, `/auth/register`, and `/auth/me` client
//! calls and token lifecycle management. Tokens are opaque strings issued
//! by the backend and stored locally (OS keychain with env/file
//! fallback); the transport layer receives the resolved token explicitly
//! at construction instead of reading ambient state.
//!
//! The backend historically also accepted a shared-password field on
//! write bodies; Campus uses the bearer-token scheme exclusively.

pub mod error;
pub mod session;
pub mod token_store;

pub use error::AuthError;
pub use session::AuthSession;

/// Resolve the best available auth token.
///
/// Priority: keyring → env var → file. Does not validate the token
/// against the backend (use [`session::me`] for that).
#[must_use]
pub fn resolve_token() -> Option<String> {
    token_store::load()
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns [`AuthError::TokenStore`] if the credentials file cannot be
/// removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}
