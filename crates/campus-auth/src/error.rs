use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `campus auth login`")]
    NotAuthenticated,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the auth request; `message` is the response body
    /// text, or the status line when the body is empty.
    #[error("auth error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("token store error: {0}")]
    TokenStore(String),
}
