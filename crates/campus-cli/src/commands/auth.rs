use serde::Serialize;

use campus_auth::{AuthError, session, token_store};
use campus_config::CampusConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    username: String,
    token_source: Option<String>,
}

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    username: Option<String>,
    token_source: Option<String>,
    note: Option<String>,
}

#[derive(Serialize)]
struct AuthLogoutResponse {
    logged_out: bool,
}

pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &CampusConfig,
) -> anyhow::Result<()> {
    let base_url = config.api.trimmed_base_url();

    match action {
        AuthCommands::Login { username, password } => {
            let session = match session::login(base_url, username, password).await {
                Ok(session) => session,
                Err(AuthError::Api { status, message }) if status == 401 || status == 403 => {
                    anyhow::bail!("login rejected: {message} — check your username/password")
                }
                Err(error) => return Err(error.into()),
            };
            token_store::store(&session.token)?;
            output(
                &AuthLoginResponse {
                    authenticated: true,
                    username: session.username,
                    token_source: token_store::detect_token_source(),
                },
                flags.format,
            )
        }
        AuthCommands::Register { username, password } => {
            let session = match session::register(base_url, username, password).await {
                Ok(session) => session,
                Err(AuthError::Api { status, message }) if status == 409 => {
                    anyhow::bail!("registration rejected: {message} — pick another username")
                }
                Err(error) => return Err(error.into()),
            };
            token_store::store(&session.token)?;
            output(
                &AuthLoginResponse {
                    authenticated: true,
                    username: session.username,
                    token_source: token_store::detect_token_source(),
                },
                flags.format,
            )
        }
        AuthCommands::Status => {
            let status = match campus_auth::resolve_token() {
                None => AuthStatusResponse {
                    authenticated: false,
                    username: None,
                    token_source: None,
                    note: Some("no stored token — run `campus auth login`".into()),
                },
                Some(token) => match session::me(base_url, &token).await {
                    Ok(session) => AuthStatusResponse {
                        authenticated: true,
                        username: Some(session.username),
                        token_source: token_store::detect_token_source(),
                        note: None,
                    },
                    Err(error) => AuthStatusResponse {
                        authenticated: false,
                        username: None,
                        token_source: token_store::detect_token_source(),
                        note: Some(error.to_string()),
                    },
                },
            };
            output(&status, flags.format)
        }
        AuthCommands::Logout => {
            campus_auth::logout()?;
            output(&AuthLogoutResponse { logged_out: true }, flags.format)
        }
    }
}
