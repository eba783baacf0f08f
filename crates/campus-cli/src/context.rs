//! Per-invocation application context.

use campus_api::ApiClient;
use campus_config::CampusConfig;

/// Everything a command handler needs: the loaded config and an API
/// client already carrying the stored bearer token (if any).
pub struct AppContext {
    pub config: CampusConfig,
    pub api: ApiClient,
}

impl AppContext {
    /// Build the context from loaded configuration.
    ///
    /// The stored token is resolved once, here, and handed to the client
    /// explicitly — command handlers never touch ambient auth state.
    #[must_use]
    pub fn init(config: &CampusConfig) -> Self {
        let token = campus_auth::resolve_token();
        if token.is_none() {
            tracing::debug!("no stored token; requests proceed unauthenticated");
        }
        let api = ApiClient::new(
            config.api.trimmed_base_url(),
            token,
            config.api.timeout_secs,
        );
        Self {
            config: config.clone(),
            api,
        }
    }
}
