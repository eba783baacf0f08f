//! `/modules` resource client.

use reqwest::Method;

use campus_core::entities::Module;

use crate::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Fetch the module catalogue. `GET /modules`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails or the backend
    /// returns a non-success status.
    pub async fn list_modules(&self) -> Result<Vec<Module>, ApiError> {
        self.get_collection("/modules", "modules").await
    }

    /// Fetch one module by id. `GET /modules/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status,
    /// or an unexpected body shape.
    pub async fn get_module(&self, id: i64) -> Result<Module, ApiError> {
        self.get_entity(&format!("/modules/{id}")).await
    }

    /// Create a module. `POST /modules`; the body omits any id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or backend rejection.
    pub async fn create_module(&self, module: &Module) -> Result<Module, ApiError> {
        self.send_entity(Method::POST, "/modules", module).await
    }

    /// Replace a module. `PUT /modules/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or backend rejection.
    pub async fn update_module(&self, id: i64, module: &Module) -> Result<Module, ApiError> {
        self.send_entity(Method::PUT, &format!("/modules/{id}"), module)
            .await
    }

    /// Delete a module. `DELETE /modules/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or backend rejection.
    pub async fn delete_module(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/modules/{id}")).await
    }
}
