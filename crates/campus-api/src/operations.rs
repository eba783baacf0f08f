//! `/operations` resource client (audit trail).

use reqwest::Method;

use campus_core::entities::OperationLog;

use crate::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Fetch the audit trail. `GET /operations`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails or the backend
    /// returns a non-success status.
    pub async fn list_operations(&self) -> Result<Vec<OperationLog>, ApiError> {
        self.get_collection("/operations", "operations").await
    }

    /// Undo a previously logged operation. `POST /operations/{id}/revert`.
    ///
    /// The revert is itself logged; the returned entry describes it. A
    /// REVERT entry cannot be reverted again — the backend rejects that.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or backend rejection.
    pub async fn revert_operation(&self, id: i64) -> Result<OperationLog, ApiError> {
        let path = format!("/operations/{id}/revert");
        let value = self
            .request(Method::POST, &path, None)
            .await?
            .ok_or_else(|| ApiError::Parse(format!("empty response from {path}")))?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }
}
