//! Request execution and response decoding.
//!
//! Centralizes the status-code and body contract so resource modules stay
//! focused on endpoint paths and payload mapping:
//! - 204 → `None`
//! - other 2xx with a JSON content type → parsed `Value`
//! - other 2xx without one → the raw body text as a string value
//! - non-2xx → [`ApiError::Api`] carrying the body text (or the status
//!   line if the body is empty)
//!
//! There are no retries and no backoff; callers treat the returned error
//! as the sole failure channel.

use reqwest::Method;
use serde_json::Value;

use crate::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Issue a request against the backend.
    ///
    /// Default usage is GET with no body; non-GET methods serialize
    /// `body` as JSON with `Content-Type: application/json`. The bearer
    /// token is attached when the client holds one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the transport fails or the backend
    /// responds with a non-2xx status.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let mut req = self.http.request(method, &url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }
        read_response(req.send().await?).await
    }

    /// GET `path` and return the decoded body.
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn get(&self, path: &str) -> Result<Option<Value>, ApiError> {
        self.request(Method::GET, path, None).await
    }

    /// GET `path` and deserialize the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] on an empty body or a shape mismatch,
    /// in addition to the [`Self::request`] failure modes.
    pub(crate) async fn get_entity<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let value = self
            .get(path)
            .await?
            .ok_or_else(|| ApiError::Parse(format!("empty response from {path}")))?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Send `body` with `method` to `path` and deserialize the response.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_entity`].
    pub(crate) async fn send_entity<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Parse(e.to_string()))?;
        let value = self
            .request(method, path, Some(&body))
            .await?
            .ok_or_else(|| ApiError::Parse(format!("empty response from {path}")))?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// DELETE `path`, expecting an empty (204) response.
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Fetch a collection endpoint and normalize it into typed entities.
    ///
    /// The response may be a bare array or a HAL `_embedded` wrapper;
    /// `key_hint` names the embedded key this resource usually uses.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] only for transport failures; shape surprises
    /// degrade to an empty list in the normalizer.
    pub(crate) async fn get_collection<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        key_hint: &str,
    ) -> Result<Vec<T>, ApiError> {
        let payload = self.get(path).await?.unwrap_or(Value::Null);
        Ok(crate::hal::unwrap_typed(&payload, Some(key_hint)))
    }
}

/// Decode a response per the transport contract.
pub(crate) async fn read_response(resp: reqwest::Response) -> Result<Option<Value>, ApiError> {
    let status = resp.status();

    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        let message = if message.is_empty() {
            status.to_string()
        } else {
            message
        };
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    if status == reqwest::StatusCode::NO_CONTENT {
        return Ok(None);
    }

    if is_json(&resp) {
        return Ok(Some(resp.json::<Value>().await?));
    }

    let text = resp.text().await?;
    if text.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Value::String(text)))
    }
}

fn is_json(resp: &reqwest::Response) -> bool {
    resp.headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("json"))
}
