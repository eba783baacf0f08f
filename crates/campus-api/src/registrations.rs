//! `/registrations` resource client.

use reqwest::Method;
use serde::Serialize;

use campus_core::entities::Registration;

use crate::ApiClient;
use crate::error::ApiError;

/// Create/update body for a registration: bare entity references.
#[derive(Debug, Clone, Serialize)]
struct RegistrationBody {
    student: EntityRef,
    module: EntityRef,
}

#[derive(Debug, Clone, Serialize)]
struct EntityRef {
    id: i64,
}

impl ApiClient {
    /// Fetch all enrollment edges. `GET /registrations`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails or the backend
    /// returns a non-success status.
    pub async fn list_registrations(&self) -> Result<Vec<Registration>, ApiError> {
        self.get_collection("/registrations", "registrations").await
    }

    /// Enroll a student in a module. `POST /registrations`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or backend rejection
    /// (e.g., an unknown student or module id).
    pub async fn create_registration(
        &self,
        student_id: i64,
        module_id: i64,
    ) -> Result<Registration, ApiError> {
        let body = RegistrationBody {
            student: EntityRef { id: student_id },
            module: EntityRef { id: module_id },
        };
        self.send_entity(Method::POST, "/registrations", &body).await
    }

    /// Repoint an enrollment edge. `PUT /registrations/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or backend rejection.
    pub async fn update_registration(
        &self,
        id: i64,
        student_id: i64,
        module_id: i64,
    ) -> Result<Registration, ApiError> {
        let body = RegistrationBody {
            student: EntityRef { id: student_id },
            module: EntityRef { id: module_id },
        };
        self.send_entity(Method::PUT, &format!("/registrations/{id}"), &body)
            .await
    }

    /// Remove an enrollment edge. `DELETE /registrations/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or backend rejection.
    pub async fn delete_registration(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/registrations/{id}")).await
    }
}
