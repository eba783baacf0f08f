//! `/students` resource client.

use reqwest::Method;

use campus_core::entities::Student;

use crate::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Fetch the full student roster. `GET /students`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails or the backend
    /// returns a non-success status.
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.get_collection("/students", "students").await
    }

    /// Fetch one student by id. `GET /students/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status
    /// (including 404 for an unknown id), or an unexpected body shape.
    pub async fn get_student(&self, id: i64) -> Result<Student, ApiError> {
        self.get_entity(&format!("/students/{id}")).await
    }

    /// Create a student. `POST /students`; the body omits any id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or backend rejection
    /// (e.g., a duplicate username or email).
    pub async fn create_student(&self, student: &Student) -> Result<Student, ApiError> {
        self.send_entity(Method::POST, "/students", student).await
    }

    /// Replace a student. `PUT /students/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or backend rejection.
    pub async fn update_student(&self, id: i64, student: &Student) -> Result<Student, ApiError> {
        self.send_entity(Method::PUT, &format!("/students/{id}"), student)
            .await
    }

    /// Delete a student. `DELETE /students/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or backend rejection.
    pub async fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/students/{id}")).await
    }
}
