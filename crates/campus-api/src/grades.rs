//! `/grades` resource client.

use reqwest::Method;
use serde::Serialize;

use campus_core::entities::Grade;

use crate::ApiClient;
use crate::error::ApiError;

/// Body for `POST /grades/upsert`.
///
/// The backend updates the existing grade for the (student, module) pair
/// or creates one; the client never needs to know which happened.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeUpsert {
    pub student_id: i64,
    pub module_id: i64,
    pub score: f64,
}

impl ApiClient {
    /// Fetch all recorded grades. `GET /grades`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails or the backend
    /// returns a non-success status.
    pub async fn list_grades(&self) -> Result<Vec<Grade>, ApiError> {
        self.get_collection("/grades", "grades").await
    }

    /// Create-or-update the grade for a (student, module) pair.
    /// `POST /grades/upsert`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or backend rejection
    /// (e.g., 422 when the score is out of range or the student is not
    /// registered for the module). The error message carries the
    /// backend's response body verbatim.
    pub async fn upsert_grade(&self, upsert: GradeUpsert) -> Result<Grade, ApiError> {
        self.send_entity(Method::POST, "/grades/upsert", &upsert)
            .await
    }

    /// Delete a grade. `DELETE /grades/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or backend rejection.
    pub async fn delete_grade(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/grades/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use campus_core::entities::Grade;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::GradeUpsert;
    use crate::hal::unwrap_typed;

    #[test]
    fn upsert_body_uses_camel_case_ids() {
        let body = serde_json::to_value(GradeUpsert {
            student_id: 1,
            module_id: 2,
            score: 88.0,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"studentId": 1, "moduleId": 2, "score": 88.0})
        );
    }

    #[test]
    fn parses_grades_with_null_scores() {
        let payload = json!([
            {"id": 5, "score": 88.0, "student": {"id": 1}, "module": {"id": 2, "code": "M1"}},
            {"id": 6, "score": null, "student": {"id": 2}, "module": {"id": 2, "code": "M1"}}
        ]);
        let grades: Vec<Grade> = unwrap_typed(&payload, Some("grades"));
        assert_eq!(grades.len(), 2);
        assert_eq!(grades[0].score, Some(88.0));
        assert!(grades[1].score.is_none());
    }
}
