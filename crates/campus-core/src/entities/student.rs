use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A student record. `id` is absent until the backend persists it.
///
/// Username and email are expected unique by the backend; the client does
/// not enforce this itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Student {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduate_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuition_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_tuition_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_student: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
}

impl Student {
    /// Display name, `"first last"` with missing parts dropped.
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if !self.first_name.is_empty() {
            parts.push(self.first_name.as_str());
        }
        if !self.last_name.is_empty() {
            parts.push(self.last_name.as_str());
        }
        parts.join(" ")
    }
}
