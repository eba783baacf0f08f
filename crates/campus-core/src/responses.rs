//! CLI response types returned as JSON by `campus` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `campus summary`, `campus student get`, and `campus ping`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Grade, Module, Registration, Student};

/// Per-student row of the summary view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StudentAverageRow {
    pub id: i64,
    pub name: String,
    pub user_name: String,
    /// `None` means no scored grades for this student.
    pub average: Option<f64>,
}

/// Per-module row of the summary view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ModuleAverageRow {
    pub id: i64,
    pub code: String,
    pub name: String,
    /// `None` means no scored grades for this module.
    pub average: Option<f64>,
}

/// Response from `campus summary`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SummaryResponse {
    pub students: usize,
    pub modules: usize,
    pub registrations: usize,
    pub grades: usize,
    /// Mean over all scored grades; `None` when nothing is scored.
    pub overall_average: Option<f64>,
    pub student_averages: Vec<StudentAverageRow>,
    pub module_averages: Vec<ModuleAverageRow>,
}

/// Response from `campus student get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StudentDetailResponse {
    pub student: Student,
    pub registrations: Vec<Registration>,
    pub grades: Vec<Grade>,
    pub average: Option<f64>,
}

/// Response from `campus module get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ModuleDetailResponse {
    pub module: Module,
    pub registrations: Vec<Registration>,
    pub grades: Vec<Grade>,
    pub average: Option<f64>,
}

/// Response from `campus ping`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PingResponse {
    pub base_url: String,
    pub reachable: bool,
}
