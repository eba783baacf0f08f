use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Module, Student};

/// A recorded score for one (student, module) pair.
///
/// Upsert semantics live server-side: submitting a (student, module,
/// score) triple updates the existing grade for that pair or creates one.
/// A `None` score means "recorded but unscored" and is excluded from all
/// averages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Grade {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<Module>,
}
