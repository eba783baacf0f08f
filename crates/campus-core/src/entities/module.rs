use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A taught module. `mnc` is the backend's "mandatory, non-condonable"
/// flag; `prerequisite_module` is a self-reference by embedded snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Module {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    pub mnc: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_module: Option<Box<Module>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_year: Option<i32>,
}
