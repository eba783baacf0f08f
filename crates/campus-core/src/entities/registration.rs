use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Module, Student};

/// An enrollment edge between one student and one module.
///
/// The backend treats (student, module) as conceptually unique; the
/// client does not deduplicate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Registration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<Module>,
}
