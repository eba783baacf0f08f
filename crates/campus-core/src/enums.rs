//! Operation-log enums.
//!
//! The backend serializes both enums as uppercase strings on the wire
//! (`"CREATE"`, `"STUDENT"`, ...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// OperationType
// ---------------------------------------------------------------------------

/// Kind of write recorded in the operation log.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
    #[default]
    Create,
    Update,
    Delete,
    Revert,
}

impl OperationType {
    /// Wire representation of the variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Revert => "REVERT",
        }
    }

    /// Whether an operation of this kind may be reverted.
    ///
    /// REVERT entries are themselves logged but are terminal.
    #[must_use]
    pub const fn is_revertible(self) -> bool {
        !matches!(self, Self::Revert)
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OperationEntityType
// ---------------------------------------------------------------------------

/// Entity a logged operation acted on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationEntityType {
    #[default]
    Student,
    Module,
    Registration,
    Grade,
}

impl OperationEntityType {
    /// Wire representation of the variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Module => "MODULE",
            Self::Registration => "REGISTRATION",
            Self::Grade => "GRADE",
        }
    }
}

impl fmt::Display for OperationEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
