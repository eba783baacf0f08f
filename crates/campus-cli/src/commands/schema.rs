use schemars::schema_for;
use serde_json::Value;

use campus_core::entities::{Grade, Module, OperationLog, Registration, Student};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const ENTITY_NAMES: &[&str] = &["student", "module", "registration", "grade", "operation"];

fn schema_value(entity: &str) -> anyhow::Result<Value> {
    let schema = match entity {
        "student" => serde_json::to_value(schema_for!(Student)),
        "module" => serde_json::to_value(schema_for!(Module)),
        "registration" => serde_json::to_value(schema_for!(Registration)),
        "grade" => serde_json::to_value(schema_for!(Grade)),
        "operation" => serde_json::to_value(schema_for!(OperationLog)),
        other => anyhow::bail!(
            "unknown entity '{other}' (accepted: {})",
            ENTITY_NAMES.join(", ")
        ),
    };
    Ok(schema?)
}

pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    match args.entity.as_deref() {
        Some(entity) => {
            let schema = schema_value(&entity.to_lowercase())?;
            output(&schema, flags.format)
        }
        None => {
            let mut schemas = serde_json::Map::new();
            for name in ENTITY_NAMES {
                schemas.insert((*name).to_string(), schema_value(name)?);
            }
            output(&Value::Object(schemas), flags.format)
        }
    }
}
