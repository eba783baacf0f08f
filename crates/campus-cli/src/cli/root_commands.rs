use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, GradeCommands, ModuleCommands, OpsCommands, RegistrationCommands,
    StudentCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Student roster.
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Module catalogue.
    Module {
        #[command(subcommand)]
        action: ModuleCommands,
    },
    /// Enrollment edges between students and modules.
    Registration {
        #[command(subcommand)]
        action: RegistrationCommands,
    },
    /// Recorded scores.
    Grade {
        #[command(subcommand)]
        action: GradeCommands,
    },
    /// Audit trail.
    Ops {
        #[command(subcommand)]
        action: OpsCommands,
    },
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Combined dashboard: counts plus per-student and per-module averages.
    Summary,
    /// Probe backend reachability.
    Ping,
    /// Dump JSON Schemas for the entity types.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity to dump (student, module, registration, grade, operation);
    /// all of them when omitted.
    pub entity: Option<String>,
}
