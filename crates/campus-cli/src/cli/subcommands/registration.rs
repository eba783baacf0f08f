use clap::Subcommand;

/// Enrollment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RegistrationCommands {
    /// List registrations.
    List {
        /// Free-text filter (student, module code, id).
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Enroll a student in a module.
    Create {
        /// Student id.
        #[arg(long)]
        student: i64,
        /// Module id.
        #[arg(long)]
        module: i64,
    },
    /// Repoint an enrollment edge.
    Update {
        id: i64,
        #[arg(long)]
        student: i64,
        #[arg(long)]
        module: i64,
    },
    /// Remove an enrollment edge.
    Delete { id: i64 },
}
