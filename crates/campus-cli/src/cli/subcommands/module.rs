use clap::Subcommand;

/// Module catalogue commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ModuleCommands {
    /// List modules.
    List {
        /// Free-text filter (code, name, id).
        #[arg(long)]
        search: Option<String>,
        /// Sort order: code, code-desc, name, name-desc, id.
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get one module with registrations, grades, and average.
    Get { id: i64 },
    /// Create a module.
    Create {
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
        /// Mark the module mandatory (non-condonable).
        #[arg(long)]
        mnc: bool,
        #[arg(long)]
        department: Option<String>,
        /// Prerequisite module id.
        #[arg(long)]
        prerequisite: Option<i64>,
        #[arg(long)]
        required_year: Option<i32>,
        #[arg(long)]
        min_year: Option<i32>,
        #[arg(long)]
        max_year: Option<i32>,
    },
    /// Update a module (unset fields keep their current value).
    Update {
        id: i64,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        mnc: Option<bool>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        prerequisite: Option<i64>,
        #[arg(long)]
        required_year: Option<i32>,
        #[arg(long)]
        min_year: Option<i32>,
        #[arg(long)]
        max_year: Option<i32>,
    },
    /// Delete a module.
    Delete { id: i64 },
}
