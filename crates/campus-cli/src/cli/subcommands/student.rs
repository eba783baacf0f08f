use clap::Subcommand;

/// Student roster commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// List students.
    List {
        /// Free-text filter (name, username, email, id).
        #[arg(long)]
        search: Option<String>,
        /// Sort order: name, name-desc, id.
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get one student with registrations, grades, and average.
    Get { id: i64 },
    /// Create a student.
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        user_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        major: Option<String>,
        #[arg(long)]
        entry_year: Option<i32>,
        #[arg(long)]
        graduate_year: Option<i32>,
    },
    /// Update a student (unset fields keep their current value).
    Update {
        id: i64,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        user_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        major: Option<String>,
        #[arg(long)]
        entry_year: Option<i32>,
        #[arg(long)]
        graduate_year: Option<i32>,
    },
    /// Delete a student.
    Delete { id: i64 },
}
