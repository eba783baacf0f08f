use clap::Subcommand;

/// Grade commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GradeCommands {
    /// List grades.
    List {
        /// Free-text filter (student, module code, id).
        #[arg(long)]
        search: Option<String>,
        /// Sort order: score, score-desc, name, code, id.
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create-or-update the grade for a (student, module) pair.
    Upsert {
        /// Student id.
        #[arg(long)]
        student: i64,
        /// Module id.
        #[arg(long)]
        module: i64,
        /// Score, 0-100.
        #[arg(long)]
        score: f64,
    },
    /// Delete a grade.
    Delete { id: i64 },
}
