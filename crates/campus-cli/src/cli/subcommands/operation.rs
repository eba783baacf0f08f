use clap::Subcommand;

/// Audit-trail commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OpsCommands {
    /// List logged operations, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Undo a previously logged operation.
    Revert { id: i64 },
}
