use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Student { action } => commands::student::handle(&action, ctx, flags).await,
        Commands::Module { action } => commands::module::handle(&action, ctx, flags).await,
        Commands::Registration { action } => {
            commands::registration::handle(&action, ctx, flags).await
        }
        Commands::Grade { action } => commands::grade::handle(&action, ctx, flags).await,
        Commands::Ops { action } => commands::operation::handle(&action, ctx, flags).await,
        Commands::Summary => commands::summary::handle(ctx, flags).await,
        Commands::Ping => commands::ping::handle(ctx, flags).await,
        Commands::Auth { .. } | Commands::Schema(_) => {
            unreachable!("auth/schema are pre-dispatched in main")
        }
    }
}
