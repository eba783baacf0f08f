use crate::cli::GlobalFlags;
use crate::cli::subcommands::OpsCommands;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &OpsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OpsCommands::List { limit } => {
            let mut operations = ctx.api.list_operations().await?;
            operations.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            operations.truncate(flags.effective_limit(*limit));
            output(&operations, flags.format)
        }
        OpsCommands::Revert { id } => {
            let logged = ctx.api.revert_operation(*id).await?;
            output(&logged, flags.format)
        }
    }
}
