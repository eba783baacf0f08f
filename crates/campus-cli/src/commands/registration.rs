use campus_views::filter_by_query;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RegistrationCommands;
use crate::commands::shared::DeleteResponse;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &RegistrationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RegistrationCommands::List { search, limit } => {
            let registrations = ctx.api.list_registrations().await?;
            let mut view = filter_by_query(&registrations, search.as_deref().unwrap_or(""));
            view.truncate(flags.effective_limit(*limit));
            output(&view, flags.format)
        }
        RegistrationCommands::Create { student, module } => {
            let created = ctx.api.create_registration(*student, *module).await?;
            output(&created, flags.format)
        }
        RegistrationCommands::Update {
            id,
            student,
            module,
        } => {
            let updated = ctx.api.update_registration(*id, *student, *module).await?;
            output(&updated, flags.format)
        }
        RegistrationCommands::Delete { id } => {
            ctx.api.delete_registration(*id).await?;
            output(
                &DeleteResponse {
                    deleted: true,
                    id: *id,
                },
                flags.format,
            )
        }
    }
}
