use campus_api::GradeUpsert;
use campus_views::derive_view;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GradeCommands;
use crate::commands::shared::{DeleteResponse, parse_sort};
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &GradeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GradeCommands::List {
            search,
            sort,
            limit,
        } => {
            let sort = parse_sort(sort.as_deref())?;
            let grades = ctx.api.list_grades().await?;

            let mut view = derive_view(&grades, search.as_deref().unwrap_or(""), sort);
            view.truncate(flags.effective_limit(*limit));

            output(&view, flags.format)
        }
        GradeCommands::Upsert {
            student,
            module,
            score,
        } => {
            // Local validation before any network round-trip
            if !(0.0..=100.0).contains(score) {
                anyhow::bail!("grade upsert: score must be between 0 and 100");
            }

            let grade = ctx
                .api
                .upsert_grade(GradeUpsert {
                    student_id: *student,
                    module_id: *module,
                    score: *score,
                })
                .await?;
            output(&grade, flags.format)
        }
        GradeCommands::Delete { id } => {
            ctx.api.delete_grade(*id).await?;
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
