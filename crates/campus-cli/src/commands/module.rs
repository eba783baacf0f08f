use campus_core::entities::Module;
use campus_core::responses::ModuleDetailResponse;
use campus_views::averages::GradeAverages;
use campus_views::detail::{grades_for_module, registrations_for_module};
use campus_views::derive_view;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ModuleCommands;
use crate::commands::shared::{DeleteResponse, parse_sort};
use crate::context::AppContext;
use crate::output::output;

fn prerequisite_ref(id: Option<i64>) -> Option<Box<Module>> {
    id.map(|id| {
        Box::new(Module {
            id: Some(id),
            ..Module::default()
        })
    })
}

pub async fn handle(
    action: &ModuleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ModuleCommands::List {
            search,
            sort,
            limit,
        } => run_list(search.as_deref(), sort.as_deref(), *limit, ctx, flags).await,
        ModuleCommands::Get { id } => run_get(*id, ctx, flags).await,
        ModuleCommands::Create {
            code,
            name,
            mnc,
            department,
            prerequisite,
            required_year,
            min_year,
            max_year,
        } => {
            let module = Module {
                code: code.clone(),
                name: name.clone(),
                mnc: *mnc,
                department: department.clone(),
                prerequisite_module: prerequisite_ref(*prerequisite),
                required_year: *required_year,
                min_year: *min_year,
                max_year: *max_year,
                ..Module::default()
            };
            let created = ctx.api.create_module(&module).await?;
            output(&created, flags.format)
        }
        ModuleCommands::Update {
            id,
            code,
            name,
            mnc,
            department,
            prerequisite,
            required_year,
            min_year,
            max_year,
        } => {
            let no_changes = code.is_none()
                && name.is_none()
                && mnc.is_none()
                && department.is_none()
                && prerequisite.is_none()
                && required_year.is_none()
                && min_year.is_none()
                && max_year.is_none();
            if no_changes {
                anyhow::bail!("module update: nothing to update — pass at least one field");
            }

            let mut module = ctx.api.get_module(*id).await?;
            if let Some(value) = code {
                module.code = value.clone();
            }
            if let Some(value) = name {
                module.name = value.clone();
            }
            if let Some(value) = mnc {
                module.mnc = *value;
            }
            if department.is_some() {
                module.department = department.clone();
            }
            if prerequisite.is_some() {
                module.prerequisite_module = prerequisite_ref(*prerequisite);
            }
            if required_year.is_some() {
                module.required_year = *required_year;
            }
            if min_year.is_some() {
                module.min_year = *min_year;
            }
            if max_year.is_some() {
                module.max_year = *max_year;
            }

            let updated = ctx.api.update_module(*id, &module).await?;
            output(&updated, flags.format)
        }
        ModuleCommands::Delete { id } => {
            ctx.api.delete_module(*id).await?;
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

async fn run_list(
    search: Option<&str>,
    sort: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let sort = parse_sort(sort)?;
    let modules = ctx.api.list_modules().await?;

    let mut view = derive_view(&modules, search.unwrap_or(""), sort);
    view.truncate(flags.effective_limit(limit));

    output(&view, flags.format)
}

async fn run_get(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (module, registrations, grades) = tokio::try_join!(
        ctx.api.get_module(id),
        ctx.api.list_registrations(),
        ctx.api.list_grades(),
    )?;

    let averages = GradeAverages::from_grades(&grades);
    let detail = ModuleDetailResponse {
        registrations: registrations_for_module(&registrations, id),
        grades: grades_for_module(&grades, id),
        average: averages.module_average(id),
        module,
    };

    output(&detail, flags.format)
}
