use campus_core::entities::Student;
use campus_core::responses::StudentDetailResponse;
use campus_views::averages::GradeAverages;
use campus_views::detail::{grades_for_student, registrations_for_student};
use campus_views::derive_view;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::commands::shared::{DeleteResponse, parse_sort};
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &StudentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudentCommands::List {
            search,
            sort,
            limit,
        } => run_list(search.as_deref(), sort.as_deref(), *limit, ctx, flags).await,
        StudentCommands::Get { id } => run_get(*id, ctx, flags).await,
        StudentCommands::Create {
            first_name,
            last_name,
            user_name,
            email,
            major,
            entry_year,
            graduate_year,
        } => {
            let student = Student {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                user_name: user_name.clone(),
                email: email.clone(),
                major: major.clone(),
                entry_year: *entry_year,
                graduate_year: *graduate_year,
                ..Student::default()
            };
            let created = ctx.api.create_student(&student).await?;
            output(&created, flags.format)
        }
        StudentCommands::Update {
            id,
            first_name,
            last_name,
            user_name,
            email,
            major,
            entry_year,
            graduate_year,
        } => {
            let no_changes = first_name.is_none()
                && last_name.is_none()
                && user_name.is_none()
                && email.is_none()
                && major.is_none()
                && entry_year.is_none()
                && graduate_year.is_none();
            if no_changes {
                anyhow::bail!("student update: nothing to update — pass at least one field");
            }

            let mut student = ctx.api.get_student(*id).await?;
            if let Some(value) = first_name {
                student.first_name = value.clone();
            }
            if let Some(value) = last_name {
                student.last_name = value.clone();
            }
            if let Some(value) = user_name {
                student.user_name = value.clone();
            }
            if let Some(value) = email {
                student.email = value.clone();
            }
            if major.is_some() {
                student.major = major.clone();
            }
            if entry_year.is_some() {
                student.entry_year = *entry_year;
            }
            if graduate_year.is_some() {
                student.graduate_year = *graduate_year;
            }

            let updated = ctx.api.update_student(*id, &student).await?;
            output(&updated, flags.format)
        }
        StudentCommands::Delete { id } => {
            ctx.api.delete_student(*id).await?;
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
    let students = ctx.api.list_students().await?;

    let mut view = derive_view(&students, search.unwrap_or(""), sort);
    view.truncate(flags.effective_limit(limit));

    output(&view, flags.format)
}

async fn run_get(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // One page-load: all three fetches in flight together, one failure
    // aborts the whole view
    let (student, registrations, grades) = tokio::try_join!(
        ctx.api.get_student(id),
        ctx.api.list_registrations(),
        ctx.api.list_grades(),
    )?;

    let averages = GradeAverages::from_grades(&grades);
    let detail = StudentDetailResponse {
        registrations: registrations_for_student(&registrations, id),
        grades: grades_for_student(&grades, id),
        average: averages.student_average(id),
        student,
    };

    output(&detail, flags.format)
}
