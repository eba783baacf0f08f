use campus_core::responses::SummaryResponse;
use campus_views::averages::{GradeAverages, module_average_rows, student_average_rows};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.api.fetch_snapshot().await?;
    let averages = GradeAverages::from_grades(&snapshot.grades);

    let summary = SummaryResponse {
        students: snapshot.students.len(),
        modules: snapshot.modules.len(),
        registrations: snapshot.registrations.len(),
        grades: snapshot.grades.len(),
        overall_average: averages.overall_average(),
        student_averages: student_average_rows(&snapshot.students, &averages),
        module_averages: module_average_rows(&snapshot.modules, &averages),
    };

    output(&summary, flags.format)
}
