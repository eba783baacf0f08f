//! Per-student and per-module score averages.
//!
//! One scan of the grade list builds id → running sum/count tables for
//! students and modules; lookups afterwards are O(1). Grades with a
//! missing score or a missing student/module reference are skipped
//! entirely — they neither count as zero nor bias the average.

use std::collections::HashMap;

use campus_core::entities::{Grade, Module, Student};
use campus_core::responses::{ModuleAverageRow, StudentAverageRow};

/// Running sum and count for one entity id.
#[derive(Debug, Clone, Copy, Default)]
struct ScoreAcc {
    sum: f64,
    count: u32,
}

impl ScoreAcc {
    fn add(&mut self, score: f64) {
        self.sum += score;
        self.count += 1;
    }

    fn average(self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / f64::from(self.count))
        }
    }
}

/// Aggregated score averages derived from one grade list.
#[derive(Debug, Clone, Default)]
pub struct GradeAverages {
    by_student: HashMap<i64, ScoreAcc>,
    by_module: HashMap<i64, ScoreAcc>,
    overall: ScoreAcc,
}

impl GradeAverages {
    /// Build the lookup tables in a single pass over `grades`.
    #[must_use]
    pub fn from_grades(grades: &[Grade]) -> Self {
        let mut averages = Self::default();
        for grade in grades {
            let Some(score) = grade.score else { continue };
            let Some(student_id) = grade.student.as_ref().and_then(|s| s.id) else {
                continue;
            };
            let Some(module_id) = grade.module.as_ref().and_then(|m| m.id) else {
                continue;
            };
            averages.by_student.entry(student_id).or_default().add(score);
            averages.by_module.entry(module_id).or_default().add(score);
            averages.overall.add(score);
        }
        averages
    }

    /// Mean score for one student; `None` when no scored grades exist.
    ///
    /// The returned value is unrounded; rounding happens at display time
    /// via [`format_average`].
    #[must_use]
    pub fn student_average(&self, student_id: i64) -> Option<f64> {
        self.by_student
            .get(&student_id)
            .copied()
            .and_then(ScoreAcc::average)
    }

    /// Mean score for one module; `None` when no scored grades exist.
    #[must_use]
    pub fn module_average(&self, module_id: i64) -> Option<f64> {
        self.by_module
            .get(&module_id)
            .copied()
            .and_then(ScoreAcc::average)
    }

    /// Mean over every scored grade; `None` when nothing is scored.
    #[must_use]
    pub fn overall_average(&self) -> Option<f64> {
        self.overall.average()
    }
}

/// Display form of an average: one decimal place, `—` for no data.
#[must_use]
pub fn format_average(average: Option<f64>) -> String {
    average.map_or_else(|| String::from("—"), |avg| format!("{avg:.1}"))
}

/// Summary rows for the student roster, in roster order.
#[must_use]
pub fn student_average_rows(
    students: &[Student],
    averages: &GradeAverages,
) -> Vec<StudentAverageRow> {
    students
        .iter()
        .filter_map(|student| {
            let id = student.id?;
            Some(StudentAverageRow {
                id,
                name: student.full_name(),
                user_name: student.user_name.clone(),
                average: averages.student_average(id),
            })
        })
        .collect()
}

/// Summary rows for the module catalogue, in catalogue order.
#[must_use]
pub fn module_average_rows(
    modules: &[Module],
    averages: &GradeAverages,
) -> Vec<ModuleAverageRow> {
    modules
        .iter()
        .filter_map(|module| {
            let id = module.id?;
            Some(ModuleAverageRow {
                id,
                code: module.code.clone(),
                name: module.name.clone(),
                average: averages.module_average(id),
            })
        })
        .collect()
}

/// Version-keyed memo over [`GradeAverages`].
///
/// The caller supplies a version that changes whenever the source grade
/// list changes (a fetch counter, a generation number). Lookups with an
/// unchanged version reuse the previous scan.
#[derive(Debug, Default)]
pub struct AverageCache {
    entry: Option<(u64, GradeAverages)>,
}

impl AverageCache {
    #[must_use]
    pub const fn new() -> Self {
        Self { entry: None }
    }

    /// Return the averages for `version`, rescanning `grades` only when
    /// the version differs from the cached one.
    pub fn get_or_rebuild(&mut self, version: u64, grades: &[Grade]) -> &GradeAverages {
        let stale = !matches!(&self.entry, Some((cached, _)) if *cached == version);
        if stale {
            self.entry = Some((version, GradeAverages::from_grades(grades)));
        }
        let Some((_, averages)) = &self.entry else {
            unreachable!("entry populated above")
        };
        averages
    }
}
