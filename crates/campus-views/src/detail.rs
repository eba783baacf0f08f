//! Detail-view joins: one entity's registrations and grades.
//!
//! Registration and Grade carry embedded snapshots of their student and
//! module, so these are plain in-memory filters over already-fetched
//! collections — no second fetch.

use campus_core::entities::{Grade, Registration};

/// Registrations belonging to one student.
#[must_use]
pub fn registrations_for_student(
    registrations: &[Registration],
    student_id: i64,
) -> Vec<Registration> {
    registrations
        .iter()
        .filter(|reg| reg.student.as_ref().and_then(|s| s.id) == Some(student_id))
        .cloned()
        .collect()
}

/// Registrations belonging to one module.
#[must_use]
pub fn registrations_for_module(
    registrations: &[Registration],
    module_id: i64,
) -> Vec<Registration> {
    registrations
        .iter()
        .filter(|reg| reg.module.as_ref().and_then(|m| m.id) == Some(module_id))
        .cloned()
        .collect()
}

/// Grades belonging to one student.
#[must_use]
pub fn grades_for_student(grades: &[Grade], student_id: i64) -> Vec<Grade> {
    grades
        .iter()
        .filter(|grade| grade.student.as_ref().and_then(|s| s.id) == Some(student_id))
        .cloned()
        .collect()
}

/// Grades belonging to one module.
#[must_use]
pub fn grades_for_module(grades: &[Grade], module_id: i64) -> Vec<Grade> {
    grades
        .iter()
        .filter(|grade| grade.module.as_ref().and_then(|m| m.id) == Some(module_id))
        .cloned()
        .collect()
}
