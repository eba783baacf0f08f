//! Whole-dataset snapshot fetch.

use campus_core::entities::{Grade, Module, Registration, Student};

use crate::ApiClient;
use crate::error::ApiError;

/// All four collections as fetched for a combined view.
///
/// A snapshot is a local, disposable copy: nothing in it is shared or
/// cached across command invocations.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub students: Vec<Student>,
    pub modules: Vec<Module>,
    pub registrations: Vec<Registration>,
    pub grades: Vec<Grade>,
}

impl ApiClient {
    /// Fetch students, modules, registrations, and grades concurrently.
    ///
    /// Fire all, await all: the snapshot materializes only once every
    /// collection has resolved. One failed fetch aborts the whole load
    /// with that error — partial data is never returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] any of the four fetches produced.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, ApiError> {
        let (students, modules, registrations, grades) = tokio::try_join!(
            self.list_students(),
            self.list_modules(),
            self.list_registrations(),
            self.list_grades(),
        )?;

        Ok(Snapshot {
            students,
            modules,
            registrations,
            grades,
        })
    }
}
