//! Entity structs for the backend's domain objects.
//!
//! Each struct mirrors one REST resource. Registration and Grade carry
//! embedded snapshots of their related Student/Module (id + display
//! fields) rather than bare foreign keys; the view deriver relies on
//! those snapshots directly without a second fetch.

mod grade;
mod module;
mod operation;
mod registration;
mod student;

pub use grade::Grade;
pub use module::Module;
pub use operation::OperationLog;
pub use registration::Registration;
pub use student::Student;
