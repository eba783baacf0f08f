mod auth;
mod grade;
mod module;
mod operation;
mod registration;
mod student;

pub use auth::AuthCommands;
pub use grade::GradeCommands;
pub use module::ModuleCommands;
pub use operation::OpsCommands;
pub use registration::RegistrationCommands;
pub use student::StudentCommands;
