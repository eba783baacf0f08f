pub mod auth;
pub mod dispatch;
pub mod grade;
pub mod module;
pub mod operation;
pub mod ping;
pub mod registration;
pub mod schema;
pub mod shared;
pub mod student;
pub mod summary;
