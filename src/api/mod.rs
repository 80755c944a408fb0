pub mod error;
pub mod leave_application;
