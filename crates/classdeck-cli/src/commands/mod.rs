pub mod assignments;
pub mod auth_cmd;
pub mod common;
pub mod completions;
pub mod config;
pub mod courses;
pub mod enroll;
pub mod notifications;
pub mod reports;
pub mod resources;
