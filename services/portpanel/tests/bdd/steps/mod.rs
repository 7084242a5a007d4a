//! BDD step definitions for portpanel

pub mod command_steps;
pub mod log_steps;
pub mod status_steps;
