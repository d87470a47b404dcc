//! CLI command implementations

pub mod alerts;
pub mod completions;
pub mod dashboard;
pub mod employee;
pub mod flavor;
pub mod import;
pub mod ingredient;
pub mod init;
pub mod supplier;
pub mod utensil;
pub mod utils;
pub mod validate;
