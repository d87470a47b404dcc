//! Pantry: plain-text cafe inventory toolkit
//!
//! Classifies and reports milk-tea shop stock kept as plain YAML
//! records under version control, using the same thresholds and
//! vocabularies as the shop's online inventory.

pub mod cli;
pub mod core;
pub mod entities;
pub mod yaml;
