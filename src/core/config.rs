//! Configuration - stock threshold overrides layered over the built-ins
//!
//! Lookup order: the project's `.pantry/config.yaml`, then the user
//! config directory, then built-in defaults. The first file found wins
//! outright; files do not merge.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::profile::{BandOverrides, Domain, DomainProfile, ProfileError, Profiles};
use crate::core::project::Project;
use crate::yaml::{parse_yaml, YamlError};

/// Per-domain threshold overrides.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StockOverrides {
    #[serde(default, skip_serializing_if = "BandOverrides::is_empty")]
    pub flavors: BandOverrides,
    #[serde(default, skip_serializing_if = "BandOverrides::is_empty")]
    pub ingredients: BandOverrides,
    #[serde(default, skip_serializing_if = "BandOverrides::is_empty")]
    pub utensils: BandOverrides,
}

impl StockOverrides {
    pub fn is_empty(&self) -> bool {
        self.flavors.is_empty() && self.ingredients.is_empty() && self.utensils.is_empty()
    }
}

/// Project configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "StockOverrides::is_empty")]
    pub stock: StockOverrides,
}

impl Config {
    /// Load the effective config for a project.
    pub fn load(project: &Project) -> Result<Self, YamlError> {
        let project_path = project.config_path();
        if project_path.is_file() {
            return Self::load_file(&project_path);
        }
        if let Some(user_path) = Self::user_config_path() {
            if user_path.is_file() {
                return Self::load_file(&user_path);
            }
        }
        Ok(Self::default())
    }

    fn load_file(path: &Path) -> Result<Self, YamlError> {
        let content = std::fs::read_to_string(path)?;
        // The template written by `init` is all comments, which YAML
        // reads as a null document. Treat that as an empty config.
        let config: Option<Self> = parse_yaml(&content, &path.display().to_string())?;
        Ok(config.unwrap_or_default())
    }

    /// User-level config location (platform dependent)
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pantry")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Resolve all three domain profiles with overrides applied.
    ///
    /// Fails when an override leaves a domain's thresholds unordered.
    pub fn profiles(&self) -> Result<Profiles, ProfileError> {
        Ok(Profiles {
            flavors: DomainProfile::builtin(Domain::Flavors).with_overrides(&self.stock.flavors)?,
            ingredients: DomainProfile::builtin(Domain::Ingredients)
                .with_overrides(&self.stock.ingredients)?,
            utensils: DomainProfile::builtin(Domain::Utensils)
                .with_overrides(&self.stock.utensils)?,
        })
    }
}

/// Commented template written by `pantry init`.
pub const CONFIG_TEMPLATE: &str = "\
# Pantry project configuration.
#
# Uncomment a section to override the built-in stock thresholds or
# expiry warning windows for a domain. Thresholds must stay strictly
# descending: high > moderate > low.
#
# stock:
#   flavors:
#     high: 8
#     moderate: 4
#     low: 2
#     critical: 1
#     expiry_window_days: 14
#   ingredients:
#     high: 500
#     moderate: 200
#     low: 100
#     critical: 50
#     expiry_window_days: 7
#   utensils:
#     high: 500
#     moderate: 100
#     low: 90
";
