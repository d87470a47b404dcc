//! Utensil records - kitchen equipment counted by the piece

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::labels::{display_name, UTENSIL_CATEGORIES};
use crate::core::profile::DomainProfile;
use crate::core::record::Record;
use crate::core::stock::{self, StockLevel};
use crate::entities::wire;

/// Operational status of a utensil
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UtensilStatus {
    #[default]
    Available,
    InUse,
    Maintenance,
    Broken,
    Cleaning,
    Lost,
}

impl UtensilStatus {
    /// Badge text (e.g. "In Use")
    pub fn label(&self) -> &'static str {
        match self {
            UtensilStatus::Available => "Available",
            UtensilStatus::InUse => "In Use",
            UtensilStatus::Maintenance => "Maintenance",
            UtensilStatus::Broken => "Broken",
            UtensilStatus::Cleaning => "Cleaning",
            UtensilStatus::Lost => "Lost",
        }
    }
}

impl std::fmt::Display for UtensilStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UtensilStatus::Available => "AVAILABLE",
            UtensilStatus::InUse => "IN_USE",
            UtensilStatus::Maintenance => "MAINTENANCE",
            UtensilStatus::Broken => "BROKEN",
            UtensilStatus::Cleaning => "CLEANING",
            UtensilStatus::Lost => "LOST",
        };
        write!(f, "{}", s)
    }
}

/// A piece of kitchen equipment. No expiry, but a maintenance schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utensil {
    /// Upstream identifier
    #[serde(alias = "_id", with = "wire::object_id")]
    pub id: String,

    pub name: String,

    /// Category code (e.g. "BAKING_TOOLS")
    #[serde(default)]
    pub category: String,

    /// Pieces on hand
    #[serde(default)]
    pub quantity: f64,

    /// Restock floor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stock_level: Option<f64>,

    /// Capacity; the HIGH threshold stands in when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stock_level: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,

    #[serde(default, with = "wire::date", skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,

    #[serde(default, with = "wire::date", skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<NaiveDate>,

    #[serde(default, with = "wire::date", skip_serializing_if = "Option::is_none")]
    pub next_maintenance: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    /// Where the utensil is kept (free text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default)]
    pub status: UtensilStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, with = "wire::datetime", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "wire::datetime", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Utensil {
    pub fn stock_level(&self, profile: &DomainProfile) -> StockLevel {
        profile.bands.classify(self.quantity)
    }

    pub fn fill_percentage(&self, profile: &DomainProfile) -> f64 {
        stock::fill_percentage(self.quantity, self.max_stock_level, profile.bands.high)
    }

    pub fn category_name(&self) -> &str {
        display_name(&self.category, UTENSIL_CATEGORIES)
    }

    /// Scheduled maintenance is due once its date arrives.
    pub fn maintenance_due(&self, today: NaiveDate) -> bool {
        self.next_maintenance.is_some_and(|date| date <= today)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity <= 0.0
    }

    /// At or below the restock floor; a single piece when the record
    /// has no floor of its own.
    pub fn is_low_stock(&self) -> bool {
        !self.is_out_of_stock() && self.quantity <= self.min_stock_level.unwrap_or(1.0)
    }
}

impl Record for Utensil {
    const RESOURCE: &'static str = "utensil";
    const DIR: &'static str = "pantry/utensils";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn created(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
