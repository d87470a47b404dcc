//! Flavor records - milktea flavors tracked by the jar

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::expiry::{self, ExpiryStatus};
use crate::core::labels::{display_name, FLAVOR_CATEGORIES};
use crate::core::profile::DomainProfile;
use crate::core::record::Record;
use crate::core::stock::{self, StockLevel};
use crate::entities::wire;

/// Lifecycle status of a flavor
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlavorStatus {
    #[default]
    Active,
    Inactive,
    Discontinued,
    Seasonal,
}

impl std::fmt::Display for FlavorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FlavorStatus::Active => "ACTIVE",
            FlavorStatus::Inactive => "INACTIVE",
            FlavorStatus::Discontinued => "DISCONTINUED",
            FlavorStatus::Seasonal => "SEASONAL",
        };
        write!(f, "{}", s)
    }
}

/// A milktea flavor kept in sealed jars.
///
/// `jars` is the sealed jar count and drives stock classification;
/// `quantity` is the looser total the restock checks also consult.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flavor {
    /// Upstream identifier
    #[serde(alias = "_id", with = "wire::object_id")]
    pub id: String,

    /// Flavor name (e.g. "Wintermelon")
    pub name: String,

    /// Category code (e.g. "CLASSIC_FLAVORS")
    #[serde(default)]
    pub category: String,

    /// Sealed jars on hand
    #[serde(default)]
    pub jars: f64,

    /// Total quantity across open and sealed stock
    #[serde(default)]
    pub quantity: f64,

    /// Restock floor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stock_level: Option<f64>,

    /// Shelf capacity; the HIGH threshold stands in when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stock_level: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_jar: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,

    #[serde(default, with = "wire::date", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,

    /// Storage location code (e.g. "SHELF_STABLE")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,

    #[serde(default)]
    pub status: FlavorStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, with = "wire::datetime", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "wire::datetime", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Flavor {
    /// Stock level of the jar count under the given profile
    pub fn stock_level(&self, profile: &DomainProfile) -> StockLevel {
        profile.bands.classify(self.jars)
    }

    /// Fill percentage against this record's capacity
    pub fn fill_percentage(&self, profile: &DomainProfile) -> f64 {
        stock::fill_percentage(self.jars, self.max_stock_level, profile.bands.high)
    }

    /// Expiry state as of `today`
    pub fn expiry_status(&self, today: NaiveDate, profile: &DomainProfile) -> ExpiryStatus {
        match profile.expiry_window_days {
            Some(window) => expiry::expiry_status(self.expiry_date, today, window),
            None => ExpiryStatus::None,
        }
    }

    /// Category display name, falling back to the raw code
    pub fn category_name(&self) -> &str {
        display_name(&self.category, FLAVOR_CATEGORIES)
    }

    /// Either count at zero means nothing left to serve.
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity <= 0.0 || self.jars <= 0.0
    }

    /// At or below the restock floor (default 1), or down to the last
    /// sealed jar.
    pub fn is_low_stock(&self) -> bool {
        !self.is_out_of_stock()
            && (self.quantity <= self.min_stock_level.unwrap_or(1.0) || self.jars <= 1.0)
    }
}

impl Record for Flavor {
    const RESOURCE: &'static str = "flavor";
    const DIR: &'static str = "pantry/flavors";

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
