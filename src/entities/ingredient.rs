//! Ingredient records - baking and beverage stock in per-record units

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::expiry::{self, ExpiryStatus};
use crate::core::labels::{display_name, INGREDIENT_CATEGORIES};
use crate::core::profile::DomainProfile;
use crate::core::record::Record;
use crate::core::stock::{self, StockLevel};
use crate::entities::wire;

/// Lifecycle status of an ingredient
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IngredientStatus {
    #[default]
    Active,
    Inactive,
    Expired,
    NeedsOrder,
}

impl std::fmt::Display for IngredientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IngredientStatus::Active => "ACTIVE",
            IngredientStatus::Inactive => "INACTIVE",
            IngredientStatus::Expired => "EXPIRED",
            IngredientStatus::NeedsOrder => "NEEDS_ORDER",
        };
        write!(f, "{}", s)
    }
}

fn default_unit() -> String {
    "grams".to_string()
}

/// A raw ingredient measured in its own unit (grams, liters, pieces...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Upstream identifier
    #[serde(alias = "_id", with = "wire::object_id")]
    pub id: String,

    pub name: String,

    /// Category code (e.g. "DAIRY_EGGS")
    #[serde(default)]
    pub category: String,

    /// On-hand quantity in `unit`
    #[serde(default)]
    pub quantity: f64,

    /// Measure the quantity is counted in
    #[serde(default = "default_unit")]
    pub unit: String,

    /// Restock floor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stock_level: Option<f64>,

    /// Storage capacity; the HIGH threshold stands in when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stock_level: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_unit: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,

    #[serde(default, with = "wire::date", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,

    /// Storage location code (e.g. "DRY_STORAGE")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,

    #[serde(default)]
    pub status: IngredientStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, with = "wire::datetime", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "wire::datetime", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Ingredient {
    pub fn stock_level(&self, profile: &DomainProfile) -> StockLevel {
        profile.bands.classify(self.quantity)
    }

    pub fn fill_percentage(&self, profile: &DomainProfile) -> f64 {
        stock::fill_percentage(self.quantity, self.max_stock_level, profile.bands.high)
    }

    pub fn expiry_status(&self, today: NaiveDate, profile: &DomainProfile) -> ExpiryStatus {
        match profile.expiry_window_days {
            Some(window) => expiry::expiry_status(self.expiry_date, today, window),
            None => ExpiryStatus::None,
        }
    }

    pub fn category_name(&self) -> &str {
        display_name(&self.category, INGREDIENT_CATEGORIES)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity <= 0.0
    }

    /// At or below the restock floor; 100 units when the record has
    /// no floor of its own.
    pub fn is_low_stock(&self) -> bool {
        !self.is_out_of_stock() && self.quantity <= self.min_stock_level.unwrap_or(100.0)
    }
}

impl Record for Ingredient {
    const RESOURCE: &'static str = "ingredient";
    const DIR: &'static str = "pantry/ingredients";

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::Domain;

    fn profile() -> DomainProfile {
        DomainProfile::builtin(Domain::Ingredients)
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Ingredient {
        serde_yml::from_str(
            r#"
id: 664f11bb34
name: Tapioca Pearls
category: TOPPINGS
quantity: 250
unit: grams
minStockLevel: 100
maxStockLevel: 1000
expiryDate: 2025-06-14
"#,
        )
        .unwrap()
    }

    #[test]
    fn unit_defaults_to_grams() {
        let i: Ingredient = serde_yml::from_str("id: x\nname: Brown Sugar\n").unwrap();
        assert_eq!(i.unit, "grams");
    }

    #[test]
    fn quantity_classifies_against_ingredient_bands() {
        let mut i = sample();
        assert_eq!(i.stock_level(&profile()), StockLevel::Moderate);
        i.quantity = 150.0;
        assert_eq!(i.stock_level(&profile()), StockLevel::Low);
        i.quantity = 99.0;
        assert_eq!(i.stock_level(&profile()), StockLevel::Critical);
        i.quantity = 500.0;
        assert_eq!(i.stock_level(&profile()), StockLevel::High);
    }

    #[test]
    fn fill_against_record_capacity() {
        assert_eq!(sample().fill_percentage(&profile()), 25.0);
    }

    #[test]
    fn expiry_uses_seven_day_window() {
        let i = sample();
        assert_eq!(
            i.expiry_status(d("2025-06-07"), &profile()),
            ExpiryStatus::ExpiresSoon
        );
        assert_eq!(i.expiry_status(d("2025-06-06"), &profile()), ExpiryStatus::None);
        assert_eq!(
            i.expiry_status(d("2025-06-15"), &profile()),
            ExpiryStatus::Expired
        );
    }

    #[test]
    fn low_stock_floor_defaults_to_hundred() {
        let mut i = sample();
        i.min_stock_level = None;
        i.quantity = 100.0;
        assert!(i.is_low_stock());
        i.quantity = 101.0;
        assert!(!i.is_low_stock());
        i.quantity = 0.0;
        assert!(i.is_out_of_stock());
        assert!(!i.is_low_stock());
    }

    #[test]
    fn category_label() {
        assert_eq!(sample().category_name(), "Toppings");
    }
}
