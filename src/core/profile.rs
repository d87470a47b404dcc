//! Domain profiles - per-domain thresholds, expiry windows and measures

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::core::stock::StockBands;

/// Flavor jar thresholds
pub const FLAVOR_BANDS: StockBands = StockBands::with_critical(8.0, 4.0, 2.0, 1.0);
/// Ingredient quantity thresholds (base unit per record)
pub const INGREDIENT_BANDS: StockBands = StockBands::with_critical(500.0, 200.0, 100.0, 50.0);
/// Utensil piece-count thresholds; no CRITICAL floor is defined
pub const UTENSIL_BANDS: StockBands = StockBands::new(500.0, 100.0, 90.0);

/// Days ahead of expiry at which flavors start warning
pub const FLAVOR_EXPIRY_WINDOW: i64 = 14;
/// Days ahead of expiry at which ingredients start warning
pub const INGREDIENT_EXPIRY_WINDOW: i64 = 7;

/// Inventory domains that carry stock thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Flavors,
    Ingredients,
    Utensils,
}

impl Domain {
    pub fn all() -> [Domain; 3] {
        [Domain::Flavors, Domain::Ingredients, Domain::Utensils]
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Domain::Flavors => "flavors",
            Domain::Ingredients => "ingredients",
            Domain::Utensils => "utensils",
        };
        write!(f, "{}", s)
    }
}

/// Everything classification needs to know about one domain.
///
/// Profiles are value types handed to the classify/fill/expiry calls;
/// nothing in the core reads thresholds from anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DomainProfile {
    pub domain: Domain,
    pub bands: StockBands,
    /// Warning window for expiry alerts; domains without perishables
    /// track no window at all.
    pub expiry_window_days: Option<i64>,
    /// Default measure noun for quantities (records may carry their own
    /// unit, which wins when present).
    pub measure: &'static str,
}

impl DomainProfile {
    /// Built-in profile for a domain, matching the upstream tables.
    pub const fn builtin(domain: Domain) -> Self {
        match domain {
            Domain::Flavors => Self {
                domain,
                bands: FLAVOR_BANDS,
                expiry_window_days: Some(FLAVOR_EXPIRY_WINDOW),
                measure: "jars",
            },
            Domain::Ingredients => Self {
                domain,
                bands: INGREDIENT_BANDS,
                expiry_window_days: Some(INGREDIENT_EXPIRY_WINDOW),
                measure: "grams",
            },
            Domain::Utensils => Self {
                domain,
                bands: UTENSIL_BANDS,
                expiry_window_days: None,
                measure: "pcs",
            },
        }
    }

    /// Apply a partial override, then re-check band ordering.
    pub fn with_overrides(mut self, overrides: &BandOverrides) -> Result<Self, ProfileError> {
        if let Some(high) = overrides.high {
            self.bands.high = high;
        }
        if let Some(moderate) = overrides.moderate {
            self.bands.moderate = moderate;
        }
        if let Some(low) = overrides.low {
            self.bands.low = low;
        }
        if let Some(critical) = overrides.critical {
            self.bands.critical = Some(critical);
        }
        if let Some(days) = overrides.expiry_window_days {
            self.expiry_window_days = Some(days);
        }
        if !self.bands.is_ordered() {
            return Err(ProfileError::UnorderedBands {
                domain: self.domain,
                high: self.bands.high,
                moderate: self.bands.moderate,
                low: self.bands.low,
            });
        }
        if let Some(critical) = self.bands.critical {
            if critical >= self.bands.low {
                return Err(ProfileError::CriticalAboveLow {
                    domain: self.domain,
                    critical,
                    low: self.bands.low,
                });
            }
        }
        Ok(self)
    }
}

/// Resolved profiles for all three stocked domains, ready to hand to
/// classification calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Profiles {
    pub flavors: DomainProfile,
    pub ingredients: DomainProfile,
    pub utensils: DomainProfile,
}

impl Profiles {
    pub fn builtin() -> Self {
        Self {
            flavors: DomainProfile::builtin(Domain::Flavors),
            ingredients: DomainProfile::builtin(Domain::Ingredients),
            utensils: DomainProfile::builtin(Domain::Utensils),
        }
    }

    pub fn get(&self, domain: Domain) -> &DomainProfile {
        match domain {
            Domain::Flavors => &self.flavors,
            Domain::Ingredients => &self.ingredients,
            Domain::Utensils => &self.utensils,
        }
    }
}

/// Partial threshold override, usually read from project config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BandOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_window_days: Option<i64>,
}

impl BandOverrides {
    pub fn is_empty(&self) -> bool {
        self.high.is_none()
            && self.moderate.is_none()
            && self.low.is_none()
            && self.critical.is_none()
            && self.expiry_window_days.is_none()
    }
}

/// Errors raised while resolving a domain profile.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum ProfileError {
    #[error(
        "stock thresholds for {domain} are not descending: high={high}, moderate={moderate}, low={low}"
    )]
    #[diagnostic(
        code(pantry::profile::unordered),
        help("thresholds must satisfy high > moderate > low; fix the [stock.{domain}] overrides")
    )]
    UnorderedBands {
        domain: Domain,
        high: f64,
        moderate: f64,
        low: f64,
    },

    #[error("critical floor for {domain} is not below low: critical={critical}, low={low}")]
    #[diagnostic(
        code(pantry::profile::critical_floor),
        help("the critical floor is informational and must stay below the low threshold")
    )]
    CriticalAboveLow {
        domain: Domain,
        critical: f64,
        low: f64,
    },
}
