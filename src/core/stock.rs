//! Stock level classification - threshold bands and fill percentages

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discrete stock level for an inventory record.
///
/// Ordered from worst to best so that `Ord` agrees with quantity:
/// a larger on-hand quantity never classifies to a lower level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockLevel {
    /// Below the low threshold
    Critical,
    /// At or above the low threshold
    Low,
    /// At or above the moderate threshold
    Moderate,
    /// At or above the high threshold
    High,
}

impl StockLevel {
    /// Badge text shown next to a record (e.g. "High Stock")
    pub fn badge_text(&self) -> &'static str {
        match self {
            StockLevel::High => "High Stock",
            StockLevel::Moderate => "Moderate Stock",
            StockLevel::Low => "Low Stock",
            StockLevel::Critical => "Critical Stock",
        }
    }

    /// Badge icon shown next to a record
    pub fn badge_icon(&self) -> &'static str {
        match self {
            StockLevel::High => "📊",
            StockLevel::Moderate => "⚖️",
            StockLevel::Low => "📉",
            StockLevel::Critical => "🚨",
        }
    }

    /// All levels, best first. Handy for summary rows.
    pub fn all() -> [StockLevel; 4] {
        [
            StockLevel::High,
            StockLevel::Moderate,
            StockLevel::Low,
            StockLevel::Critical,
        ]
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StockLevel::High => "HIGH",
            StockLevel::Moderate => "MODERATE",
            StockLevel::Low => "LOW",
            StockLevel::Critical => "CRITICAL",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StockLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HIGH" => Ok(StockLevel::High),
            "MODERATE" => Ok(StockLevel::Moderate),
            "LOW" => Ok(StockLevel::Low),
            "CRITICAL" => Ok(StockLevel::Critical),
            _ => Err(format!("unknown stock level: {}", s)),
        }
    }
}

/// Threshold bands for one inventory domain.
///
/// Classification walks the bands from best to worst and stops at the
/// first threshold the quantity meets. Anything below `low` is critical,
/// so `critical` is never consulted when classifying; it is kept because
/// upstream data carries it and reports may want to print it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockBands {
    /// Minimum quantity for HIGH
    pub high: f64,
    /// Minimum quantity for MODERATE
    pub moderate: f64,
    /// Minimum quantity for LOW
    pub low: f64,
    /// Informational floor for CRITICAL, if the domain defines one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<f64>,
}

impl StockBands {
    pub const fn new(high: f64, moderate: f64, low: f64) -> Self {
        Self {
            high,
            moderate,
            low,
            critical: None,
        }
    }

    pub const fn with_critical(high: f64, moderate: f64, low: f64, critical: f64) -> Self {
        Self {
            high,
            moderate,
            low,
            critical: Some(critical),
        }
    }

    /// Classify a quantity against these bands.
    ///
    /// Boundary values resolve upward: a quantity exactly equal to a
    /// threshold earns that threshold's level.
    pub fn classify(&self, quantity: f64) -> StockLevel {
        if quantity >= self.high {
            StockLevel::High
        } else if quantity >= self.moderate {
            StockLevel::Moderate
        } else if quantity >= self.low {
            StockLevel::Low
        } else {
            StockLevel::Critical
        }
    }

    /// Check that the bands descend strictly: high > moderate > low.
    ///
    /// Classification itself never fails on unordered bands, but an
    /// unordered table silently swallows buckets, so configuration
    /// loading rejects it up front.
    pub fn is_ordered(&self) -> bool {
        self.high > self.moderate && self.moderate > self.low
    }
}

/// Percentage of the maximum stock level currently on hand, in [0, 100].
///
/// `max_stock` is the record's own capacity when present and positive;
/// otherwise `fallback_max` (conventionally the domain's HIGH threshold)
/// stands in. When no positive denominator exists at all the fill is
/// defined as 0 rather than an error, since this feeds gauges that must
/// always render.
pub fn fill_percentage(quantity: f64, max_stock: Option<f64>, fallback_max: f64) -> f64 {
    let max = match max_stock {
        Some(m) if m > 0.0 => m,
        _ => fallback_max,
    };
    if !(max > 0.0) {
        return 0.0;
    }
    ((quantity / max) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAVOR_BANDS: StockBands = StockBands::with_critical(8.0, 4.0, 2.0, 1.0);
    const UTENSIL_BANDS: StockBands = StockBands::new(500.0, 100.0, 90.0);

    #[test]
    fn classify_boundaries_resolve_upward() {
        assert_eq!(FLAVOR_BANDS.classify(8.0), StockLevel::High);
        assert_eq!(FLAVOR_BANDS.classify(4.0), StockLevel::Moderate);
        assert_eq!(FLAVOR_BANDS.classify(2.0), StockLevel::Low);
    }

    #[test]
    fn classify_between_thresholds() {
        assert_eq!(FLAVOR_BANDS.classify(12.0), StockLevel::High);
        assert_eq!(FLAVOR_BANDS.classify(7.9), StockLevel::Moderate);
        assert_eq!(FLAVOR_BANDS.classify(3.0), StockLevel::Low);
        assert_eq!(FLAVOR_BANDS.classify(1.9), StockLevel::Critical);
        assert_eq!(FLAVOR_BANDS.classify(0.0), StockLevel::Critical);
    }

    #[test]
    fn classify_below_low_is_critical_even_without_critical_band() {
        // Utensils define no CRITICAL floor; below LOW still classifies
        // as critical.
        assert_eq!(UTENSIL_BANDS.classify(89.0), StockLevel::Critical);
        assert_eq!(UTENSIL_BANDS.classify(50.0), StockLevel::Critical);
        assert_eq!(UTENSIL_BANDS.classify(90.0), StockLevel::Low);
        assert_eq!(UTENSIL_BANDS.classify(100.0), StockLevel::Moderate);
        assert_eq!(UTENSIL_BANDS.classify(500.0), StockLevel::High);
    }

    #[test]
    fn classify_is_monotonic_in_quantity() {
        let mut prev = FLAVOR_BANDS.classify(0.0);
        for step in 1..=160 {
            let q = step as f64 * 0.1;
            let level = FLAVOR_BANDS.classify(q);
            assert!(level >= prev, "level dropped from {prev} to {level} at {q}");
            prev = level;
        }
    }

    #[test]
    fn classify_ignores_critical_band_value() {
        // The CRITICAL entry is informational; moving it never changes
        // the classification.
        let a = StockBands::with_critical(8.0, 4.0, 2.0, 1.0);
        let b = StockBands::with_critical(8.0, 4.0, 2.0, 1000.0);
        for q in [0.0, 1.0, 1.5, 3.0, 9.0] {
            assert_eq!(a.classify(q), b.classify(q));
        }
    }

    #[test]
    fn negative_quantity_is_critical() {
        assert_eq!(FLAVOR_BANDS.classify(-3.0), StockLevel::Critical);
    }

    #[test]
    fn level_ordering_runs_critical_to_high() {
        assert!(StockLevel::Critical < StockLevel::Low);
        assert!(StockLevel::Low < StockLevel::Moderate);
        assert!(StockLevel::Moderate < StockLevel::High);
    }

    #[test]
    fn level_round_trips_through_display() {
        for level in StockLevel::all() {
            let parsed: StockLevel = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
        assert!("overflowing".parse::<StockLevel>().is_err());
    }

    #[test]
    fn ordered_bands_check() {
        assert!(FLAVOR_BANDS.is_ordered());
        assert!(!StockBands::new(4.0, 8.0, 2.0).is_ordered());
        assert!(!StockBands::new(8.0, 4.0, 4.0).is_ordered());
    }

    #[test]
    fn fill_uses_record_max_when_positive() {
        assert_eq!(fill_percentage(5.0, Some(10.0), 8.0), 50.0);
        assert_eq!(fill_percentage(6.0, Some(8.0), 500.0), 75.0);
    }

    #[test]
    fn fill_falls_back_when_max_missing_or_zero() {
        // Absent and zero capacities both defer to the fallback.
        assert_eq!(fill_percentage(4.0, None, 8.0), 50.0);
        assert_eq!(fill_percentage(4.0, Some(0.0), 8.0), 50.0);
        assert_eq!(fill_percentage(4.0, Some(-10.0), 8.0), 50.0);
    }

    #[test]
    fn fill_clamps_to_hundred() {
        assert_eq!(fill_percentage(20.0, Some(10.0), 8.0), 100.0);
        assert_eq!(fill_percentage(9.0, None, 8.0), 100.0);
    }

    #[test]
    fn fill_is_zero_without_any_positive_max() {
        assert_eq!(fill_percentage(5.0, None, 0.0), 0.0);
        assert_eq!(fill_percentage(5.0, Some(0.0), -1.0), 0.0);
    }

    #[test]
    fn fill_floors_negative_quantity_at_zero() {
        assert_eq!(fill_percentage(-2.0, Some(10.0), 8.0), 0.0);
    }
}
