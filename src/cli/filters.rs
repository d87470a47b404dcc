//! Unified filter types for CLI commands
//!
//! List commands share the same ALL-or-match predicate: an unset (or
//! explicit "all") filter passes everything, anything else must match
//! the record's value exactly.

use clap::ValueEnum;

use crate::core::stock::StockLevel;

/// Stock level filter for list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum StockLevelFilter {
    /// HIGH only
    High,
    /// MODERATE only
    Moderate,
    /// LOW only
    Low,
    /// CRITICAL only
    Critical,
    /// Every level - default
    #[default]
    All,
}

impl StockLevelFilter {
    /// Check if a classified level passes this filter
    pub fn matches(&self, level: StockLevel) -> bool {
        match self {
            StockLevelFilter::High => level == StockLevel::High,
            StockLevelFilter::Moderate => level == StockLevel::Moderate,
            StockLevelFilter::Low => level == StockLevel::Low,
            StockLevelFilter::Critical => level == StockLevel::Critical,
            StockLevelFilter::All => true,
        }
    }
}

impl std::fmt::Display for StockLevelFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockLevelFilter::High => write!(f, "high"),
            StockLevelFilter::Moderate => write!(f, "moderate"),
            StockLevelFilter::Low => write!(f, "low"),
            StockLevelFilter::Critical => write!(f, "critical"),
            StockLevelFilter::All => write!(f, "all"),
        }
    }
}

/// ALL-or-match comparison for open code sets (categories, storage
/// locations, contract terms).
///
/// Codes are compared case-insensitively so `--category toppings`
/// matches the upstream `TOPPINGS`.
pub fn code_matches(filter: Option<&str>, value: &str) -> bool {
    match filter {
        None => true,
        Some(f) if f.eq_ignore_ascii_case("all") => true,
        Some(f) => f.eq_ignore_ascii_case(value),
    }
}
