//! Expiry tracking - whole-day windows against an injected "today"

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expiry state of a perishable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryStatus {
    /// No expiry date recorded, or the date is comfortably in the future
    None,
    /// Expiry falls within the warning window (today included)
    ExpiresSoon,
    /// Expiry date has passed
    Expired,
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExpiryStatus::None => "NONE",
            ExpiryStatus::ExpiresSoon => "EXPIRES_SOON",
            ExpiryStatus::Expired => "EXPIRED",
        };
        write!(f, "{}", s)
    }
}

/// Signed whole days from `today` to `expiry`.
///
/// Negative once the date has passed; zero on the day itself.
pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// Classify an optional expiry date against a warning window.
///
/// A record expiring today is still usable, so day zero counts as
/// expiring soon rather than expired. `window_days` of zero warns on
/// the expiry day only.
pub fn expiry_status(expiry: Option<NaiveDate>, today: NaiveDate, window_days: i64) -> ExpiryStatus {
    let Some(expiry) = expiry else {
        return ExpiryStatus::None;
    };
    let days = days_until(expiry, today);
    if days < 0 {
        ExpiryStatus::Expired
    } else if days <= window_days {
        ExpiryStatus::ExpiresSoon
    } else {
        ExpiryStatus::None
    }
}
