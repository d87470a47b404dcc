//! Shared helper functions for CLI commands

use chrono::NaiveDate;

use crate::core::expiry::{days_until, ExpiryStatus};

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Display an optional field, "-" when absent or blank
pub fn opt_cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Display an optional date, "-" when absent
pub fn date_cell(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}

/// Short expiry column text: the plain date while healthy, "3d left"
/// or "today" inside the warning window, "2d overdue" past it.
pub fn expiry_cell(date: Option<NaiveDate>, status: ExpiryStatus, today: NaiveDate) -> String {
    let Some(date) = date else {
        return "-".to_string();
    };
    match status {
        ExpiryStatus::None => date.format("%Y-%m-%d").to_string(),
        ExpiryStatus::ExpiresSoon => {
            let days = days_until(date, today);
            if days == 0 {
                "today".to_string()
            } else {
                format!("{}d left", days)
            }
        }
        ExpiryStatus::Expired => format!("{}d overdue", -days_until(date, today)),
    }
}
