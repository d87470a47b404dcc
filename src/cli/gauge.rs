//! Stock gauges - unicode fill bars and braille ring gauges
//!
//! The ring gauge mirrors the circular progress dial the web UI drew
//! around each record's fill percentage.

use console::Style;
use drawille::Canvas;

use crate::core::stock::StockLevel;

/// Console style for a stock level, following the upstream palette
/// (green, yellow, orange, red).
pub fn level_style(level: StockLevel) -> Style {
    match level {
        StockLevel::High => Style::new().green(),
        StockLevel::Moderate => Style::new().yellow(),
        StockLevel::Low => Style::new().color256(208),
        StockLevel::Critical => Style::new().red(),
    }
}

/// Styled stock badge, icon plus text.
pub fn level_badge(level: StockLevel) -> String {
    level_style(level)
        .apply_to(format!("{} {}", level.badge_icon(), level.badge_text()))
        .to_string()
}

/// Horizontal fill bar with the percentage appended.
pub fn linear_gauge(percentage: f64, width: usize) -> String {
    let pct = percentage.clamp(0.0, 100.0);
    let filled = (((pct / 100.0) * width as f64).round() as usize).min(width);
    format!(
        "{}{} {:.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        pct
    )
}

/// Ring gauge drawn in braille dots.
///
/// The outer ring is always closed; the fill arc sweeps clockwise from
/// 12 o'clock, two dots thick. `size` is the dot diameter; drawille
/// packs 2x4 dots per character cell.
pub fn ring_gauge(percentage: f64, size: u32) -> String {
    let pct = percentage.clamp(0.0, 100.0);
    let mut canvas = Canvas::new(size, size);
    let center = size as f64 / 2.0;
    let outer = center - 1.0;
    let inner = (outer - 3.0).max(1.0);

    let steps = 240;
    let fill_limit = (pct / 100.0) * steps as f64;
    for i in 0..steps {
        let theta = -std::f64::consts::FRAC_PI_2
            + 2.0 * std::f64::consts::PI * (i as f64) / (steps as f64);
        let (sin, cos) = theta.sin_cos();
        canvas.set((center + outer * cos) as u32, (center + outer * sin) as u32);
        if (i as f64) < fill_limit {
            canvas.set((center + inner * cos) as u32, (center + inner * sin) as u32);
            canvas.set(
                (center + (inner + 1.0) * cos) as u32,
                (center + (inner + 1.0) * sin) as u32,
            );
        }
    }
    canvas.frame()
}
