//! Aggregate reports - stock summaries, dashboard stats and alerts
//!
//! Everything here is computed from immutable record slices passed in
//! by the caller; nothing reads the filesystem or mutates state.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::expiry::{days_until, ExpiryStatus};
use crate::core::profile::{DomainProfile, Profiles};
use crate::core::stock::StockLevel;
use crate::entities::{Employee, Flavor, Ingredient, Utensil};

/// Count of records per stock level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockSummary {
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
    pub critical: usize,
    pub total: usize,
}

impl StockSummary {
    pub fn from_levels(levels: impl IntoIterator<Item = StockLevel>) -> Self {
        let mut summary = Self::default();
        for level in levels {
            summary.add(level);
        }
        summary
    }

    pub fn add(&mut self, level: StockLevel) {
        match level {
            StockLevel::High => self.high += 1,
            StockLevel::Moderate => self.moderate += 1,
            StockLevel::Low => self.low += 1,
            StockLevel::Critical => self.critical += 1,
        }
        self.total += 1;
    }

    pub fn count(&self, level: StockLevel) -> usize {
        match level {
            StockLevel::High => self.high,
            StockLevel::Moderate => self.moderate,
            StockLevel::Low => self.low,
            StockLevel::Critical => self.critical,
        }
    }
}

/// Restock distribution across the whole inventory.
///
/// These are the coarser dashboard buckets, distinct from the
/// four-level classification: a record is out of stock, low, or
/// simply in stock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RestockCounts {
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

/// One line of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub action: String,
    pub item: String,
    pub quantity: f64,
}

/// Everything the dashboard shows.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_items: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub total_employees: usize,
    /// Record counts per category code, one map per inventory domain
    pub flavor_categories: BTreeMap<String, usize>,
    pub ingredient_categories: BTreeMap<String, usize>,
    pub utensil_categories: BTreeMap<String, usize>,
    /// Staff counts per position
    pub employee_positions: BTreeMap<String, usize>,
    pub stock_distribution: RestockCounts,
    /// Five most recent flavors, then five most recent ingredients
    pub recent_activity: Vec<ActivityEntry>,
}

fn count_categories<'a>(codes: impl Iterator<Item = &'a str>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for code in codes {
        *counts.entry(code.to_string()).or_insert(0) += 1;
    }
    counts
}

fn recent<'a, T>(records: &'a [T], key: impl Fn(&T) -> Option<chrono::DateTime<chrono::Utc>>) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = records.iter().collect();
    // Newest first; records without a timestamp sink to the end.
    sorted.sort_by(|a, b| key(b).cmp(&key(a)));
    sorted.truncate(5);
    sorted
}

/// Compute dashboard statistics over a full inventory snapshot.
pub fn dashboard_stats(
    flavors: &[Flavor],
    ingredients: &[Ingredient],
    utensils: &[Utensil],
    employees: &[Employee],
) -> DashboardStats {
    let total_items = flavors.len() + ingredients.len() + utensils.len();
    let mut low_stock = 0;
    let mut out_of_stock = 0;

    for utensil in utensils {
        if utensil.is_out_of_stock() {
            out_of_stock += 1;
        } else if utensil.is_low_stock() {
            low_stock += 1;
        }
    }
    for ingredient in ingredients {
        if ingredient.is_out_of_stock() {
            out_of_stock += 1;
        } else if ingredient.is_low_stock() {
            low_stock += 1;
        }
    }
    for flavor in flavors {
        if flavor.is_out_of_stock() {
            out_of_stock += 1;
        } else if flavor.is_low_stock() {
            low_stock += 1;
        }
    }

    let mut recent_activity = Vec::new();
    for flavor in recent(flavors, |f| f.created_at) {
        recent_activity.push(ActivityEntry {
            action: "Added".to_string(),
            item: format!("Flavor: {}", flavor.name),
            quantity: flavor.jars,
        });
    }
    for ingredient in recent(ingredients, |i| i.created_at) {
        recent_activity.push(ActivityEntry {
            action: "Added".to_string(),
            item: format!("Ingredient: {}", ingredient.name),
            quantity: ingredient.quantity,
        });
    }

    DashboardStats {
        total_items,
        low_stock,
        out_of_stock,
        total_employees: employees.len(),
        flavor_categories: count_categories(flavors.iter().map(|f| f.category.as_str())),
        ingredient_categories: count_categories(ingredients.iter().map(|i| i.category.as_str())),
        utensil_categories: count_categories(utensils.iter().map(|u| u.category.as_str())),
        employee_positions: count_categories(
            employees.iter().map(|e| e.position.label()),
        ),
        stock_distribution: RestockCounts {
            in_stock: total_items - low_stock - out_of_stock,
            low_stock,
            out_of_stock,
        },
        recent_activity,
    }
}

/// A perishable record inside or past its warning window.
#[derive(Debug, Clone, Serialize)]
pub struct ExpiryAlert {
    pub resource: &'static str,
    pub name: String,
    pub expiry_date: NaiveDate,
    /// Signed days until expiry; negative once overdue
    pub days: i64,
}

/// A record classified CRITICAL.
#[derive(Debug, Clone, Serialize)]
pub struct StockAlert {
    pub resource: &'static str,
    pub name: String,
    pub quantity: f64,
    pub measure: String,
}

/// A utensil whose scheduled maintenance date has arrived.
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceAlert {
    pub name: String,
    pub due: NaiveDate,
}

/// All actionable conditions found in one scan.
#[derive(Debug, Default, Serialize)]
pub struct AlertReport {
    pub expired: Vec<ExpiryAlert>,
    pub expiring_soon: Vec<ExpiryAlert>,
    pub critical_stock: Vec<StockAlert>,
    pub maintenance_due: Vec<MaintenanceAlert>,
}

impl AlertReport {
    pub fn total(&self) -> usize {
        self.expired.len()
            + self.expiring_soon.len()
            + self.critical_stock.len()
            + self.maintenance_due.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

fn push_expiry(
    report: &mut AlertReport,
    resource: &'static str,
    name: &str,
    expiry: Option<NaiveDate>,
    status: ExpiryStatus,
    today: NaiveDate,
) {
    let Some(date) = expiry else { return };
    let alert = ExpiryAlert {
        resource,
        name: name.to_string(),
        expiry_date: date,
        days: days_until(date, today),
    };
    match status {
        ExpiryStatus::Expired => report.expired.push(alert),
        ExpiryStatus::ExpiresSoon => report.expiring_soon.push(alert),
        ExpiryStatus::None => {}
    }
}

fn push_critical(
    report: &mut AlertReport,
    resource: &'static str,
    name: &str,
    quantity: f64,
    measure: &str,
    profile: &DomainProfile,
) {
    if profile.bands.classify(quantity) == StockLevel::Critical {
        report.critical_stock.push(StockAlert {
            resource,
            name: name.to_string(),
            quantity,
            measure: measure.to_string(),
        });
    }
}

/// Scan the inventory for expired stock, stock about to expire,
/// critically low stock and overdue maintenance.
pub fn scan_alerts(
    flavors: &[Flavor],
    ingredients: &[Ingredient],
    utensils: &[Utensil],
    profiles: &Profiles,
    today: NaiveDate,
) -> AlertReport {
    let mut report = AlertReport::default();

    for flavor in flavors {
        let status = flavor.expiry_status(today, &profiles.flavors);
        push_expiry(
            &mut report,
            "flavor",
            &flavor.name,
            flavor.expiry_date,
            status,
            today,
        );
        push_critical(
            &mut report,
            "flavor",
            &flavor.name,
            flavor.jars,
            profiles.flavors.measure,
            &profiles.flavors,
        );
    }
    for ingredient in ingredients {
        let status = ingredient.expiry_status(today, &profiles.ingredients);
        push_expiry(
            &mut report,
            "ingredient",
            &ingredient.name,
            ingredient.expiry_date,
            status,
            today,
        );
        push_critical(
            &mut report,
            "ingredient",
            &ingredient.name,
            ingredient.quantity,
            &ingredient.unit,
            &profiles.ingredients,
        );
    }
    for utensil in utensils {
        push_critical(
            &mut report,
            "utensil",
            &utensil.name,
            utensil.quantity,
            profiles.utensils.measure,
            &profiles.utensils,
        );
        if utensil.maintenance_due(today) {
            if let Some(due) = utensil.next_maintenance {
                report.maintenance_due.push(MaintenanceAlert {
                    name: utensil.name.clone(),
                    due,
                });
            }
        }
    }

    // Most urgent first in every section.
    report.expired.sort_by_key(|a| a.days);
    report.expiring_soon.sort_by_key(|a| a.days);
    report
        .critical_stock
        .sort_by(|a, b| a.quantity.total_cmp(&b.quantity));
    report.maintenance_due.sort_by_key(|a| a.due);
    report
}
