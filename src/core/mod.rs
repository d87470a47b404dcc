//! Core module - classification, profiles and project plumbing

pub mod config;
pub mod expiry;
pub mod labels;
pub mod loader;
pub mod profile;
pub mod project;
pub mod record;
pub mod stock;
pub mod summary;

pub use config::Config;
pub use expiry::{days_until, expiry_status, ExpiryStatus};
pub use loader::{find_record, load_all, FindError, Inventory};
pub use profile::{BandOverrides, Domain, DomainProfile, ProfileError, Profiles};
pub use project::{Project, ProjectError};
pub use record::Record;
pub use stock::{fill_percentage, StockBands, StockLevel};
pub use summary::{
    dashboard_stats, scan_alerts, AlertReport, DashboardStats, StockSummary,
};
