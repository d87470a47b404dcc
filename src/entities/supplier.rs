//! Supplier records - vendors the shop orders from

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::labels::{display_name, SUPPLIER_CATEGORIES};
use crate::core::record::Record;
use crate::entities::wire;

/// Relationship status with a supplier; the upstream API keeps these
/// lowercase, unlike the inventory vocabularies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl std::fmt::Display for SupplierStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SupplierStatus::Active => "active",
            SupplierStatus::Inactive => "inactive",
            SupplierStatus::Pending => "pending",
        };
        write!(f, "{}", s)
    }
}

fn default_contract() -> String {
    "ANNUAL".to_string()
}

/// A vendor. Contract terms are free-form codes; "ANNUAL" is the
/// conventional default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Upstream identifier
    #[serde(alias = "_id", with = "wire::object_id")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Contract term code
    #[serde(default = "default_contract")]
    pub contract: String,

    /// City or area the supplier operates from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,

    /// Line-of-business code (e.g. "MILKTEA_FLAVORS")
    #[serde(default)]
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,

    #[serde(default)]
    pub status: SupplierStatus,

    #[serde(default, with = "wire::datetime", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "wire::datetime", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Supplier {
    pub fn category_name(&self) -> &str {
        display_name(&self.category, SUPPLIER_CATEGORIES)
    }
}

impl Record for Supplier {
    const RESOURCE: &'static str = "supplier";
    const DIR: &'static str = "pantry/suppliers";

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

    #[test]
    fn contract_defaults_to_annual() {
        let s: Supplier =
            serde_yml::from_str("id: x\nname: Golden Pearl Trading\ncategory: TOPPINGS\n")
                .unwrap();
        assert_eq!(s.contract, "ANNUAL");
        assert_eq!(s.status, SupplierStatus::Active);
        assert_eq!(s.category_name(), "Toppings");
    }

    #[test]
    fn status_is_lowercase_on_the_wire() {
        let s: Supplier =
            serde_yml::from_str("id: x\nname: y\ncategory: FRUITS\nstatus: pending\n").unwrap();
        assert_eq!(s.status, SupplierStatus::Pending);
        let yaml = serde_yml::to_string(&s).unwrap();
        assert!(yaml.contains("status: pending"));
    }

    #[test]
    fn slash_category_label() {
        let s: Supplier =
            serde_yml::from_str("id: x\nname: y\ncategory: DOUGH_PASTRY\n").unwrap();
        assert_eq!(s.category_name(), "Dough/Pastry");
    }
}
