//! Employee records - shop staff with positions and shifts

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::record::Record;
use crate::entities::wire;

/// Job position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Manager,
    Barista,
    Baker,
    Cashier,
    Waiter,
}

impl Position {
    pub fn label(&self) -> &'static str {
        match self {
            Position::Manager => "Manager",
            Position::Barista => "Barista",
            Position::Baker => "Baker",
            Position::Cashier => "Cashier",
            Position::Waiter => "Waiter",
        }
    }

    pub fn all() -> [Position; 5] {
        [
            Position::Manager,
            Position::Barista,
            Position::Baker,
            Position::Cashier,
            Position::Waiter,
        ]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Position::Manager => "MANAGER",
            Position::Barista => "BARISTA",
            Position::Baker => "BAKER",
            Position::Cashier => "CASHIER",
            Position::Waiter => "WAITER",
        };
        write!(f, "{}", s)
    }
}

/// Work shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shift {
    Morning,
    HalfDay,
    Night,
}

impl Shift {
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning Shift",
            Shift::HalfDay => "Half Day",
            Shift::Night => "Night Shift",
        }
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Shift::Morning => "MORNING",
            Shift::HalfDay => "HALF_DAY",
            Shift::Night => "NIGHT",
        };
        write!(f, "{}", s)
    }
}

/// A member of staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Upstream identifier
    #[serde(alias = "_id", with = "wire::object_id")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub position: Position,

    pub shift: Shift,

    /// Monthly salary in pesos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,

    #[serde(default, with = "wire::date", skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(default, with = "wire::datetime", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "wire::datetime", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Employee {
    const RESOURCE: &'static str = "employee";
    const DIR: &'static str = "pantry/employees";

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
