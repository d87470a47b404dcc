//! CLI argument definitions - root parser and global options

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands;

/// Pantry Inventory Toolkit - classify and report cafe stock kept as
/// plain-text YAML records.
#[derive(Parser, Debug)]
#[command(name = "pantry", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long = "format", short = 'f', global = true, default_value = "auto")]
    pub output: OutputFormat,

    /// Date used for expiry and maintenance checks (YYYY-MM-DD,
    /// defaults to the local date)
    #[arg(long, global = true, env = "PANTRY_TODAY")]
    pub today: Option<NaiveDate>,
}

/// Output format for machine or human consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Table for lists, pretty card otherwise
    #[default]
    Auto,
    Table,
    Json,
    Yaml,
    Csv,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a pantry project
    Init(commands::init::InitArgs),

    /// Flavor inventory (jars)
    #[command(subcommand)]
    Flavor(commands::flavor::FlavorCommands),

    /// Ingredient inventory
    #[command(subcommand)]
    Ingredient(commands::ingredient::IngredientCommands),

    /// Utensil inventory (pieces)
    #[command(subcommand)]
    Utensil(commands::utensil::UtensilCommands),

    /// Staff records
    #[command(subcommand)]
    Employee(commands::employee::EmployeeCommands),

    /// Supplier records
    #[command(subcommand)]
    Supplier(commands::supplier::SupplierCommands),

    /// Cross-resource inventory dashboard
    Dashboard(commands::dashboard::DashboardArgs),

    /// Expired, expiring, critical and maintenance-due records
    Alerts(commands::alerts::AlertsArgs),

    /// Import records from a JSON export
    Import(commands::import::ImportArgs),

    /// Check every record file and the project configuration
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
