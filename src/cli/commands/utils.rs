//! Shared plumbing for command implementations

use chrono::NaiveDate;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::table;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::Config;
use crate::core::profile::Profiles;
use crate::core::project::Project;
use crate::core::stock::StockLevel;
use crate::core::summary::StockSummary;

/// Locate the enclosing project and resolve its stock profiles.
pub fn project_context() -> Result<(Project, Profiles)> {
    let project = Project::discover()?;
    let config = Config::load(&project)?;
    let profiles = config.profiles()?;
    Ok((project, profiles))
}

/// Reference date for expiry and maintenance checks.
///
/// `--today` (or `PANTRY_TODAY`) pins the date, which keeps output
/// reproducible in scripts and tests.
pub fn today(global: &GlobalOpts) -> NaiveDate {
    global
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Render a list as a table or CSV depending on the requested format.
pub fn print_rows(headers: &[&str], rows: &[Vec<String>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            print!("{}", table::render_csv(headers, rows).into_diagnostic()?);
        }
        _ => {
            println!("{}", table::render_table(headers, rows));
        }
    }
    Ok(())
}

/// Print a per-level stock summary, honoring the output format.
pub fn print_stock_summary(label: &str, summary: &StockSummary, global: &GlobalOpts) -> Result<()> {
    match global.output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(summary).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(summary).into_diagnostic()?);
        }
        _ => {
            println!("{}", style(format!("{} Stock Summary", label)).bold());
            println!("{}", style("─".repeat(40)).dim());
            for level in StockLevel::all() {
                let count = summary.count(level);
                println!(
                    "  {} {:<12} {}",
                    level.badge_icon(),
                    level.badge_text(),
                    style(count).bold()
                );
            }
            println!("{}", style("─".repeat(40)).dim());
            println!("  Total: {}", style(summary.total).bold());
        }
    }
    Ok(())
}
