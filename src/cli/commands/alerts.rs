//! `pantry alerts` command - everything that needs attention today

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::labels::format_quantity;
use crate::core::loader::Inventory;
use crate::core::summary::{scan_alerts, AlertReport};

#[derive(clap::Args, Debug)]
pub struct AlertsArgs {
    /// Override the expiry warning window (days) for all perishables
    #[arg(long)]
    pub days: Option<i64>,
}

pub fn run(args: AlertsArgs, global: &GlobalOpts) -> Result<()> {
    let (project, mut profiles) = super::utils::project_context()?;
    let today = super::utils::today(global);

    if let Some(days) = args.days {
        // Utensils carry no expiry window, so only the perishable
        // domains pick up the override.
        profiles.flavors.expiry_window_days = Some(days);
        profiles.ingredients.expiry_window_days = Some(days);
    }

    let inventory = Inventory::load(&project)?;
    let report = scan_alerts(
        &inventory.flavors,
        &inventory.ingredients,
        &inventory.utensils,
        &profiles,
        today,
    );

    match global.output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&report).into_diagnostic()?);
        }
        _ => print_report(&report),
    }
    Ok(())
}

fn print_report(report: &AlertReport) {
    if report.is_empty() {
        println!("{} No alerts.", style("✓").green());
        return;
    }

    if !report.expired.is_empty() {
        println!("{}", style("Expired").red().bold());
        println!("{}", style("─".repeat(60)).dim());
        for alert in &report.expired {
            println!(
                "  {} {} ({}) expired {} day(s) ago, on {}",
                style("✗").red(),
                style(&alert.name).bold(),
                alert.resource,
                -alert.days,
                alert.expiry_date.format("%Y-%m-%d")
            );
        }
        println!();
    }

    if !report.expiring_soon.is_empty() {
        println!("{}", style("Expiring Soon").yellow().bold());
        println!("{}", style("─".repeat(60)).dim());
        for alert in &report.expiring_soon {
            let when = if alert.days == 0 {
                "today".to_string()
            } else {
                format!("in {} day(s)", alert.days)
            };
            println!(
                "  {} {} ({}) expires {}, on {}",
                style("⚠").yellow(),
                style(&alert.name).bold(),
                alert.resource,
                when,
                alert.expiry_date.format("%Y-%m-%d")
            );
        }
        println!();
    }

    if !report.critical_stock.is_empty() {
        println!("{}", style("Critical Stock").red().bold());
        println!("{}", style("─".repeat(60)).dim());
        for alert in &report.critical_stock {
            println!(
                "  {} {} ({}) down to {} {}",
                style("🚨").red(),
                style(&alert.name).bold(),
                alert.resource,
                format_quantity(alert.quantity),
                alert.measure
            );
        }
        println!();
    }

    if !report.maintenance_due.is_empty() {
        println!("{}", style("Maintenance Due").bold());
        println!("{}", style("─".repeat(60)).dim());
        for alert in &report.maintenance_due {
            println!(
                "  {} {} due since {}",
                style("⚠").yellow(),
                style(&alert.name).bold(),
                alert.due.format("%Y-%m-%d")
            );
        }
        println!();
    }

    println!("{} alert(s) found", style(report.total()).cyan());
}
