//! `pantry dashboard` command - one-screen inventory overview

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::labels::{
    display_name, format_quantity, FLAVOR_CATEGORIES, INGREDIENT_CATEGORIES, UTENSIL_CATEGORIES,
};
use crate::core::loader::Inventory;
use crate::core::summary::{dashboard_stats, DashboardStats};

#[derive(clap::Args, Debug)]
pub struct DashboardArgs {}

pub fn run(_args: DashboardArgs, global: &GlobalOpts) -> Result<()> {
    let (project, _profiles) = super::utils::project_context()?;
    let inventory = Inventory::load(&project)?;
    let stats = dashboard_stats(
        &inventory.flavors,
        &inventory.ingredients,
        &inventory.utensils,
        &inventory.employees,
    );

    match global.output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&stats).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&stats).into_diagnostic()?);
        }
        _ => print_dashboard(&stats),
    }
    Ok(())
}

fn print_dashboard(stats: &DashboardStats) {
    println!("{}", style("Pantry Dashboard").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!();

    println!(
        "  {:<16} {}",
        "Total items",
        style(stats.total_items).cyan().bold()
    );
    println!(
        "  {:<16} {}",
        "Low stock",
        style(stats.low_stock).yellow().bold()
    );
    println!(
        "  {:<16} {}",
        "Out of stock",
        style(stats.out_of_stock).red().bold()
    );
    println!(
        "  {:<16} {}",
        "Employees",
        style(stats.total_employees).bold()
    );
    println!();

    println!("{}", style("Stock Distribution").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!(
        "  {} In Stock      {}",
        style("●").green(),
        stats.stock_distribution.in_stock
    );
    println!(
        "  {} Low Stock     {}",
        style("●").yellow(),
        stats.stock_distribution.low_stock
    );
    println!(
        "  {} Out of Stock  {}",
        style("●").red(),
        stats.stock_distribution.out_of_stock
    );
    println!();

    print_category_section("Flavors by Category", &stats.flavor_categories, FLAVOR_CATEGORIES);
    print_category_section(
        "Ingredients by Category",
        &stats.ingredient_categories,
        INGREDIENT_CATEGORIES,
    );
    print_category_section(
        "Utensils by Category",
        &stats.utensil_categories,
        UTENSIL_CATEGORIES,
    );

    if !stats.employee_positions.is_empty() {
        println!("{}", style("Staff by Position").bold());
        println!("{}", style("─".repeat(60)).dim());
        for (position, count) in &stats.employee_positions {
            println!("  {:<24} {}", position, count);
        }
        println!();
    }

    println!("{}", style("Recent Activity").bold());
    println!("{}", style("─".repeat(60)).dim());
    if stats.recent_activity.is_empty() {
        println!("  No recent activity found.");
    } else {
        for entry in &stats.recent_activity {
            println!(
                "  {} {} ({})",
                style(&entry.action).green(),
                entry.item,
                format_quantity(entry.quantity)
            );
        }
    }
}

fn print_category_section(
    title: &str,
    counts: &std::collections::BTreeMap<String, usize>,
    labels: crate::core::labels::LabelMap,
) {
    if counts.is_empty() {
        return;
    }
    println!("{}", style(title).bold());
    println!("{}", style("─".repeat(60)).dim());
    for (code, count) in counts {
        println!("  {:<24} {}", display_name(code, labels), count);
    }
    println!();
}
