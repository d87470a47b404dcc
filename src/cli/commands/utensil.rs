//! `pantry utensil` commands - list, show and summarize kitchen equipment

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::filters::{code_matches, StockLevelFilter};
use crate::cli::gauge::{level_badge, level_style, linear_gauge, ring_gauge};
use crate::cli::helpers::{date_cell, opt_cell, truncate_str};
use crate::cli::output::list_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::labels::{format_peso, format_quantity, humanize};
use crate::core::loader::{find_record, load_all};
use crate::core::profile::DomainProfile;
use crate::core::summary::StockSummary;
use crate::entities::utensil::{Utensil, UtensilStatus};

#[derive(Subcommand, Debug)]
pub enum UtensilCommands {
    /// List utensils with filtering
    List(ListArgs),

    /// Show a utensil's details
    Show(ShowArgs),

    /// Count utensils per stock level
    Summary,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Quantity,
    Category,
    Maintenance,
    Created,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by stock level
    #[arg(long, short = 's', default_value = "all")]
    pub stock_level: StockLevelFilter,

    /// Filter by category code (e.g. BAKING_TOOLS)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Filter by status
    #[arg(long)]
    pub status: Option<UtensilStatus>,

    /// Only utensils whose maintenance date has arrived
    #[arg(long)]
    pub due: bool,

    /// Search in name and notes
    #[arg(long)]
    pub search: Option<String>,

    /// Sort by field
    #[arg(long, default_value = "name")]
    pub sort: SortKey,

    /// Reverse sort order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Utensil id or name (fragment)
    pub query: String,
}

pub fn run(cmd: UtensilCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        UtensilCommands::List(args) => run_list(args, global),
        UtensilCommands::Show(args) => run_show(args, global),
        UtensilCommands::Summary => run_summary(global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (project, profiles) = super::utils::project_context()?;
    let profile = profiles.utensils;
    let today = super::utils::today(global);

    let mut utensils: Vec<Utensil> = load_all(&project)?;
    utensils.retain(|u| {
        args.stock_level.matches(u.stock_level(&profile))
            && code_matches(args.category.as_deref(), &u.category)
            && args.status.is_none_or(|s| u.status == s)
            && (!args.due || u.maintenance_due(today))
            && args.search.as_deref().is_none_or(|q| {
                let q = q.to_lowercase();
                u.name.to_lowercase().contains(&q)
                    || u.notes
                        .as_deref()
                        .unwrap_or_default()
                        .to_lowercase()
                        .contains(&q)
            })
    });

    match args.sort {
        // load_all already sorts by name
        SortKey::Name => {}
        SortKey::Quantity => utensils.sort_by(|a, b| a.quantity.total_cmp(&b.quantity)),
        SortKey::Category => utensils.sort_by(|a, b| a.category.cmp(&b.category)),
        SortKey::Maintenance => {
            utensils.sort_by(|a, b| a.next_maintenance.cmp(&b.next_maintenance))
        }
        SortKey::Created => utensils.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
    if args.reverse {
        utensils.reverse();
    }
    if let Some(limit) = args.limit {
        utensils.truncate(limit);
    }

    if args.count {
        println!("{}", utensils.len());
        return Ok(());
    }
    if utensils.is_empty() {
        println!("No utensils found.");
        return Ok(());
    }

    match list_format(global.output) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&utensils).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&utensils).into_diagnostic()?);
        }
        format => {
            let headers = [
                "NAME",
                "CATEGORY",
                "QTY",
                "STOCK",
                "FILL",
                "STATUS",
                "NEXT MAINTENANCE",
            ];
            let rows: Vec<Vec<String>> = utensils
                .iter()
                .map(|u| {
                    let level = u.stock_level(&profile);
                    let due_cell = match u.next_maintenance {
                        Some(date) if u.maintenance_due(today) => {
                            format!("{} (due)", date.format("%Y-%m-%d"))
                        }
                        other => date_cell(other),
                    };
                    vec![
                        truncate_str(&u.name, 24),
                        u.category_name().to_string(),
                        format_quantity(u.quantity),
                        level.to_string(),
                        format!("{:.0}%", u.fill_percentage(&profile)),
                        u.status.label().to_string(),
                        due_cell,
                    ]
                })
                .collect();
            super::utils::print_rows(&headers, &rows, format)?;
        }
    }
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let (project, profiles) = super::utils::project_context()?;
    let profile = profiles.utensils;
    let today = super::utils::today(global);

    let utensils: Vec<Utensil> = load_all(&project)?;
    let utensil = find_record(&utensils, &args.query)?;

    match global.output {
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(utensil).into_diagnostic()?);
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(utensil).into_diagnostic()?
            );
        }
        _ => print_card(utensil, &profile, today),
    }
    Ok(())
}

fn print_card(utensil: &Utensil, profile: &DomainProfile, today: chrono::NaiveDate) {
    let level = utensil.stock_level(profile);
    let fill = utensil.fill_percentage(profile);
    let capacity = match utensil.max_stock_level {
        Some(max) if max > 0.0 => max,
        _ => profile.bands.high,
    };

    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("ID").bold(), style(&utensil.id).cyan());
    println!("{}: {}", style("Name").bold(), style(&utensil.name).yellow());
    println!("{}: {}", style("Category").bold(), utensil.category_name());
    println!("{}: {}", style("Status").bold(), utensil.status.label());
    println!("{}", style("─".repeat(60)).dim());
    println!();

    println!("{}", level_badge(level));
    println!(
        "{}: {} / {}",
        style("Quantity").bold(),
        format_quantity(utensil.quantity),
        format_quantity(capacity)
    );
    println!("{}", level_style(level).apply_to(linear_gauge(fill, 30)));
    println!();
    for line in ring_gauge(fill, 28).lines() {
        println!("  {}", line);
    }
    println!("  {:.0}% of capacity", fill);
    println!();

    println!("{}: {}", style("Cost").bold(), format_peso(utensil.cost));
    println!(
        "{}: {}",
        style("Supplier").bold(),
        opt_cell(utensil.supplier.as_deref())
    );
    if let Some(ref location) = utensil.location {
        println!("{}: {}", style("Location").bold(), humanize(location));
    }
    println!(
        "{}: {}",
        style("Purchased").bold(),
        date_cell(utensil.purchase_date)
    );
    println!(
        "{}: {}",
        style("Last maintenance").bold(),
        date_cell(utensil.last_maintenance)
    );
    if utensil.maintenance_due(today) {
        println!(
            "{}: {} {}",
            style("Next maintenance").bold(),
            date_cell(utensil.next_maintenance),
            style("(due)").red().bold()
        );
    } else {
        println!(
            "{}: {}",
            style("Next maintenance").bold(),
            date_cell(utensil.next_maintenance)
        );
    }

    if let Some(ref notes) = utensil.notes {
        if !notes.trim().is_empty() {
            println!();
            println!("{}", style("Notes:").bold());
            println!("{}", notes);
        }
    }
    println!("{}", style("─".repeat(60)).dim());
}

fn run_summary(global: &GlobalOpts) -> Result<()> {
    let (project, profiles) = super::utils::project_context()?;
    let profile = profiles.utensils;

    let utensils: Vec<Utensil> = load_all(&project)?;
    let summary = StockSummary::from_levels(utensils.iter().map(|u| u.stock_level(&profile)));

    super::utils::print_stock_summary("Utensil", &summary, global)
}
