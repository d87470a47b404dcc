//! `pantry flavor` commands - list, show and summarize flavor stock

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::filters::{code_matches, StockLevelFilter};
use crate::cli::gauge::{level_badge, level_style, linear_gauge, ring_gauge};
use crate::cli::helpers::{date_cell, expiry_cell, opt_cell, truncate_str};
use crate::cli::output::list_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::expiry::{days_until, ExpiryStatus};
use crate::core::labels::{format_peso, format_quantity, humanize};
use crate::core::loader::{find_record, load_all};
use crate::core::profile::DomainProfile;
use crate::core::summary::StockSummary;
use crate::entities::flavor::{Flavor, FlavorStatus};

#[derive(Subcommand, Debug)]
pub enum FlavorCommands {
    /// List flavors with filtering
    List(ListArgs),

    /// Show a flavor's details
    Show(ShowArgs),

    /// Count flavors per stock level
    Summary,
}

/// Sort keys for flavor lists
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Jars,
    Category,
    Expiry,
    Created,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by stock level
    #[arg(long, short = 's', default_value = "all")]
    pub stock_level: StockLevelFilter,

    /// Filter by category code (e.g. CLASSIC_FLAVORS)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Filter by status
    #[arg(long)]
    pub status: Option<FlavorStatus>,

    /// Search in name and description
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
    /// Flavor id or name (fragment)
    pub query: String,
}

/// Run a flavor subcommand
pub fn run(cmd: FlavorCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        FlavorCommands::List(args) => run_list(args, global),
        FlavorCommands::Show(args) => run_show(args, global),
        FlavorCommands::Summary => run_summary(global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (project, profiles) = super::utils::project_context()?;
    let profile = profiles.flavors;
    let today = super::utils::today(global);

    let mut flavors: Vec<Flavor> = load_all(&project)?;
    flavors.retain(|f| {
        args.stock_level.matches(f.stock_level(&profile))
            && code_matches(args.category.as_deref(), &f.category)
            && args.status.is_none_or(|s| f.status == s)
            && args.search.as_deref().is_none_or(|q| {
                let q = q.to_lowercase();
                f.name.to_lowercase().contains(&q)
                    || f.description
                        .as_deref()
                        .unwrap_or_default()
                        .to_lowercase()
                        .contains(&q)
            })
    });

    match args.sort {
        // load_all already sorts by name
        SortKey::Name => {}
        SortKey::Jars => flavors.sort_by(|a, b| a.jars.total_cmp(&b.jars)),
        SortKey::Category => flavors.sort_by(|a, b| a.category.cmp(&b.category)),
        SortKey::Expiry => flavors.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date)),
        SortKey::Created => flavors.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
    if args.reverse {
        flavors.reverse();
    }
    if let Some(limit) = args.limit {
        flavors.truncate(limit);
    }

    if args.count {
        println!("{}", flavors.len());
        return Ok(());
    }
    if flavors.is_empty() {
        println!("No flavors found.");
        return Ok(());
    }

    match list_format(global.output) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&flavors).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&flavors).into_diagnostic()?);
        }
        format => {
            let headers = [
                "NAME", "CATEGORY", "JARS", "STOCK", "FILL", "EXPIRY", "STATUS",
            ];
            let rows: Vec<Vec<String>> = flavors
                .iter()
                .map(|f| {
                    let level = f.stock_level(&profile);
                    vec![
                        truncate_str(&f.name, 24),
                        f.category_name().to_string(),
                        format_quantity(f.jars),
                        level.to_string(),
                        format!("{:.0}%", f.fill_percentage(&profile)),
                        expiry_cell(f.expiry_date, f.expiry_status(today, &profile), today),
                        f.status.to_string(),
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
    let profile = profiles.flavors;
    let today = super::utils::today(global);

    let flavors: Vec<Flavor> = load_all(&project)?;
    let flavor = find_record(&flavors, &args.query)?;

    match global.output {
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(flavor).into_diagnostic()?);
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(flavor).into_diagnostic()?
            );
        }
        _ => print_card(flavor, &profile, today),
    }
    Ok(())
}

fn print_card(flavor: &Flavor, profile: &DomainProfile, today: chrono::NaiveDate) {
    let level = flavor.stock_level(profile);
    let fill = flavor.fill_percentage(profile);
    let capacity = match flavor.max_stock_level {
        Some(max) if max > 0.0 => max,
        _ => profile.bands.high,
    };

    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("ID").bold(), style(&flavor.id).cyan());
    println!("{}: {}", style("Name").bold(), style(&flavor.name).yellow());
    println!("{}: {}", style("Category").bold(), flavor.category_name());
    println!("{}: {}", style("Status").bold(), flavor.status);
    println!("{}", style("─".repeat(60)).dim());
    println!();

    println!("{}", level_badge(level));
    println!(
        "{}: {} / {} {}",
        style("Jars").bold(),
        format_quantity(flavor.jars),
        format_quantity(capacity),
        profile.measure
    );
    println!(
        "{}",
        level_style(level).apply_to(linear_gauge(fill, 30))
    );
    println!();
    for line in ring_gauge(fill, 28).lines() {
        println!("  {}", line);
    }
    println!("  {:.0}% of capacity", fill);
    println!();

    println!(
        "{}: {}",
        style("Cost per jar").bold(),
        format_peso(flavor.cost_per_jar)
    );
    println!(
        "{}: {}",
        style("Supplier").bold(),
        opt_cell(flavor.supplier.as_deref())
    );
    if let Some(ref location) = flavor.storage_location {
        println!("{}: {}", style("Storage").bold(), humanize(location));
    }

    match flavor.expiry_status(today, profile) {
        ExpiryStatus::None => {
            println!(
                "{}: {}",
                style("Expiry").bold(),
                date_cell(flavor.expiry_date)
            );
        }
        ExpiryStatus::ExpiresSoon => {
            let days = flavor
                .expiry_date
                .map(|d| days_until(d, today))
                .unwrap_or_default();
            let note = if days == 0 {
                "expires today".to_string()
            } else {
                format!("expires in {} day(s)", days)
            };
            println!(
                "{}: {} {}",
                style("Expiry").bold(),
                date_cell(flavor.expiry_date),
                style(format!("({})", note)).yellow().bold()
            );
        }
        ExpiryStatus::Expired => {
            let days = flavor
                .expiry_date
                .map(|d| -days_until(d, today))
                .unwrap_or_default();
            println!(
                "{}: {} {}",
                style("Expiry").bold(),
                date_cell(flavor.expiry_date),
                style(format!("(expired {} day(s) ago)", days)).red().bold()
            );
        }
    }

    if let Some(ref description) = flavor.description {
        if !description.trim().is_empty() {
            println!();
            println!("{}", style("Description:").bold());
            println!("{}", description);
        }
    }
    if let Some(ref notes) = flavor.notes {
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
    let profile = profiles.flavors;

    let flavors: Vec<Flavor> = load_all(&project)?;
    let summary = StockSummary::from_levels(flavors.iter().map(|f| f.stock_level(&profile)));

    super::utils::print_stock_summary("Flavor", &summary, global)
}
