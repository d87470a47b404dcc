//! `pantry ingredient` commands - list, show and summarize ingredient stock

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
use crate::entities::ingredient::{Ingredient, IngredientStatus};

#[derive(Subcommand, Debug)]
pub enum IngredientCommands {
    /// List ingredients with filtering
    List(ListArgs),

    /// Show an ingredient's details
    Show(ShowArgs),

    /// Count ingredients per stock level
    Summary,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Quantity,
    Category,
    Expiry,
    Created,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by stock level
    #[arg(long, short = 's', default_value = "all")]
    pub stock_level: StockLevelFilter,

    /// Filter by category code (e.g. DAIRY_EGGS)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Filter by status
    #[arg(long)]
    pub status: Option<IngredientStatus>,

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
    /// Ingredient id or name (fragment)
    pub query: String,
}

pub fn run(cmd: IngredientCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        IngredientCommands::List(args) => run_list(args, global),
        IngredientCommands::Show(args) => run_show(args, global),
        IngredientCommands::Summary => run_summary(global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (project, profiles) = super::utils::project_context()?;
    let profile = profiles.ingredients;
    let today = super::utils::today(global);

    let mut ingredients: Vec<Ingredient> = load_all(&project)?;
    ingredients.retain(|i| {
        args.stock_level.matches(i.stock_level(&profile))
            && code_matches(args.category.as_deref(), &i.category)
            && args.status.is_none_or(|s| i.status == s)
            && args.search.as_deref().is_none_or(|q| {
                let q = q.to_lowercase();
                i.name.to_lowercase().contains(&q)
                    || i.notes
                        .as_deref()
                        .unwrap_or_default()
                        .to_lowercase()
                        .contains(&q)
            })
    });

    match args.sort {
        // load_all already sorts by name
        SortKey::Name => {}
        SortKey::Quantity => ingredients.sort_by(|a, b| a.quantity.total_cmp(&b.quantity)),
        SortKey::Category => ingredients.sort_by(|a, b| a.category.cmp(&b.category)),
        SortKey::Expiry => ingredients.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date)),
        SortKey::Created => ingredients.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
    if args.reverse {
        ingredients.reverse();
    }
    if let Some(limit) = args.limit {
        ingredients.truncate(limit);
    }

    if args.count {
        println!("{}", ingredients.len());
        return Ok(());
    }
    if ingredients.is_empty() {
        println!("No ingredients found.");
        return Ok(());
    }

    match list_format(global.output) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&ingredients).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&ingredients).into_diagnostic()?);
        }
        format => {
            let headers = [
                "NAME", "CATEGORY", "QUANTITY", "STOCK", "FILL", "EXPIRY", "STATUS",
            ];
            let rows: Vec<Vec<String>> = ingredients
                .iter()
                .map(|i| {
                    let level = i.stock_level(&profile);
                    vec![
                        truncate_str(&i.name, 24),
                        i.category_name().to_string(),
                        format!("{} {}", format_quantity(i.quantity), i.unit),
                        level.to_string(),
                        format!("{:.0}%", i.fill_percentage(&profile)),
                        expiry_cell(i.expiry_date, i.expiry_status(today, &profile), today),
                        i.status.to_string(),
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
    let profile = profiles.ingredients;
    let today = super::utils::today(global);

    let ingredients: Vec<Ingredient> = load_all(&project)?;
    let ingredient = find_record(&ingredients, &args.query)?;

    match global.output {
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(ingredient).into_diagnostic()?);
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(ingredient).into_diagnostic()?
            );
        }
        _ => print_card(ingredient, &profile, today),
    }
    Ok(())
}

fn print_card(ingredient: &Ingredient, profile: &DomainProfile, today: chrono::NaiveDate) {
    let level = ingredient.stock_level(profile);
    let fill = ingredient.fill_percentage(profile);
    let capacity = match ingredient.max_stock_level {
        Some(max) if max > 0.0 => max,
        _ => profile.bands.high,
    };

    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("ID").bold(), style(&ingredient.id).cyan());
    println!(
        "{}: {}",
        style("Name").bold(),
        style(&ingredient.name).yellow()
    );
    println!(
        "{}: {}",
        style("Category").bold(),
        ingredient.category_name()
    );
    println!("{}: {}", style("Status").bold(), ingredient.status);
    println!("{}", style("─".repeat(60)).dim());
    println!();

    println!("{}", level_badge(level));
    println!(
        "{}: {} / {} {}",
        style("Quantity").bold(),
        format_quantity(ingredient.quantity),
        format_quantity(capacity),
        ingredient.unit
    );
    println!("{}", level_style(level).apply_to(linear_gauge(fill, 30)));
    println!();
    for line in ring_gauge(fill, 28).lines() {
        println!("  {}", line);
    }
    println!("  {:.0}% of capacity", fill);
    println!();

    println!(
        "{}: {}",
        style("Cost per unit").bold(),
        format_peso(ingredient.cost_per_unit)
    );
    println!(
        "{}: {}",
        style("Supplier").bold(),
        opt_cell(ingredient.supplier.as_deref())
    );
    if let Some(ref location) = ingredient.storage_location {
        println!("{}: {}", style("Storage").bold(), humanize(location));
    }

    match ingredient.expiry_status(today, profile) {
        ExpiryStatus::None => {
            println!(
                "{}: {}",
                style("Expiry").bold(),
                date_cell(ingredient.expiry_date)
            );
        }
        ExpiryStatus::ExpiresSoon => {
            let days = ingredient
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
                date_cell(ingredient.expiry_date),
                style(format!("({})", note)).yellow().bold()
            );
        }
        ExpiryStatus::Expired => {
            let days = ingredient
                .expiry_date
                .map(|d| -days_until(d, today))
                .unwrap_or_default();
            println!(
                "{}: {} {}",
                style("Expiry").bold(),
                date_cell(ingredient.expiry_date),
                style(format!("(expired {} day(s) ago)", days)).red().bold()
            );
        }
    }

    if let Some(ref notes) = ingredient.notes {
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
    let profile = profiles.ingredients;

    let ingredients: Vec<Ingredient> = load_all(&project)?;
    let summary =
        StockSummary::from_levels(ingredients.iter().map(|i| i.stock_level(&profile)));

    super::utils::print_stock_summary("Ingredient", &summary, global)
}
