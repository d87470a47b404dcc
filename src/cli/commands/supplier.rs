//! `pantry supplier` commands - list and show vendor records

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::filters::code_matches;
use crate::cli::helpers::{opt_cell, truncate_str};
use crate::cli::output::list_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::loader::{find_record, load_all};
use crate::entities::supplier::{Supplier, SupplierStatus};

#[derive(Subcommand, Debug)]
pub enum SupplierCommands {
    /// List suppliers with filtering
    List(ListArgs),

    /// Show a supplier's details
    Show(ShowArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Category,
    Place,
    Created,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by category code (e.g. MILKTEA_FLAVORS)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Filter by status
    #[arg(long, short = 's')]
    pub status: Option<SupplierStatus>,

    /// Filter by contract term code (e.g. ANNUAL)
    #[arg(long)]
    pub contract: Option<String>,

    /// Search in name, place and contact person
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
    /// Supplier id or name (fragment)
    pub query: String,
}

pub fn run(cmd: SupplierCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        SupplierCommands::List(args) => run_list(args, global),
        SupplierCommands::Show(args) => run_show(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (project, _profiles) = super::utils::project_context()?;

    let mut suppliers: Vec<Supplier> = load_all(&project)?;
    suppliers.retain(|s| {
        code_matches(args.category.as_deref(), &s.category)
            && args.status.is_none_or(|st| s.status == st)
            && code_matches(args.contract.as_deref(), &s.contract)
            && args.search.as_deref().is_none_or(|q| {
                let q = q.to_lowercase();
                s.name.to_lowercase().contains(&q)
                    || s.place
                        .as_deref()
                        .unwrap_or_default()
                        .to_lowercase()
                        .contains(&q)
                    || s.contact_person
                        .as_deref()
                        .unwrap_or_default()
                        .to_lowercase()
                        .contains(&q)
            })
    });

    match args.sort {
        // load_all already sorts by name
        SortKey::Name => {}
        SortKey::Category => suppliers.sort_by(|a, b| a.category.cmp(&b.category)),
        SortKey::Place => suppliers.sort_by(|a, b| a.place.cmp(&b.place)),
        SortKey::Created => suppliers.sort_by_key(|s| s.created_at),
    }
    if args.reverse {
        suppliers.reverse();
    }
    if let Some(limit) = args.limit {
        suppliers.truncate(limit);
    }

    if args.count {
        println!("{}", suppliers.len());
        return Ok(());
    }
    if suppliers.is_empty() {
        println!("No suppliers found.");
        return Ok(());
    }

    match list_format(global.output) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&suppliers).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&suppliers).into_diagnostic()?);
        }
        format => {
            let headers = ["NAME", "CATEGORY", "PLACE", "CONTACT", "CONTRACT", "STATUS"];
            let rows: Vec<Vec<String>> = suppliers
                .iter()
                .map(|s| {
                    vec![
                        truncate_str(&s.name, 24),
                        s.category_name().to_string(),
                        opt_cell(s.place.as_deref()),
                        opt_cell(s.contact_person.as_deref()),
                        s.contract.clone(),
                        s.status.to_string(),
                    ]
                })
                .collect();
            super::utils::print_rows(&headers, &rows, format)?;
        }
    }
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let (project, _profiles) = super::utils::project_context()?;

    let suppliers: Vec<Supplier> = load_all(&project)?;
    let supplier = find_record(&suppliers, &args.query)?;

    match global.output {
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(supplier).into_diagnostic()?);
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(supplier).into_diagnostic()?
            );
        }
        _ => print_card(supplier),
    }
    Ok(())
}

fn print_card(supplier: &Supplier) {
    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("ID").bold(), style(&supplier.id).cyan());
    println!(
        "{}: {}",
        style("Name").bold(),
        style(&supplier.name).yellow()
    );
    println!("{}: {}", style("Category").bold(), supplier.category_name());
    println!("{}: {}", style("Status").bold(), supplier.status);
    println!("{}", style("─".repeat(60)).dim());
    println!();

    println!(
        "{}: {}",
        style("Contact").bold(),
        opt_cell(supplier.contact_person.as_deref())
    );
    println!(
        "{}: {}",
        style("Email").bold(),
        opt_cell(supplier.email.as_deref())
    );
    println!(
        "{}: {}",
        style("Phone").bold(),
        opt_cell(supplier.phone.as_deref())
    );
    println!(
        "{}: {}",
        style("Place").bold(),
        opt_cell(supplier.place.as_deref())
    );
    println!("{}: {}", style("Contract").bold(), supplier.contract);
    println!(
        "{}: {}",
        style("Website").bold(),
        opt_cell(supplier.website.as_deref())
    );

    if let Some(ref notes) = supplier.notes {
        if !notes.trim().is_empty() {
            println!();
            println!("{}", style("Notes:").bold());
            println!("{}", notes);
        }
    }
    println!("{}", style("─".repeat(60)).dim());
}
