//! `pantry employee` commands - list and show staff records

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{date_cell, opt_cell, truncate_str};
use crate::cli::output::list_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::labels::format_peso;
use crate::core::loader::{find_record, load_all};
use crate::entities::employee::{Employee, Position, Shift};

#[derive(Subcommand, Debug)]
pub enum EmployeeCommands {
    /// List employees with filtering
    List(ListArgs),

    /// Show an employee's details
    Show(ShowArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Position,
    Salary,
    Hired,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by position
    #[arg(long, short = 'p')]
    pub position: Option<Position>,

    /// Filter by shift
    #[arg(long)]
    pub shift: Option<Shift>,

    /// Search in name and email
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
    /// Employee id or name (fragment)
    pub query: String,
}

pub fn run(cmd: EmployeeCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        EmployeeCommands::List(args) => run_list(args, global),
        EmployeeCommands::Show(args) => run_show(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (project, _profiles) = super::utils::project_context()?;

    let mut employees: Vec<Employee> = load_all(&project)?;
    employees.retain(|e| {
        args.position.is_none_or(|p| e.position == p)
            && args.shift.is_none_or(|s| e.shift == s)
            && args.search.as_deref().is_none_or(|q| {
                let q = q.to_lowercase();
                e.name.to_lowercase().contains(&q)
                    || e.email
                        .as_deref()
                        .unwrap_or_default()
                        .to_lowercase()
                        .contains(&q)
            })
    });

    match args.sort {
        // load_all already sorts by name
        SortKey::Name => {}
        SortKey::Position => employees.sort_by_key(|e| e.position.label()),
        SortKey::Salary => {
            employees.sort_by(|a, b| {
                a.salary
                    .unwrap_or_default()
                    .total_cmp(&b.salary.unwrap_or_default())
            });
        }
        SortKey::Hired => employees.sort_by_key(|e| e.hire_date),
    }
    if args.reverse {
        employees.reverse();
    }
    if let Some(limit) = args.limit {
        employees.truncate(limit);
    }

    if args.count {
        println!("{}", employees.len());
        return Ok(());
    }
    if employees.is_empty() {
        println!("No employees found.");
        return Ok(());
    }

    match list_format(global.output) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&employees).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&employees).into_diagnostic()?);
        }
        format => {
            let headers = ["NAME", "POSITION", "SHIFT", "EMAIL", "PHONE", "HIRED"];
            let rows: Vec<Vec<String>> = employees
                .iter()
                .map(|e| {
                    vec![
                        truncate_str(&e.name, 24),
                        e.position.label().to_string(),
                        e.shift.label().to_string(),
                        opt_cell(e.email.as_deref()),
                        opt_cell(e.phone.as_deref()),
                        date_cell(e.hire_date),
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

    let employees: Vec<Employee> = load_all(&project)?;
    let employee = find_record(&employees, &args.query)?;

    match global.output {
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(employee).into_diagnostic()?);
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(employee).into_diagnostic()?
            );
        }
        _ => print_card(employee),
    }
    Ok(())
}

fn print_card(employee: &Employee) {
    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("ID").bold(), style(&employee.id).cyan());
    println!(
        "{}: {}",
        style("Name").bold(),
        style(&employee.name).yellow()
    );
    println!(
        "{}: {}",
        style("Position").bold(),
        employee.position.label()
    );
    println!("{}: {}", style("Shift").bold(), employee.shift.label());
    println!("{}", style("─".repeat(60)).dim());
    println!();

    println!(
        "{}: {}",
        style("Email").bold(),
        opt_cell(employee.email.as_deref())
    );
    println!(
        "{}: {}",
        style("Phone").bold(),
        opt_cell(employee.phone.as_deref())
    );
    println!(
        "{}: {}",
        style("Salary").bold(),
        format_peso(employee.salary)
    );
    println!(
        "{}: {}",
        style("Hired").bold(),
        date_cell(employee.hire_date)
    );

    if let Some(ref notes) = employee.performance_notes {
        if !notes.trim().is_empty() {
            println!();
            println!("{}", style("Performance notes:").bold());
            println!("{}", notes);
        }
    }
    println!("{}", style("─".repeat(60)).dim());
}
