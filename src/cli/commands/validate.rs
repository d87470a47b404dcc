//! `pantry validate` command - check record files and configuration

use console::style;
use miette::Result;
use walkdir::WalkDir;

use crate::core::config::Config;
use crate::core::labels::format_quantity;
use crate::core::project::Project;
use crate::core::record::Record;
use crate::entities::{Employee, Flavor, Ingredient, Supplier, Utensil};
use crate::yaml::parse_yaml_file;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Strict mode - warnings become errors
    #[arg(long)]
    pub strict: bool,

    /// Continue validation after first error
    #[arg(long)]
    pub keep_going: bool,

    /// Show summary only, don't show individual files
    #[arg(long)]
    pub summary: bool,
}

/// Validation statistics
#[derive(Default)]
struct ValidationStats {
    files_checked: usize,
    files_passed: usize,
    files_failed: usize,
    total_errors: usize,
    total_warnings: usize,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let project = Project::discover()?;
    let mut stats = ValidationStats::default();

    println!(
        "{} Validating project at {}\n",
        style("→").blue(),
        style(project.root().display()).dim()
    );

    // Configuration first; broken thresholds would skew every
    // classification downstream.
    let config_ok = match Config::load(&project)
        .map_err(miette::Report::new)
        .and_then(|config| config.profiles().map_err(miette::Report::new))
    {
        Ok(_) => {
            if !args.summary {
                println!("{} configuration", style("✓").green());
            }
            true
        }
        Err(report) => {
            stats.total_errors += 1;
            if !args.summary {
                println!("{} configuration", style("✗").red());
                println!("{:?}", report);
            }
            false
        }
    };

    let mut stopped = !config_ok && !args.keep_going;
    if !stopped {
        stopped = validate_dir::<Flavor>(&project, &args, &mut stats, flavor_warnings);
    }
    if !stopped {
        stopped = validate_dir::<Ingredient>(&project, &args, &mut stats, ingredient_warnings);
    }
    if !stopped {
        stopped = validate_dir::<Utensil>(&project, &args, &mut stats, utensil_warnings);
    }
    if !stopped {
        stopped = validate_dir::<Employee>(&project, &args, &mut stats, |_| Vec::new());
    }
    if !stopped {
        validate_dir::<Supplier>(&project, &args, &mut stats, |_| Vec::new());
    }

    // Print summary
    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Validation Summary").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("  Files checked:  {}", style(stats.files_checked).cyan());
    println!("  Files passed:   {}", style(stats.files_passed).green());
    println!("  Files failed:   {}", style(stats.files_failed).red());
    println!("  Total errors:   {}", style(stats.total_errors).red());
    if stats.total_warnings > 0 {
        println!("  Total warnings: {}", style(stats.total_warnings).yellow());
    }
    println!();

    if !config_ok && stats.files_failed == 0 {
        Err(miette::miette!("Validation failed: configuration is invalid"))
    } else if stats.files_failed == 1 {
        Err(miette::miette!("Validation failed: 1 file has errors"))
    } else if stats.files_failed > 1 {
        Err(miette::miette!(
            "Validation failed: {} files have errors",
            stats.files_failed
        ))
    } else {
        println!("{} All files passed validation!", style("✓").green().bold());
        Ok(())
    }
}

/// Check every .yaml file in one resource directory. Returns true when
/// validation should stop early.
fn validate_dir<T: Record>(
    project: &Project,
    args: &ValidateArgs,
    stats: &mut ValidationStats,
    warn: impl Fn(&T) -> Vec<String>,
) -> bool {
    let dir = project.root().join(T::DIR);
    if !dir.is_dir() {
        return false;
    }

    let mut files: Vec<_> = WalkDir::new(&dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "yaml"))
        .collect();
    files.sort();

    for path in files {
        stats.files_checked += 1;
        match parse_yaml_file::<T>(&path) {
            Ok(record) => {
                let warnings = warn(&record);
                if warnings.is_empty() {
                    stats.files_passed += 1;
                    if !args.summary {
                        println!("{} {}", style("✓").green(), path.display());
                    }
                } else if args.strict {
                    stats.files_failed += 1;
                    stats.total_errors += warnings.len();
                    if !args.summary {
                        for warning in &warnings {
                            println!("{} {} - {}", style("✗").red(), path.display(), warning);
                        }
                    }
                    if !args.keep_going {
                        return true;
                    }
                } else {
                    stats.files_passed += 1;
                    stats.total_warnings += warnings.len();
                    if !args.summary {
                        for warning in &warnings {
                            println!("{} {} - {}", style("⚠").yellow(), path.display(), warning);
                        }
                    }
                }
            }
            Err(e) => {
                stats.files_failed += 1;
                stats.total_errors += 1;
                if !args.summary {
                    println!("{} {}", style("✗").red(), path.display());
                    println!("{:?}", miette::Report::new(e));
                }
                if !args.keep_going {
                    return true;
                }
            }
        }
    }
    false
}

fn capacity_warnings(
    quantity_label: &str,
    quantity: f64,
    min: Option<f64>,
    max: Option<f64>,
) -> Vec<String> {
    let mut warnings = Vec::new();
    if let Some(max) = max {
        if quantity > max {
            warnings.push(format!(
                "{} {} exceeds maxStockLevel {}",
                quantity_label,
                format_quantity(quantity),
                format_quantity(max)
            ));
        }
        if let Some(min) = min {
            if min > max {
                warnings.push(format!(
                    "minStockLevel {} exceeds maxStockLevel {}",
                    format_quantity(min),
                    format_quantity(max)
                ));
            }
        }
    }
    warnings
}

fn flavor_warnings(flavor: &Flavor) -> Vec<String> {
    capacity_warnings(
        "jars",
        flavor.jars,
        flavor.min_stock_level,
        flavor.max_stock_level,
    )
}

fn ingredient_warnings(ingredient: &Ingredient) -> Vec<String> {
    capacity_warnings(
        "quantity",
        ingredient.quantity,
        ingredient.min_stock_level,
        ingredient.max_stock_level,
    )
}

fn utensil_warnings(utensil: &Utensil) -> Vec<String> {
    capacity_warnings(
        "quantity",
        utensil.quantity,
        utensil.min_stock_level,
        utensil.max_stock_level,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flavor(yaml: &str) -> Flavor {
        serde_yml::from_str(yaml).unwrap()
    }

    #[test]
    fn over_capacity_warns() {
        let f = flavor("id: x\nname: Taro\njars: 12\nmaxStockLevel: 10\n");
        let warnings = flavor_warnings(&f);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("jars 12 exceeds maxStockLevel 10"));
    }

    #[test]
    fn inverted_floor_warns() {
        let f = flavor("id: x\nname: Taro\njars: 5\nminStockLevel: 20\nmaxStockLevel: 10\n");
        let warnings = flavor_warnings(&f);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("minStockLevel 20 exceeds maxStockLevel 10"));
    }

    #[test]
    fn within_capacity_is_clean() {
        let f = flavor("id: x\nname: Taro\njars: 5\nminStockLevel: 2\nmaxStockLevel: 10\n");
        assert!(flavor_warnings(&f).is_empty());
    }

    #[test]
    fn no_capacity_never_warns() {
        let f = flavor("id: x\nname: Taro\njars: 500\n");
        assert!(flavor_warnings(&f).is_empty());
    }
}
