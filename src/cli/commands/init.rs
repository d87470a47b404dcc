//! `pantry init` command - scaffold a project

use std::fs;
use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::core::config::CONFIG_TEMPLATE;
use crate::core::project::{Project, MARKER_DIR, RESOURCE_DIRS};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Rewrite config.yaml even if one exists
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let existing = args.path.join(MARKER_DIR).is_dir();
    let project = Project::init(&args.path)?;

    let config_path = project.config_path();
    if !config_path.exists() || args.force {
        fs::write(&config_path, CONFIG_TEMPLATE).into_diagnostic()?;
    }

    if existing {
        println!(
            "{} Project already initialized at {}",
            style("✓").green(),
            project.root().display()
        );
        return Ok(());
    }

    println!("{} Initialized pantry project", style("✓").green());
    println!("   {}", style(project.root().display()).dim());
    for dir in RESOURCE_DIRS {
        println!("   {}", style(dir).dim());
    }
    println!();
    println!(
        "Drop YAML records into the directories above, or run {} to load a JSON export.",
        style("pantry import").cyan()
    );
    Ok(())
}
