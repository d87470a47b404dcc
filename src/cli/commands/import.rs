//! `pantry import` command - convert JSON exports into record files
//!
//! Accepts the JSON arrays produced by `mongoexport` (or the upstream
//! REST API) and writes one YAML file per record under the matching
//! resource directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use console::style;
use miette::Result;

use crate::core::project::Project;
use crate::core::record::Record;
use crate::entities::{Employee, Flavor, Ingredient, Supplier, Utensil};
use crate::yaml::write_yaml_file;

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Resource type the export contains
    pub resource: ResourceKind,

    /// Path to the JSON export (an array of records)
    pub file: PathBuf,

    /// Overwrite records that already exist
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ResourceKind {
    Flavor,
    Ingredient,
    Utensil,
    Employee,
    Supplier,
}

pub fn run(args: ImportArgs) -> Result<()> {
    // Deliberately skips config loading so a broken config.yaml cannot
    // block an import.
    let project = Project::discover()?;

    match args.resource {
        ResourceKind::Flavor => import_records::<Flavor>(&project, &args.file, args.force),
        ResourceKind::Ingredient => import_records::<Ingredient>(&project, &args.file, args.force),
        ResourceKind::Utensil => import_records::<Utensil>(&project, &args.file, args.force),
        ResourceKind::Employee => import_records::<Employee>(&project, &args.file, args.force),
        ResourceKind::Supplier => import_records::<Supplier>(&project, &args.file, args.force),
    }
}

fn import_records<T: Record>(project: &Project, file: &Path, force: bool) -> Result<()> {
    let text = fs::read_to_string(file)
        .map_err(|e| miette::miette!("Failed to read {}: {}", file.display(), e))?;
    let records: Vec<T> = serde_json::from_str(&text)
        .map_err(|e| miette::miette!("Failed to parse {}: {}", file.display(), e))?;

    let dir = project.root().join(T::DIR);
    fs::create_dir_all(&dir)
        .map_err(|e| miette::miette!("Failed to create {}: {}", dir.display(), e))?;

    let mut imported = 0usize;
    let mut skipped = 0usize;
    let mut missing_id = 0usize;

    for record in &records {
        let id = record.id().trim();
        if id.is_empty() {
            println!(
                "{} \"{}\" has no id, skipping",
                style("⚠").yellow(),
                record.name()
            );
            missing_id += 1;
            continue;
        }
        let path = dir.join(format!("{}.yaml", sanitize_id(id)));
        if path.exists() && !force {
            skipped += 1;
            continue;
        }
        write_yaml_file(&path, record)?;
        imported += 1;
    }

    println!(
        "{} Imported {} {} record(s)",
        style("✓").green(),
        style(imported).cyan(),
        T::RESOURCE
    );
    println!("   {}", style(dir.display()).dim());
    if skipped > 0 {
        println!(
            "   {} already present, skipped (use {} to overwrite)",
            skipped,
            style("--force").cyan()
        );
    }
    if missing_id > 0 {
        println!("   {} without an id, skipped", missing_id);
    }

    Ok(())
}

/// Keep ids filesystem-safe. Upstream ids are hex object ids, so this
/// only matters for hand-written exports.
fn sanitize_id(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_object_ids_intact() {
        assert_eq!(sanitize_id("664f11bb34abc"), "664f11bb34abc");
    }

    #[test]
    fn sanitize_replaces_path_separators() {
        assert_eq!(sanitize_id("a/b\\c:d"), "a-b-c-d");
    }
}
