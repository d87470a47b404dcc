//! Record loading - reading YAML record files into typed vectors

use thiserror::Error;
use walkdir::WalkDir;

use crate::core::project::Project;
use crate::core::record::Record;
use crate::entities::{Employee, Flavor, Ingredient, Supplier, Utensil};
use crate::yaml::{parse_yaml_file, YamlError};

/// Load every record of one resource type, sorted by name.
///
/// A missing resource directory is an empty resource, not an error;
/// projects created before a resource existed stay loadable.
pub fn load_all<T: Record>(project: &Project) -> Result<Vec<T>, YamlError> {
    let dir = project.root().join(T::DIR);
    let mut records: Vec<T> = Vec::new();
    if !dir.exists() {
        return Ok(records);
    }
    for entry in WalkDir::new(&dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "yaml") {
            records.push(parse_yaml_file(path)?);
        }
    }
    records.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));
    Ok(records)
}

/// Every record in the project, loaded in one pass.
#[derive(Debug, Default)]
pub struct Inventory {
    pub flavors: Vec<Flavor>,
    pub ingredients: Vec<Ingredient>,
    pub utensils: Vec<Utensil>,
    pub employees: Vec<Employee>,
    pub suppliers: Vec<Supplier>,
}

impl Inventory {
    pub fn load(project: &Project) -> Result<Self, YamlError> {
        Ok(Self {
            flavors: load_all(project)?,
            ingredients: load_all(project)?,
            utensils: load_all(project)?,
            employees: load_all(project)?,
            suppliers: load_all(project)?,
        })
    }
}

#[derive(Debug, Error, miette::Diagnostic)]
pub enum FindError {
    #[error("no {resource} found matching '{query}'")]
    #[diagnostic(code(pantry::find::not_found))]
    NotFound {
        resource: &'static str,
        query: String,
    },

    #[error("'{query}' matches more than one {resource}: {candidates}")]
    #[diagnostic(
        code(pantry::find::ambiguous),
        help("use the record id or a longer name fragment")
    )]
    Ambiguous {
        resource: &'static str,
        query: String,
        candidates: String,
    },
}

/// Resolve a query to a single record.
///
/// Exact id wins, then a case-insensitive exact name, then a unique
/// name substring. More than one substring hit is an error rather than
/// a guess.
pub fn find_record<'a, T: Record>(records: &'a [T], query: &str) -> Result<&'a T, FindError> {
    if let Some(record) = records.iter().find(|r| r.id() == query) {
        return Ok(record);
    }
    let lowered = query.to_lowercase();
    if let Some(record) = records.iter().find(|r| r.name().to_lowercase() == lowered) {
        return Ok(record);
    }
    let hits: Vec<&T> = records
        .iter()
        .filter(|r| r.name().to_lowercase().contains(&lowered))
        .collect();
    match hits.len() {
        0 => Err(FindError::NotFound {
            resource: T::RESOURCE,
            query: query.to_string(),
        }),
        1 => Ok(hits[0]),
        _ => Err(FindError::Ambiguous {
            resource: T::RESOURCE,
            query: query.to_string(),
            candidates: hits
                .iter()
                .map(|r| r.name())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}
