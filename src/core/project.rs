//! Project discovery - locating the .pantry root from anywhere inside it

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory marking a pantry project root
pub const MARKER_DIR: &str = ".pantry";

/// Resource directories scaffolded inside a project
pub const RESOURCE_DIRS: [&str; 5] = [
    "pantry/flavors",
    "pantry/ingredients",
    "pantry/utensils",
    "pantry/employees",
    "pantry/suppliers",
];

#[derive(Debug, Error, miette::Diagnostic)]
pub enum ProjectError {
    #[error("not a pantry project (no .pantry directory found in {start} or any parent)")]
    #[diagnostic(
        code(pantry::project::not_found),
        help("run `pantry init` to set up a project here")
    )]
    NotFound { start: String },

    #[error("failed to access {path}")]
    #[diagnostic(code(pantry::project::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A located pantry project.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Walk up from the current directory until a `.pantry` marker is
    /// found.
    pub fn discover() -> Result<Self, ProjectError> {
        let cwd = std::env::current_dir().map_err(|e| ProjectError::Io {
            path: ".".to_string(),
            source: e,
        })?;
        Self::discover_from(&cwd)
    }

    /// Walk up from an explicit starting directory.
    pub fn discover_from(start: &Path) -> Result<Self, ProjectError> {
        let mut dir = start;
        loop {
            if dir.join(MARKER_DIR).is_dir() {
                return Ok(Self {
                    root: dir.to_path_buf(),
                });
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => {
                    return Err(ProjectError::NotFound {
                        start: start.display().to_string(),
                    })
                }
            }
        }
    }

    /// Scaffold the marker and resource directories under `path`.
    ///
    /// Safe to run on an existing project; directories already present
    /// are left alone.
    pub fn init(path: &Path) -> Result<Self, ProjectError> {
        let mkdir = |dir: PathBuf| -> Result<(), ProjectError> {
            std::fs::create_dir_all(&dir).map_err(|e| ProjectError::Io {
                path: dir.display().to_string(),
                source: e,
            })
        };
        mkdir(path.join(MARKER_DIR))?;
        for dir in RESOURCE_DIRS {
            mkdir(path.join(dir))?;
        }
        Ok(Self {
            root: path.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn marker_dir(&self) -> PathBuf {
        self.root.join(MARKER_DIR)
    }

    /// Project-local config file (may not exist)
    pub fn config_path(&self) -> PathBuf {
        self.marker_dir().join("config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_walks_up_to_marker() {
        let tmp = tempfile::tempdir().unwrap();
        let project = Project::init(tmp.path()).unwrap();
        let nested = tmp.path().join("pantry/flavors");

        let found = Project::discover_from(&nested).unwrap();
        assert_eq!(found.root(), project.root());
    }

    #[test]
    fn discover_fails_outside_a_project() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Project::discover_from(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("not a pantry project"));
    }

    #[test]
    fn init_creates_all_resource_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        Project::init(tmp.path()).unwrap();
        for dir in RESOURCE_DIRS {
            assert!(tmp.path().join(dir).is_dir(), "{dir} missing");
        }
        assert!(tmp.path().join(MARKER_DIR).is_dir());
    }

    #[test]
    fn init_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        Project::init(tmp.path()).unwrap();
        Project::init(tmp.path()).unwrap();
    }
}
