//! YAML error diagnostics - syntax errors carry their source location

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors from reading or parsing record files
#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error("failed to read YAML file")]
    #[diagnostic(code(pantry::yaml::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),
}

/// A YAML syntax or shape error tied to its position in the file.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid YAML in {filename}")]
#[diagnostic(code(pantry::yaml::syntax))]
pub struct YamlSyntaxError {
    /// Path of the offending file, for the headline message
    pub filename: String,
    /// The underlying parser message
    pub message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{message}")]
    span: Option<SourceSpan>,
}

impl YamlSyntaxError {
    /// Wrap a serde_yml error, pinning it to an offset in `content`
    /// when the parser reported one.
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let span = err.location().and_then(|loc| {
            if content.is_empty() {
                return None;
            }
            let at = loc.index().min(content.len() - 1);
            Some(SourceSpan::from(at..at + 1))
        });
        Self {
            filename: filename.to_string(),
            message: err.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span,
        }
    }
}
