//! Output formatting utilities

use crate::cli::OutputFormat;

/// Resolve `auto` for list output.
///
/// Lists render as a table unless a machine format is requested.
/// Single records and reports stay styled text; their commands match
/// on the format directly and only honor `json` and `yaml`.
pub fn list_format(format: OutputFormat) -> OutputFormat {
    match format {
        OutputFormat::Auto => OutputFormat::Table,
        other => other,
    }
}
