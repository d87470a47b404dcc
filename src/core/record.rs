//! Record trait - common interface for all inventory record types

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

/// Common trait for all pantry record types.
///
/// Records live one-per-file under `pantry/<resource>/` and keep the
/// upstream export's identifiers, so loading and import can be written
/// once and reused across resources.
pub trait Record: Serialize + DeserializeOwned {
    /// Singular resource name (e.g. "flavor")
    const RESOURCE: &'static str;

    /// Directory under the project root holding this resource's files
    const DIR: &'static str;

    /// The record's upstream identifier
    fn id(&self) -> &str;

    /// Human name of the record
    fn name(&self) -> &str;

    /// Creation timestamp from upstream, when the export carried one
    fn created(&self) -> Option<DateTime<Utc>>;
}
