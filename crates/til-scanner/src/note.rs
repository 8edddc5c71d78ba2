//! Note type shared across the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One markdown note discovered under a category directory.
///
/// Everything here is derived at scan time from the file's path, its first
/// line, and version history. Templates receive these fields verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Til {
    /// First line of the file with the leading heading marker stripped.
    pub title: String,

    /// Absolute URL of the note on the hosting service.
    pub link: String,

    /// Name of the note's immediate parent directory.
    pub category: String,

    /// When the file was first added to version history. `None` means the
    /// lookup failed; unknown dates order as oldest everywhere.
    pub date_added: Option<DateTime<Utc>>,
}
