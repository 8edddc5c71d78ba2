//! Template-facing render context.

use serde::Serialize;

use til_scanner::{CategoryGroup, Til};

/// Everything a README template can see.
///
/// Field names are the template variable names. The two `*_format` strings
/// are configuration passed through verbatim; templates apply them with the
/// `dateformat` filter and the `counter` function.
#[derive(Debug, Clone, Serialize)]
pub struct ReadmeContext {
    /// Notes grouped by category, in discovery order.
    pub categories: Vec<CategoryGroup>,

    /// Root-relative paths of every markdown file seen by the scan,
    /// including `readme.md` files. Its length is the traditional
    /// "N TILs and counting" number.
    pub all_tils: Vec<String>,

    /// Free-form markdown block rendered above the index.
    pub description: String,

    /// Free-form markdown block rendered below the index.
    pub footer: String,

    /// The most recently added notes, newest first. Empty when the
    /// recent-notes feature is off.
    pub most_recent: Vec<Til>,

    /// strftime-style format for `dateformat`.
    pub date_format: String,

    /// Note counter label with a `%d` placeholder for `counter`.
    pub tils_counter_format: String,
}
