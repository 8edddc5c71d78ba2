//! Run configuration.
//!
//! One immutable [`Config`] is built in `main` from CLI flags and their
//! environment fallbacks, then passed explicitly to the pipeline. Nothing
//! reads the environment after startup.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Which template renders the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Presentation {
    /// Nested bullet lists per category.
    List,
    /// One table per category.
    Table,
}

/// Immutable settings for one generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository root that is scanned and receives the README.
    pub repo_path: PathBuf,

    /// `owner/name` identifier used to build absolute note links.
    pub repository: String,

    /// Template for the list presentation.
    pub list_template: PathBuf,

    /// Template for the table presentation.
    pub table_template: PathBuf,

    /// Selected presentation.
    pub presentation: Presentation,

    /// Markdown block rendered above the index, passed through verbatim.
    pub description: String,

    /// Markdown block rendered below the index, passed through verbatim.
    pub footer: String,

    /// How many recently added notes to surface. Zero disables the feature.
    pub list_most_recent: usize,

    /// strftime-style format applied by the template's `dateformat` filter.
    pub date_format: String,

    /// Counter label with a `%d` placeholder. Empty disables the counter.
    pub tils_counter_format: String,
}

impl Config {
    /// Template path for the selected presentation.
    #[must_use]
    pub fn template_path(&self) -> &Path {
        match self.presentation {
            Presentation::List => &self.list_template,
            Presentation::Table => &self.table_template,
        }
    }
}

/// Parse the most-recent count leniently: anything that is not a
/// non-negative integer disables the feature instead of failing the run.
#[must_use]
pub fn parse_most_recent(raw: &str) -> usize {
    raw.trim().parse().unwrap_or(0)
}
