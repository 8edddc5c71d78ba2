use std::path::PathBuf;

use clap::Parser;

use til_readme::Presentation;

#[derive(Parser)]
#[command(name = "til-readme")]
#[command(about = "Generate a README.md index for a Today-I-Learned note repository")]
pub(crate) struct Cli {
    /// Repository root to scan; README.md is written here.
    #[arg(long, env = "REPO_PATH")]
    pub(crate) repo_path: PathBuf,

    /// `owner/name` identifier used to build absolute note links.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub(crate) repository: String,

    /// Template for the list presentation.
    #[arg(
        long,
        env = "INPUT_LIST_TEMPLATE_PATH",
        default_value = "templates/list.md.j2"
    )]
    pub(crate) list_template: PathBuf,

    /// Template for the table presentation.
    #[arg(
        long,
        env = "INPUT_TABLE_TEMPLATE_PATH",
        default_value = "templates/table.md.j2"
    )]
    pub(crate) table_template: PathBuf,

    /// Which presentation template renders the index.
    #[arg(
        long,
        value_enum,
        env = "INPUT_PRESENTATION_TYPE",
        default_value_t = Presentation::List
    )]
    pub(crate) presentation: Presentation,

    /// Markdown block placed above the index.
    #[arg(long, env = "INPUT_DESCRIPTION", default_value = "")]
    pub(crate) description: String,

    /// Markdown block placed below the index.
    #[arg(long, env = "INPUT_FOOTER", default_value = "")]
    pub(crate) footer: String,

    /// How many recently added notes to surface; 0 or unparsable disables.
    #[arg(long, env = "INPUT_LIST_MOST_RECENT", default_value = "")]
    pub(crate) list_most_recent: String,

    /// Date format applied by the template's `dateformat` filter.
    #[arg(long, env = "INPUT_DATE_FORMAT", default_value = "%Y-%m-%d")]
    pub(crate) date_format: String,

    /// Counter label with a `%d` placeholder; empty disables the counter.
    #[arg(long, env = "INPUT_TILS_COUNTER_FORMAT", default_value = "")]
    pub(crate) tils_counter_format: String,
}
