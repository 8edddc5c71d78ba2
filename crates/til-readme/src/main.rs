//! til-readme CLI: scan a TIL repository and regenerate its README index.
//!
//! Configuration comes from flags or their `INPUT_*`/`REPO_PATH`/
//! `GITHUB_REPOSITORY` environment fallbacks, matching the GitHub Action
//! contract.
//!
//! Logging: set `RUST_LOG=debug` (or `info`, `warn`) to see diagnostics on
//! stderr. The generated document itself goes to stdout between separator
//! lines.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use til_gitlog::GitLog;
use til_readme::{Config, parse_most_recent, run};
use til_render::ReadmeRenderer;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config {
        repo_path: cli.repo_path,
        repository: cli.repository,
        list_template: cli.list_template,
        table_template: cli.table_template,
        presentation: cli.presentation,
        description: cli.description,
        footer: cli.footer,
        list_most_recent: parse_most_recent(&cli.list_most_recent),
        date_format: cli.date_format,
        tils_counter_format: cli.tils_counter_format,
    };

    let dates = GitLog::new(&config.repo_path);
    let renderer = ReadmeRenderer::new();
    run(&config, &dates, &renderer)
}
