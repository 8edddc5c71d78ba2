//! The generation pipeline: scan, select, render, emit.

use anyhow::Context as _;
use tracing::info;

use til_render::{ReadmeContext, ReadmeRenderer, echo_document, write_readme};
use til_scanner::{DateSource, TilScanner, most_recent};

use crate::config::Config;

/// Run one generation pass.
///
/// The date source and renderer are injected so tests can replace git with
/// canned dates and exercise the full pipeline against temp templates.
///
/// # Errors
///
/// Fails when the scan, the template render, or the README write fails.
/// Date lookups never fail the run.
pub fn run(
    config: &Config,
    dates: &dyn DateSource,
    renderer: &ReadmeRenderer,
) -> anyhow::Result<()> {
    let collection = TilScanner::new(&config.repo_path, &config.repository)
        .scan(dates)
        .context("collecting notes")?;

    let recent = most_recent(&collection.tils, config.list_most_recent);
    let note_count = collection.tils.len();

    let context = ReadmeContext {
        categories: collection.categories,
        all_tils: collection.paths,
        description: config.description.clone(),
        footer: config.footer.clone(),
        most_recent: recent,
        date_format: config.date_format.clone(),
        tils_counter_format: config.tils_counter_format.clone(),
    };

    let document = renderer
        .render(config.template_path(), &context)
        .context("rendering readme template")?;

    echo_document(&document);
    write_readme(&config.repo_path, &document).context("writing README.md")?;

    info!(
        notes = note_count,
        presentation = ?config.presentation,
        "readme generated"
    );
    Ok(())
}
