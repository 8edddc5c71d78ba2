//! Filesystem walk that turns markdown files into notes.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::collection::TilCollection;
use crate::dates::DateSource;
use crate::error::ScanError;
use crate::note::Til;

/// Scans a repository tree for TIL notes.
///
/// A note is any `*.md` file at least one directory below the root; its
/// category is always the immediate parent directory, however deep the file
/// sits. The root's own `README.md` is outside the walk by construction,
/// and `readme.md` files inside categories are skipped by name.
#[derive(Debug, Clone)]
pub struct TilScanner {
    root: PathBuf,
    repository: String,
}

impl TilScanner {
    /// Create a scanner over `root` that links notes into `repository`,
    /// an `owner/name` identifier on the hosting service.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, repository: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            repository: repository.into(),
        }
    }

    /// Walk the tree and collect every note.
    ///
    /// The walk visits entries sorted by file name, so discovery order is
    /// deterministic for a given tree. Every markdown path is recorded in
    /// the collection's path list before the `readme.md` filter applies.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] when a note cannot be read or has no title
    /// line. Failed date lookups are not errors; the note is kept with an
    /// unknown date.
    pub fn scan(&self, dates: &dyn DateSource) -> Result<TilCollection, ScanError> {
        let mut collection = TilCollection::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "md") {
                continue;
            }

            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            collection.record_path(relative.to_string_lossy().to_string());

            let file_name = entry.file_name().to_string_lossy().to_string();
            if file_name.eq_ignore_ascii_case("readme.md") {
                debug!(path = %relative.display(), "skipping readme file");
                continue;
            }

            let Some(category) = path
                .parent()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy().to_string())
            else {
                continue;
            };

            let til = Til {
                title: read_title(path)?,
                link: format!(
                    "https://github.com/{}/{}/{}",
                    self.repository, category, file_name
                ),
                category,
                date_added: dates.first_added(relative),
            };
            collection.push(til);
        }

        info!(
            notes = collection.len(),
            categories = collection.categories.len(),
            "scanned {}",
            self.root.display()
        );
        Ok(collection)
    }
}

/// Extract a note's title: the first line, with one leading `#` and the
/// surrounding whitespace stripped. Files without a line break have no
/// title line and are rejected.
fn read_title(path: &Path) -> Result<String, ScanError> {
    let content = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let Some((first_line, _)) = content.split_once('\n') else {
        return Err(ScanError::MissingTitle(path.to_path_buf()));
    };
    let stripped = first_line.strip_prefix('#').unwrap_or(first_line);
    Ok(stripped.trim().to_string())
}
