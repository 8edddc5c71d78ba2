//! Error types for note discovery.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal scan failures. Any of these aborts the whole collection; date
/// lookups are deliberately not represented here because they degrade to
/// an unknown date instead.
#[derive(Error, Debug)]
pub enum ScanError {
    /// A note file could not be read.
    #[error("cannot read note {}: {source}", .path.display())]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A note file has no line break, so no title line can be split off.
    #[error("note {} has fewer than two lines, cannot extract a title", .0.display())]
    MissingTitle(PathBuf),
}
