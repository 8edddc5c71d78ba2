//! Error types for rendering and README emission.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal rendering failures.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The template file could not be read.
    #[error("cannot read template {}: {source}", .path.display())]
    TemplateRead {
        /// Path of the template.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The template failed to parse or render.
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),

    /// The finished document could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
