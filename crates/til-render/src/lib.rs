//! til-render - Template rendering and README emission.
//!
//! Takes the scanner's collection, wraps it in a template-facing context,
//! and renders a user-supplied minijinja template into the final README
//! document. Emission is two-fold: the document is echoed to stdout between
//! separator lines for CI logs, then written to `<root>/README.md`.
//!
//! # Architecture
//!
//! ```text
//! til-render
//! ├── renderer.rs - ReadmeRenderer + dateformat/counter helpers + emission
//! ├── context.rs  - ReadmeContext: the template variable surface
//! └── error.rs    - RenderError
//! ```

// ============================================================================
// Module declarations
// ============================================================================

mod context;
mod error;
mod renderer;

// ============================================================================
// Public API re-exports
// ============================================================================

pub use context::ReadmeContext;
pub use error::RenderError;
pub use renderer::{README_FILE, ReadmeRenderer, echo_document, write_readme};
