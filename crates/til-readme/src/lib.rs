//! til-readme - README index generation for TIL repositories.
//!
//! Wires the scanner, the git date source, and the renderer into one
//! sequential pipeline: scan the tree, pick the most recent notes, render
//! the selected template, echo the document to stdout, and write it as
//! `README.md` at the repository root.
//!
//! # Architecture
//!
//! ```text
//! til-readme
//! ├── config.rs   - Config + Presentation, built once in main
//! ├── pipeline.rs - run(): scan -> select -> render -> emit
//! ├── cli.rs      - clap surface with environment fallbacks (binary only)
//! └── main.rs     - wiring and tracing setup (binary only)
//! ```

// ============================================================================
// Module declarations
// ============================================================================

mod config;
mod pipeline;

// ============================================================================
// Public API re-exports
// ============================================================================

pub use config::{Config, Presentation, parse_most_recent};
pub use pipeline::run;
