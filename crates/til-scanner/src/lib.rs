//! til-scanner - Note discovery for TIL repositories.
//!
//! Walks a repository of markdown notes laid out as `<category>/<file>.md`,
//! derives each note's title, category, and absolute link, and attaches the
//! date the file was first committed via an injected [`DateSource`].
//!
//! # Architecture
//!
//! ```text
//! til-scanner
//! ├── scan.rs        - TilScanner: walk, filter, note derivation
//! ├── collection.rs  - TilCollection: category groups + flat view
//! ├── recent.rs      - most_recent: stable recency selection
//! ├── dates.rs       - DateSource trait + FixedDates test double
//! ├── note.rs        - Til: the template-facing note record
//! └── error.rs       - ScanError
//! ```

// ============================================================================
// Module declarations
// ============================================================================

mod collection;
mod dates;
mod error;
mod note;
mod recent;
mod scan;

// ============================================================================
// Public API re-exports
// ============================================================================

pub use collection::{CategoryGroup, TilCollection};
pub use dates::{DateSource, FixedDates};
pub use error::ScanError;
pub use note::Til;
pub use recent::most_recent;
pub use scan::TilScanner;
