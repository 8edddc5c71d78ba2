//! til-gitlog - Git-backed date lookups for TIL notes.
//!
//! Implements the scanner's [`DateSource`](til_scanner::DateSource) seam by
//! shelling out to `git log`, asking when each note file was first added to
//! the repository. Lookups degrade to an unknown date instead of failing,
//! so a broken or absent git never aborts a run.
//!
//! # Architecture
//!
//! ```text
//! til-gitlog
//! └── gitlog.rs - GitLog subprocess bridge + date parsing
//! ```

// ============================================================================
// Module declarations
// ============================================================================

mod gitlog;

// ============================================================================
// Public API re-exports
// ============================================================================

pub use gitlog::{GitLog, parse_date};
