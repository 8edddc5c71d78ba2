//! Date source seam for version-history lookups.
//!
//! The scanner asks an injected [`DateSource`] when each file was first
//! committed, so history access stays swappable and tests run without a
//! real repository.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Looks up when a root-relative path was first added to version history.
pub trait DateSource {
    /// Timestamp of the addition event for `path`, or `None` when history
    /// is unavailable. A miss is recoverable by contract: callers record an
    /// unknown date and keep going.
    fn first_added(&self, path: &Path) -> Option<DateTime<Utc>>;
}

/// In-memory [`DateSource`] returning preconfigured dates.
#[derive(Debug, Clone, Default)]
pub struct FixedDates {
    dates: HashMap<PathBuf, DateTime<Utc>>,
}

impl FixedDates {
    /// Create an empty source; every lookup misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date returned for `path`.
    #[must_use]
    pub fn with(mut self, path: impl Into<PathBuf>, date: DateTime<Utc>) -> Self {
        self.dates.insert(path.into(), date);
        self
    }
}

impl DateSource for FixedDates {
    fn first_added(&self, path: &Path) -> Option<DateTime<Utc>> {
        self.dates.get(path).copied()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_fixed_dates_hit_and_miss() {
        let added = Utc.with_ymd_and_hms(2020, 8, 26, 0, 0, 0).unwrap();
        let dates = FixedDates::new().with("bash/aliases.md", added);

        assert_eq!(dates.first_added(Path::new("bash/aliases.md")), Some(added));
        assert_eq!(dates.first_added(Path::new("bash/missing.md")), None);
    }
}
