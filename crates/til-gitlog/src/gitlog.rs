//! `git log` subprocess bridge for first-added dates.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, warn};

use til_scanner::DateSource;

/// [`DateSource`] backed by the `git` command line tool.
///
/// For each lookup it runs `git log --diff-filter=A --date=rfc -- <path>`
/// inside the repository root and takes the first `Date:` line, which is the
/// newest addition event when a file was deleted and re-added. Every failure
/// mode degrades to `None`: git missing, the root not being a repository,
/// the file never committed, or an unparsable date.
#[derive(Debug, Clone)]
pub struct GitLog {
    repo_root: PathBuf,
}

impl GitLog {
    /// Create a source that queries the repository at `repo_root`.
    #[must_use]
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }
}

impl DateSource for GitLog {
    fn first_added(&self, path: &Path) -> Option<DateTime<Utc>> {
        let output = Command::new("git")
            .args(["log", "--diff-filter=A", "--date=rfc", "--"])
            .arg(path)
            .current_dir(&self.repo_root)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        let output = match output {
            Ok(output) => output,
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to spawn git log");
                return None;
            }
        };
        if !output.status.success() {
            warn!(
                path = %path.display(),
                code = output.status.code().unwrap_or(-1),
                stderr = %String::from_utf8_lossy(&output.stderr),
                "git log exited with failure"
            );
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let date = first_date_line(&stdout).and_then(parse_date);
        if date.is_none() {
            debug!(path = %path.display(), "no parsable addition date in git log output");
        }
        date
    }
}

/// Extract the value of the first `Date:` header in a `git log` transcript.
fn first_date_line(log: &str) -> Option<&str> {
    log.lines()
        .find_map(|line| line.strip_prefix("Date:").map(str::trim))
}

/// Parse a date in either RFC 2822 form, as printed by `git log --date=rfc`,
/// or the compact `YYYY-Mon-DD` form. The result is normalized to UTC.
#[must_use]
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%b-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}
