//! Minijinja-backed README rendering and emission.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::DateTime;
use minijinja::{Environment, UndefinedBehavior};
use tracing::{debug, info};

use crate::context::ReadmeContext;
use crate::error::RenderError;

/// Name of the generated index file, relative to the repository root.
pub const README_FILE: &str = "README.md";

/// Separator line bracketing the echoed document on stdout.
const SEPARATOR: &str = "------------------------------------------------------------";

/// Renders README templates.
///
/// Templates are user supplied, so the environment is strict: referencing
/// an undefined variable fails the render instead of silently emitting
/// nothing. Two helpers are registered for the pass-through configuration
/// strings, the `dateformat` filter and the `counter` function.
#[derive(Debug, Clone)]
pub struct ReadmeRenderer {
    env: Environment<'static>,
}

impl ReadmeRenderer {
    /// Create a renderer with the standard helpers registered.
    #[must_use]
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("dateformat", dateformat);
        env.add_function("counter", counter);
        Self { env }
    }

    /// Render the template at `template_path` with `context`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the template cannot be read, fails to
    /// parse, or references undefined variables.
    pub fn render(
        &self,
        template_path: &Path,
        context: &ReadmeContext,
    ) -> Result<String, RenderError> {
        let source = fs::read_to_string(template_path).map_err(|source| {
            RenderError::TemplateRead {
                path: template_path.to_path_buf(),
                source,
            }
        })?;
        debug!(template = %template_path.display(), "rendering readme");
        Ok(self.env.render_str(&source, context)?)
    }
}

impl Default for ReadmeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Echo the finished document to stdout, bracketed by two separator lines
/// on each side. The document is printed verbatim, without a trailing
/// newline of its own.
pub fn echo_document(document: &str) {
    println!("{SEPARATOR}");
    println!("{SEPARATOR}");
    print!("{document}");
    println!("{SEPARATOR}");
    println!("{SEPARATOR}");
}

/// Write the finished document to `<root>/README.md`, replacing any
/// previous version.
///
/// # Errors
///
/// Returns [`RenderError::Write`] when the file cannot be written.
pub fn write_readme(root: &Path, document: &str) -> Result<(), RenderError> {
    let path = root.join(README_FILE);
    fs::write(&path, document).map_err(|source| RenderError::Write {
        path: path.clone(),
        source,
    })?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Format an RFC 3339 instant with a strftime-style format string.
///
/// Unknown dates (`none`) render as the empty string. A format string with
/// invalid specifiers falls back to the raw RFC 3339 value, so a
/// configuration typo stays visible instead of erasing every date.
fn dateformat(value: Option<String>, format: String) -> String {
    let Some(raw) = value else {
        return String::new();
    };
    let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) else {
        return String::new();
    };
    let mut formatted = String::new();
    if write!(formatted, "{}", parsed.format(&format)).is_err() {
        return raw;
    }
    formatted
}

/// Expand a counter label: the first `%d` in `format` becomes `count`.
/// An empty format yields an empty label.
fn counter(format: String, count: usize) -> String {
    if format.is_empty() {
        return String::new();
    }
    format.replacen("%d", &count.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use til_scanner::{CategoryGroup, Til};

    fn sample_context() -> ReadmeContext {
        let til = Til {
            title: "Useful aliases".to_string(),
            link: "https://github.com/jane/til/bash/aliases.md".to_string(),
            category: "bash".to_string(),
            date_added: Some("2020-08-26T17:32:10Z".parse().unwrap()),
        };
        ReadmeContext {
            categories: vec![CategoryGroup {
                name: "bash".to_string(),
                tils: vec![til.clone()],
            }],
            all_tils: vec!["bash/aliases.md".to_string()],
            description: "# TIL\n".to_string(),
            footer: "the footer".to_string(),
            most_recent: vec![til],
            date_format: "%Y-%m-%d".to_string(),
            tils_counter_format: "_%d TILs and counting..._".to_string(),
        }
    }

    fn render_source(source: &str, context: &ReadmeContext) -> Result<String, RenderError> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("template.md.j2");
        fs::write(&path, source).unwrap();
        ReadmeRenderer::new().render(&path, context)
    }

    #[test]
    fn test_render_iterates_categories() {
        let source = "{% for group in categories %}### {{ group.name }}\n\
                      {% for til in group.tils %}- [{{ til.title }}]({{ til.link }})\n\
                      {% endfor %}{% endfor %}";
        let output = render_source(source, &sample_context()).unwrap();
        assert!(output.contains("### bash"));
        assert!(output.contains("- [Useful aliases](https://github.com/jane/til/bash/aliases.md)"));
    }

    #[test]
    fn test_render_applies_dateformat_and_counter() {
        let source = "{{ counter(tils_counter_format, all_tils | length) }}\n\
                      {% for til in most_recent %}{{ til.date_added | dateformat(date_format) }}\n\
                      {% endfor %}";
        let output = render_source(source, &sample_context()).unwrap();
        assert!(output.contains("_1 TILs and counting..._"));
        assert!(output.contains("2020-08-26"));
    }

    #[test]
    fn test_render_rejects_undefined_variables() {
        let err = render_source("{{ no_such_variable }}", &sample_context()).unwrap_err();
        assert!(matches!(err, RenderError::Template(_)));
    }

    #[test]
    fn test_render_missing_template_file() {
        let dir = TempDir::new().unwrap();
        let err = ReadmeRenderer::new()
            .render(&dir.path().join("absent.md.j2"), &sample_context())
            .unwrap_err();
        assert!(matches!(err, RenderError::TemplateRead { .. }));
    }

    #[test]
    fn test_dateformat_formats_known_dates() {
        let value = Some("2020-08-26T17:32:10Z".to_string());
        assert_eq!(dateformat(value, "%d/%m/%Y".to_string()), "26/08/2020");
    }

    #[test]
    fn test_dateformat_unknown_date_is_empty() {
        assert_eq!(dateformat(None, "%Y-%m-%d".to_string()), "");
        assert_eq!(dateformat(Some("not a date".to_string()), "%Y".to_string()), "");
    }

    #[test]
    fn test_dateformat_bad_format_falls_back_to_raw() {
        let raw = "2020-08-26T17:32:10Z";
        let formatted = dateformat(Some(raw.to_string()), "%q".to_string());
        assert_eq!(formatted, raw);
    }

    #[test]
    fn test_counter_expands_placeholder() {
        assert_eq!(
            counter("_%d TILs and counting..._".to_string(), 42),
            "_42 TILs and counting..._"
        );
        assert_eq!(counter(String::new(), 42), "");
        assert_eq!(counter("no placeholder".to_string(), 42), "no placeholder");
    }

    #[test]
    fn test_separator_is_sixty_dashes() {
        assert_eq!(SEPARATOR.len(), 60);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_write_readme_replaces_previous_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(README_FILE), "old").unwrap();
        write_readme(dir.path(), "# New index\n").unwrap();
        let written = fs::read_to_string(dir.path().join(README_FILE)).unwrap();
        assert_eq!(written, "# New index\n");
    }
}
