//! Whole-message transformation.

use crate::{
    config::Config,
    exceptions::{extract, restore},
    extensions::{ExtensionOracle, ExtensionSet},
    rewrite,
};

/// Rewrite an outgoing message.
///
/// Protected spans are swapped for placeholders, the rewrite rules run over
/// the result, and the spans are put back. Empty input is returned as is.
/// The function never fails; malformed Markdown simply yields fewer protected
/// spans.
///
/// # Examples
///
/// ```
/// use smartcap::{Config, transform};
///
/// let oracle = |ext: &str| ext == "pdf";
/// let out = transform("see report.pdf. thanks", &Config::default(), &oracle);
/// assert_eq!(out, "See report.pdf. Thanks");
/// ```
#[must_use]
pub fn transform<O>(text: &str, config: &Config, oracle: &O) -> String
where
    O: ExtensionOracle + ?Sized,
{
    if text.is_empty() {
        return String::new();
    }
    let (working, exceptions) = extract(text, oracle);
    let rewritten = rewrite::apply(&working, config);
    restore(&rewritten, &exceptions)
}

/// [`transform`] using the bundled extension list.
#[must_use]
pub fn transform_with_bundled(text: &str, config: &Config) -> String {
    transform(text, config, ExtensionSet::bundled())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_files(_: &str) -> bool {
        false
    }

    #[test]
    fn empty_input_is_identity() {
        assert_eq!(transform("", &Config::default(), &no_files), "");
    }

    #[test]
    fn only_protected_span_still_runs_pipeline() {
        let config = Config {
            dot_at_end: true,
            ..Config::default()
        };
        assert_eq!(
            transform("https://example.com", &config, &no_files),
            "https://example.com."
        );
    }

    #[test]
    fn unprotected_file_name_is_capitalized() {
        assert_eq!(
            transform("open notes.md", &Config::default(), &no_files),
            "Open notes.Md"
        );
        assert_eq!(
            transform("open notes.md", &Config::default(), &|e: &str| e == "md"),
            "Open notes.md"
        );
    }

    #[test]
    fn bundled_list_protects_common_files() {
        assert_eq!(
            transform_with_bundled("see main.rs and data.json", &Config::default()),
            "See main.rs and data.json"
        );
    }
}
