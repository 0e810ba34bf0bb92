//! Known file extensions.
//!
//! The extractor asks an [`ExtensionOracle`] whether the suffix of a dotted
//! token is a real file extension. [`ExtensionSet`] is the production oracle,
//! built from a newline-separated list; any `Fn(&str) -> bool` also works,
//! which keeps tests independent of the bundled list.

use std::{collections::HashSet, fs, path::Path, sync::LazyLock};

use thiserror::Error;

static BUNDLED_LIST: &str = include_str!("../data/extensions.txt");

static BUNDLED: LazyLock<ExtensionSet> = LazyLock::new(|| ExtensionSet::parse(BUNDLED_LIST));

#[derive(Error, Debug)]
pub enum ExtensionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Membership test for file extensions.
pub trait ExtensionOracle {
    /// Exact, case-sensitive lookup. `ext` has no leading dot.
    fn is_known_extension(&self, ext: &str) -> bool;
}

impl<F> ExtensionOracle for F
where
    F: Fn(&str) -> bool,
{
    fn is_known_extension(&self, ext: &str) -> bool {
        self(ext)
    }
}

/// An immutable set of extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    known: HashSet<String>,
}

impl ExtensionSet {
    /// Build a set from one extension per line.
    ///
    /// Surrounding whitespace is stripped. Blank lines and lines starting with
    /// `#` are skipped. Entries are stored as written, without case folding.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartcap::extensions::{ExtensionOracle, ExtensionSet};
    ///
    /// let set = ExtensionSet::parse("# docs\npdf\ntxt\n");
    /// assert!(set.is_known_extension("pdf"));
    /// assert!(!set.is_known_extension("PDF"));
    /// ```
    #[must_use]
    pub fn parse(list: &str) -> Self {
        list.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect()
    }

    /// Read a list file at startup.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, ExtensionError> {
        let list = fs::read_to_string(path)?;
        let set = Self::parse(&list);
        log::debug!(
            "Loaded {} extensions from {}",
            set.len(),
            path.display()
        );
        Ok(set)
    }

    /// The list shipped with the crate, parsed on first use.
    #[must_use]
    pub fn bundled() -> &'static Self {
        &BUNDLED
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.known.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            known: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ExtensionOracle for ExtensionSet {
    fn is_known_extension(&self, ext: &str) -> bool {
        self.known.contains(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blanks() {
        let set = ExtensionSet::parse("# header\n\n  pdf  \ntxt\n#png\n");
        assert_eq!(set.len(), 2);
        assert!(set.is_known_extension("pdf"));
        assert!(set.is_known_extension("txt"));
        assert!(!set.is_known_extension("png"));
    }

    #[test]
    fn lookup_is_exact() {
        let set: ExtensionSet = ["pdf"].into_iter().collect();
        assert!(!set.is_known_extension("PDF"));
        assert!(!set.is_known_extension(" pdf"));
        assert!(!set.is_known_extension("pd"));
    }

    #[test]
    fn bundled_list_has_common_extensions() {
        let set = ExtensionSet::bundled();
        for ext in ["pdf", "txt", "png", "rs", "json", "tar", "gz"] {
            assert!(set.is_known_extension(ext), "missing {ext}");
        }
        assert!(!set.is_known_extension("there"));
    }

    #[test]
    fn closures_are_oracles() {
        let oracle = |ext: &str| ext == "md";
        assert!(oracle.is_known_extension("md"));
        assert!(!oracle.is_known_extension("txt"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("exts.txt");
        fs::write(&path, "odt\nods\n").expect("failed to write list");
        let set = ExtensionSet::load(&path).expect("failed to load list");
        assert!(set.is_known_extension("ods"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ExtensionSet::load(Path::new("/nonexistent/smartcap/exts.txt"))
            .expect_err("missing file");
        assert!(matches!(err, ExtensionError::Io(_)));
    }
}
