//! Protection of spans the rewrite rules must not touch.
//!
//! [`extract`] swaps inline code, fenced code, URLs and file names for
//! placeholder tokens of the form `__<KIND><index>__`. The index is shared by
//! all kinds and counts every exception found so far. [`restore`] puts the
//! original text back once rewriting has finished.
//!
//! Kinds are processed in a fixed order: inline code, block code, URLs, then
//! file names. Each pass runs its pattern once over the text that lies between
//! the placeholders produced by earlier passes, so an existing placeholder is
//! never swallowed by a later match.
//!
//! Placeholder-shaped text that already appears in the message is not
//! escaped. Such a literal collides with a generated token of the same name
//! and restoration then fills in whichever comes first.

use std::{fmt, sync::LazyLock};

use regex::{Captures, Regex};

use crate::{extensions::ExtensionOracle, lazy_regex};

static INLINE_CODE_RE: LazyLock<Regex> = lazy_regex!(r"`[^`]+`", "inline code pattern");

static BLOCK_CODE_RE: LazyLock<Regex> = lazy_regex!(r"(?s)```.*?```", "block code pattern");

static URL_RE: LazyLock<Regex> = lazy_regex!(r"https?://\S+", "url pattern");

static FILE_RE: LazyLock<Regex> = lazy_regex!(r"[\w.-]+\.(\w+)", "file name pattern");

static PLACEHOLDER_RE: LazyLock<Regex> = lazy_regex!(
    r"__(?:INLINE_CODE|BLOCK_CODE|URL|FILE)\d+__",
    "placeholder pattern"
);

/// The category of a protected span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    InlineCode,
    BlockCode,
    Url,
    File,
}

impl ExceptionKind {
    /// The tag used inside placeholder tokens.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::InlineCode => "INLINE_CODE",
            Self::BlockCode => "BLOCK_CODE",
            Self::Url => "URL",
            Self::File => "FILE",
        }
    }
}

/// A protected span and its position in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    pub kind: ExceptionKind,
    pub index: usize,
    pub original: String,
}

impl Exception {
    /// The token standing in for this span in the working text.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartcap::exceptions::{Exception, ExceptionKind};
    ///
    /// let e = Exception {
    ///     kind: ExceptionKind::Url,
    ///     index: 1,
    ///     original: "https://example.com".into(),
    /// };
    /// assert_eq!(e.placeholder(), "__URL1__");
    /// ```
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("__{}{}__", self.kind.tag(), self.index)
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {:?}", self.placeholder(), self.original)
    }
}

/// Exceptions in the order they were extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionMap {
    entries: Vec<Exception>,
}

impl ExceptionMap {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Exception> {
        self.entries.iter()
    }

    /// Look up the original text behind `placeholder`.
    #[must_use]
    pub fn get(&self, placeholder: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.placeholder() == placeholder)
            .map(|e| e.original.as_str())
    }

    fn push(&mut self, kind: ExceptionKind, original: &str) -> String {
        let exception = Exception {
            kind,
            index: self.entries.len(),
            original: original.to_string(),
        };
        let placeholder = exception.placeholder();
        self.entries.push(exception);
        placeholder
    }
}

impl<'a> IntoIterator for &'a ExceptionMap {
    type Item = &'a Exception;
    type IntoIter = std::slice::Iter<'a, Exception>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Replace every match of `re` outside existing placeholders for which
/// `accept` returns `true`.
fn protect<F>(
    text: &str,
    re: &Regex,
    kind: ExceptionKind,
    map: &mut ExceptionMap,
    mut accept: F,
) -> String
where
    F: FnMut(&Captures<'_>) -> bool,
{
    let mut out = String::with_capacity(text.len());
    let mut gap_start = 0;
    let gap_ends = PLACEHOLDER_RE
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .chain(std::iter::once((text.len(), text.len())));

    for (gap_end, next_start) in gap_ends {
        let gap = &text[gap_start..gap_end];
        let mut last = 0;
        for caps in re.captures_iter(gap) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if !accept(&caps) {
                continue;
            }
            out.push_str(&gap[last..whole.start()]);
            out.push_str(&map.push(kind, whole.as_str()));
            last = whole.end();
        }
        out.push_str(&gap[last..]);
        out.push_str(&text[gap_end..next_start]);
        gap_start = next_start;
    }
    out
}

/// Swap protected spans for placeholder tokens.
///
/// Returns the working text together with the exceptions in discovery order.
/// Text without protected spans comes back unchanged with an empty map.
/// Unbalanced backticks are simply not matched.
///
/// A dotted token counts as a file name only when its last segment, lowered
/// to ASCII lowercase, is a known extension.
///
/// # Examples
///
/// ```
/// use smartcap::exceptions::extract;
///
/// let oracle = |ext: &str| ext == "pdf";
/// let (text, map) = extract("see `x` at https://a.io/r.pdf or r.pdf", &oracle);
/// assert_eq!(text, "see __INLINE_CODE0__ at __URL1__ or __FILE2__");
/// assert_eq!(map.len(), 3);
/// ```
pub fn extract<O>(text: &str, oracle: &O) -> (String, ExceptionMap)
where
    O: ExtensionOracle + ?Sized,
{
    let mut map = ExceptionMap::default();
    let text = protect(text, &INLINE_CODE_RE, ExceptionKind::InlineCode, &mut map, |_| {
        true
    });
    let text = protect(&text, &BLOCK_CODE_RE, ExceptionKind::BlockCode, &mut map, |_| {
        true
    });
    let text = protect(&text, &URL_RE, ExceptionKind::Url, &mut map, |_| true);
    let text = protect(&text, &FILE_RE, ExceptionKind::File, &mut map, |caps| {
        oracle.is_known_extension(&caps[1].to_ascii_lowercase())
    });
    if !map.is_empty() {
        log::debug!("Protected {} span(s)", map.len());
    }
    (text, map)
}

/// Put extracted spans back in place of their placeholders.
///
/// Entries are applied in insertion order and each replaces only the first
/// occurrence of its token. A token that no longer appears, for example
/// because a rewrite changed it, is left as is.
#[must_use]
pub fn restore(text: &str, map: &ExceptionMap) -> String {
    let mut out = text.to_string();
    for exception in map {
        let placeholder = exception.placeholder();
        if out.contains(&placeholder) {
            out = out.replacen(&placeholder, &exception.original, 1);
        } else {
            log::warn!("Placeholder {placeholder} missing from rewritten text");
        }
    }
    out
}
