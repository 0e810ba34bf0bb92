//! Helper macros used across the crate.

/// Lazily compile a [`Regex`] with a custom panic message.
///
/// The pattern must be a literal known to be valid; the message only shows up
/// if the literal itself is broken.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static RE: LazyLock<Regex> = smartcap::lazy_regex!(r"https?://\S+", "url");
/// assert!(RE.is_match("see https://example.com"));
/// ```
///
/// [`Regex`]: regex::Regex
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
