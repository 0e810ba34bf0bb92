//! Capitalization and punctuation rules.
//!
//! Each rule is a plain function from text to text. [`apply`] runs them in a
//! fixed order, gated by the flags in [`Config`]:
//!
//! 1. capitalize the first character of the message
//! 2. append a period at the end of the message
//! 3. capitalize the first character of every line after the first
//! 4. append a period to every line except the last
//! 5. capitalize the character after each delimiter run
//!
//! The rules see placeholder tokens as ordinary text. Placeholders consist of
//! underscores, capitals and digits, so upper-casing never alters them.

use regex::Regex;

use crate::config::Config;

/// Upper-case the first character of `text`.
///
/// A character whose upper-case form is several characters long, such as
/// `ß`, expands in place.
///
/// # Examples
///
/// ```
/// use smartcap::rewrite::capitalize_first;
/// assert_eq!(capitalize_first("hello"), "Hello");
/// assert_eq!(capitalize_first(""), "");
/// ```
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Append `.` unless the text already ends with an excluded symbol.
///
/// Trailing whitespace is trimmed before the period is added. When the last
/// non-space character is excluded the text is returned as it was, trailing
/// whitespace included. Text that is empty after trimming has no last
/// character to exclude, so it becomes a lone `.`.
#[must_use]
pub fn add_dot_if_missing(text: &str, config: &Config) -> String {
    let trimmed = text.trim_end();
    match trimmed.chars().next_back() {
        Some(last) if config.is_excluded_end_symbol(last) => text.to_string(),
        _ => format!("{trimmed}."),
    }
}

/// Capitalize every line but the first.
#[must_use]
pub fn capitalize_lines(text: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.to_string()
            } else {
                capitalize_first(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Apply [`add_dot_if_missing`] to every line but the last.
#[must_use]
pub fn add_dots_to_lines(text: &str, config: &Config) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == last {
                (*line).to_string()
            } else {
                add_dot_if_missing(line, config)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build `[<delimiters>]\s*` with every delimiter taken literally.
///
/// Returns `None` for an empty delimiter set.
fn delimiter_regex(delimiters: &str) -> Option<Regex> {
    if delimiters.is_empty() {
        return None;
    }
    let mut buf = [0; 4];
    let class: String = delimiters
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut buf)))
        .collect();
    match Regex::new(&format!(r"[{class}]\s*")) {
        Ok(re) => Some(re),
        Err(err) => {
            log::warn!("Ignoring delimiters {delimiters:?}: {err}");
            None
        }
    }
}

/// Byte offsets of the characters that follow a delimiter and any
/// whitespace after it.
///
/// Offsets refer to `text` as given, are strictly increasing and always fall
/// on a character boundary. A match running to the end of the text yields no
/// offset.
fn delimiter_targets(re: &Regex, text: &str) -> Vec<usize> {
    re.find_iter(text)
        .map(|m| m.end())
        .filter(|&end| end < text.len())
        .collect()
}

/// Capitalize the character after each delimiter and its trailing whitespace.
///
/// All offsets are collected from the unmodified text first. The second pass
/// rebuilds the text from the original characters, so an upper-case form that
/// changes length cannot shift a later offset.
///
/// # Examples
///
/// ```
/// use smartcap::rewrite::capitalize_after_delimiters;
/// assert_eq!(capitalize_after_delimiters("hi. there", "?!."), "hi. There");
/// assert_eq!(capitalize_after_delimiters("a.b", "?!."), "a.B");
/// ```
#[must_use]
pub fn capitalize_after_delimiters(text: &str, delimiters: &str) -> String {
    let Some(re) = delimiter_regex(delimiters) else {
        return text.to_string();
    };
    let targets = delimiter_targets(&re, text);
    debug_assert!(targets.windows(2).all(|w| w[0] < w[1]));
    if targets.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut targets = targets.into_iter().peekable();
    for (i, c) in text.char_indices() {
        if targets.next_if_eq(&i).is_some() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    debug_assert!(targets.peek().is_none());
    out
}

/// Run the full rule sequence over `text`.
///
/// Delimiter capitalization always runs; the other rules depend on their
/// flags.
#[must_use]
pub fn apply(text: &str, config: &Config) -> String {
    let mut out = text.to_string();
    if config.first_letter {
        out = capitalize_first(&out);
    }
    if config.dot_at_end {
        out = add_dot_if_missing(&out, config);
    }
    if config.each_line {
        out = capitalize_lines(&out);
    }
    if config.dot_at_each_line {
        out = add_dots_to_lines(&out, config);
    }
    capitalize_after_delimiters(&out, &config.delimiters)
}
