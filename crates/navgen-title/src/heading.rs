//! Heading-line scanning.

use std::sync::LazyLock;

use regex::Regex;

/// One or more `#`, at least one space, then the heading text.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#+[ \t]+(.+)$").unwrap());

/// Return the trimmed text of the first heading line, scanning from the top.
///
/// Lines whose heading text is blank (e.g. `#   `) are skipped.
#[must_use]
pub fn first_heading(text: &str) -> Option<String> {
    HEADING_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim()))
        .find(|title| !title.is_empty())
        .map(str::to_owned)
}
