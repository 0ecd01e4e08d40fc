//! Front matter extraction.
//!
//! A front matter block opens with a line consisting solely of `---` at the
//! top of the document (leading blank lines and a BOM are tolerated) and closes
//! with the next `---` line. The block is parsed as YAML for general fields;
//! when that fails the block is scanned line by line for `key: value` pairs.
//!
//! The title always comes from the line scan, exactly as written: YAML would
//! turn `title: 1.10` into `1.1` and drop a trailing `# comment`.

use serde_yaml::{Mapping, Value};

/// Delimiter line for front matter blocks.
const DELIMITER: &str = "---";

/// Key/value pairs parsed from a front matter block.
///
/// Only scalar values are kept. Keys are matched case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: Vec<(String, String)>,
    /// Raw `key: value` lines, values untouched apart from trimming.
    lines: Vec<(String, String)>,
}

impl FrontMatter {
    /// Parse the raw text between the delimiters.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        let lines = scan_lines(trimmed);
        match serde_yaml::from_str::<Mapping>(trimmed) {
            Ok(mapping) => Self {
                fields: fields_from_mapping(&mapping),
                lines,
            },
            Err(e) => {
                tracing::debug!(error = %e, "Front matter is not valid YAML, scanning lines");
                Self {
                    fields: lines.clone(),
                    lines,
                }
            }
        }
    }

    #[cfg(test)]
    fn from_lines(raw: &str) -> Self {
        let lines = scan_lines(raw);
        Self {
            fields: lines.clone(),
            lines,
        }
    }

    /// Look up a value by key (case-insensitive). First occurrence wins.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Title value as written, trimmed and with one layer of matching quotes
    /// removed.
    ///
    /// Returns `None` when the key is missing or the value is blank.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        let raw = self
            .lines
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("title"))
            .map(|(_, v)| v.as_str())?;
        let title = strip_quotes(raw).trim();
        (!title.is_empty()).then(|| title.to_owned())
    }

    /// Number of parsed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split a document into its raw front matter block and body.
///
/// Returns `(None, text)` when the document has no complete block.
#[must_use]
pub fn split(text: &str) -> (Option<&str>, &str) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut offset = 0;
    let mut block_start = None;
    for line in text.split_inclusive('\n') {
        let line_end = offset + line.len();
        match block_start {
            None if line.trim().is_empty() => {}
            None if line.trim_end() == DELIMITER => block_start = Some(line_end),
            None => return (None, text),
            Some(start) if line.trim_end() == DELIMITER => {
                return (Some(&text[start..offset]), &text[line_end..]);
            }
            Some(_) => {}
        }
        offset = line_end;
    }

    (None, text)
}

/// Extract and parse the front matter block of a document.
#[must_use]
pub fn extract(text: &str) -> Option<FrontMatter> {
    split(text).0.map(FrontMatter::parse)
}

fn fields_from_mapping(mapping: &Mapping) -> Vec<(String, String)> {
    mapping
        .iter()
        .filter_map(|(key, value)| Some((scalar_to_string(key)?, scalar_to_string(value)?)))
        .collect()
}

/// `key: value` pairs in line order. Keys are non-empty, contain no
/// whitespace and do not start a comment or list item.
fn scan_lines(raw: &str) -> Vec<(String, String)> {
    raw.lines()
        .filter_map(|line| {
            let (key, value) = line.trim_start().split_once(':')?;
            let valid_key = !key.is_empty()
                && !key.starts_with(['#', '-'])
                && !key.contains(char::is_whitespace);
            valid_key.then(|| (key.to_owned(), value.trim().to_owned()))
        })
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn strip_quotes(value: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q)?.strip_suffix(q))
        .unwrap_or(value)
}
