//! File-name normalization into display titles.

use std::sync::LazyLock;

use regex::Regex;

/// Manual ordering prefix such as `01-`, `2_` or `10`.
static ORDER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+[-_]?").unwrap());

/// Strip `.{extension}` from a file name (case-insensitive).
///
/// Names without the extension are returned unchanged.
pub(crate) fn strip_extension<'a>(file_name: &'a str, extension: &str) -> &'a str {
    match file_name.rsplit_once('.') {
        Some((base, ext)) if ext.eq_ignore_ascii_case(extension) => base,
        _ => file_name,
    }
}

/// Derive a title from an extension-stripped base name.
///
/// `index_stem` is replaced by `index_label`, the ordering prefix is dropped,
/// separators become spaces, and lowercase-initial words are capitalized.
pub(crate) fn normalize(base: &str, index_stem: &str, index_label: &str) -> String {
    let base = if base.eq_ignore_ascii_case(index_stem) {
        index_label
    } else {
        base
    };
    let unprefixed = ORDER_PREFIX_RE.replace(base, "");
    capitalize_words(&unprefixed.replace(['-', '_'], " "))
}

/// Uppercase the first letter of each whitespace-delimited word that starts
/// lowercase. Other characters, including whitespace runs, are preserved.
fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            word_start = true;
            result.push(c);
            continue;
        }
        if word_start && c.is_lowercase() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        word_start = false;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(base: &str) -> String {
        normalize(base, "README", "索引")
    }

    #[test]
    fn test_strip_extension_case_insensitive() {
        assert_eq!(strip_extension("guide.md", "md"), "guide");
        assert_eq!(strip_extension("GUIDE.MD", "md"), "GUIDE");
        assert_eq!(strip_extension("archive.tar.md", "md"), "archive.tar");
        assert_eq!(strip_extension("notes.txt", "md"), "notes.txt");
        assert_eq!(strip_extension("no-extension", "md"), "no-extension");
    }

    #[test]
    fn test_order_prefix_removed() {
        assert_eq!(title("01-setup"), "Setup");
        assert_eq!(title("02_install_guide"), "Install Guide");
        assert_eq!(title("10installation"), "Installation");
    }

    #[test]
    fn test_only_one_separator_after_prefix_removed() {
        assert_eq!(title("01--setup"), " Setup");
    }

    #[test]
    fn test_separators_become_spaces() {
        assert_eq!(title("getting-started_guide"), "Getting Started Guide");
    }

    #[test]
    fn test_capitalized_and_non_alpha_words_untouched() {
        assert_eq!(title("DICOM-loading"), "DICOM Loading");
        assert_eq!(title("mrtk3-2fa-setup"), "Mrtk3 2fa Setup");
        assert_eq!(title("iOS"), "IOS");
    }

    #[test]
    fn test_index_stem_replaced_by_label() {
        assert_eq!(title("README"), "索引");
        assert_eq!(title("readme"), "索引");
        assert_eq!(normalize("Readme", "README", "API"), "API");
    }

    #[test]
    fn test_label_goes_through_normalization() {
        assert_eq!(normalize("README", "README", "api-index"), "Api Index");
    }

    #[test]
    fn test_cjk_untouched() {
        assert_eq!(title("03-原理解读"), "原理解读");
    }

    #[test]
    fn test_prefix_only_name_is_empty() {
        assert_eq!(title("01"), "");
    }
}
