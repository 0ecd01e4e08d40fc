//! Locale-aware ordering of file and directory names.

use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::Locale;

use crate::SidebarError;

/// Unicode collator for mixed Latin/CJK names.
///
/// Names the collator considers equal are ordered by code point so that
/// listings are deterministic.
pub(crate) struct NameCollator {
    collator: CollatorBorrowed<'static>,
}

impl NameCollator {
    /// Create a collator for a BCP 47 locale (e.g., "zh-Hans-CN").
    pub(crate) fn new(locale: &str) -> Result<Self, SidebarError> {
        let parsed: Locale = locale.parse().map_err(|e| SidebarError::InvalidLocale {
            locale: locale.to_owned(),
            message: format!("{e:?}"),
        })?;
        let collator = Collator::try_new(parsed.into(), CollatorOptions::default()).map_err(|e| {
            SidebarError::Collation {
                locale: locale.to_owned(),
                message: e.to_string(),
            }
        })?;
        Ok(Self { collator })
    }

    pub(crate) fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b).then_with(|| a.cmp(b))
    }

    pub(crate) fn sort(&self, names: &mut [String]) {
        names.sort_by(|a, b| self.compare(a, b));
    }
}
