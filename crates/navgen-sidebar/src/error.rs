//! Sidebar builder errors.

use std::path::PathBuf;

/// Fatal errors. Missing subdirectories are never errors; they yield no entries.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// The content root does not exist or is not a directory.
    #[error("Content root not found: {}", .0.display())]
    ContentRootMissing(PathBuf),
    /// The configured locale is not a valid BCP 47 tag.
    #[error("Invalid locale '{locale}': {message}")]
    InvalidLocale {
        /// Locale as configured.
        locale: String,
        /// Parser message.
        message: String,
    },
    /// No collation data could be loaded for the locale.
    #[error("Collation unavailable for '{locale}': {message}")]
    Collation {
        /// Locale as configured.
        locale: String,
        /// Data provider message.
        message: String,
    },
}
