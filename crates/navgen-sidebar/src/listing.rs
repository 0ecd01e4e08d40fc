//! Single-level directory listings.

use std::fs;
use std::io;
use std::path::Path;

/// Direct children of a directory, split into files and subdirectories.
///
/// Hidden entries (leading `.`) are skipped. Order is filesystem order;
/// callers sort with the collator.
#[derive(Debug, Default)]
pub(crate) struct DirListing {
    pub files: Vec<String>,
    pub dirs: Vec<String>,
}

impl DirListing {
    /// List a directory. Returns `None` if it is missing or unreadable.
    pub(crate) fn read(dir: &Path) -> Option<Self> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "Failed to list directory, skipping");
                return None;
            }
        };

        let mut listing = Self::default();
        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                listing.dirs.push(name);
            } else {
                listing.files.push(name);
            }
        }
        Some(listing)
    }
}

/// Join POSIX-style relative paths, ignoring empty parts and stray slashes.
pub(crate) fn join_rel(base: &str, child: &str) -> String {
    let base = base.trim_matches('/');
    let child = child.trim_matches('/');
    match (base.is_empty(), child.is_empty()) {
        (true, _) => child.to_owned(),
        (false, true) => base.to_owned(),
        (false, false) => format!("{base}/{child}"),
    }
}

/// Directory-style site link: `""` -> `/`, `"guide/core"` -> `/guide/core/`.
pub(crate) fn dir_link(rel_dir: &str) -> String {
    let rel_dir = rel_dir.trim_matches('/');
    if rel_dir.is_empty() {
        "/".to_owned()
    } else {
        format!("/{rel_dir}/")
    }
}
