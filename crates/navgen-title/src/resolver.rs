//! Title resolution for document files.

use std::fs;
use std::io;
use std::path::Path;

use crate::file_name::{normalize, strip_extension};
use crate::front_matter::{self, FrontMatter};
use crate::heading;

/// Outcome of sniffing a document's content for a title.
///
/// Keeps "could not read the file" distinct from "read it, found nothing".
/// Both cases fall through to the file-name rule in
/// [`TitleResolver::resolve_title`].
#[derive(Debug)]
pub enum TitleSource {
    /// Title from the front matter `title` key.
    FrontMatter(String),
    /// Text of the first heading line.
    Heading(String),
    /// Content was read but holds no title.
    Missing,
    /// Content could not be read.
    Unreadable(io::Error),
}

impl TitleSource {
    /// Run the content stages of the priority chain on document text.
    ///
    /// Headings are searched in the body after the front matter block, so a
    /// block without `title` falls through to heading detection.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let (block, body) = front_matter::split(text);
        if let Some(title) = block.map(FrontMatter::parse).and_then(|fm| fm.title()) {
            return Self::FrontMatter(title);
        }
        heading::first_heading(body).map_or(Self::Missing, Self::Heading)
    }

    /// Read a document and run the content stages on its text.
    pub fn read(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_text(&text),
            Err(e) => Self::Unreadable(e),
        }
    }

    /// Extracted title, if any.
    #[must_use]
    pub fn into_title(self) -> Option<String> {
        match self {
            Self::FrontMatter(title) | Self::Heading(title) => Some(title),
            Self::Missing | Self::Unreadable(_) => None,
        }
    }
}

/// Resolves display titles for documents and directories.
#[derive(Clone, Debug)]
pub struct TitleResolver {
    /// Document extension without the dot (e.g., "md").
    extension: String,
    /// Index file name without extension (e.g., "README").
    index_stem: String,
    /// Label substituted for the index file name.
    index_label: String,
}

impl TitleResolver {
    /// Create a resolver.
    ///
    /// # Arguments
    ///
    /// * `extension` - Document extension, with or without a leading dot
    /// * `index_file_name` - Index document name (e.g., "README.md")
    /// * `index_label` - Title used for index documents without a content title
    #[must_use]
    pub fn new(extension: &str, index_file_name: &str, index_label: &str) -> Self {
        let extension = extension.trim_start_matches('.').to_owned();
        let index_stem = strip_extension(index_file_name, &extension).to_owned();
        Self {
            extension,
            index_stem,
            index_label: index_label.to_owned(),
        }
    }

    /// Document extension without the dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Check if a file name carries the document extension (case-insensitive).
    #[must_use]
    pub fn is_document(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(&self.extension))
    }

    /// Check if a file name is the index document (case-insensitive).
    #[must_use]
    pub fn is_index(&self, file_name: &str) -> bool {
        self.is_document(file_name) && self.stem(file_name).eq_ignore_ascii_case(&self.index_stem)
    }

    /// File name with the document extension removed.
    #[must_use]
    pub fn stem<'a>(&self, file_name: &'a str) -> &'a str {
        strip_extension(file_name, &self.extension)
    }

    /// Derive a title from a file or directory name.
    ///
    /// Never returns an empty string: when normalization leaves nothing
    /// (e.g. `01.md`), the extension-stripped name is used, then the raw name.
    #[must_use]
    pub fn title_from_file_name(&self, file_name: &str) -> String {
        let base = self.stem(file_name);
        let title = normalize(base, &self.index_stem, &self.index_label);
        if !title.trim().is_empty() {
            return title;
        }
        if base.is_empty() {
            file_name.to_owned()
        } else {
            base.to_owned()
        }
    }

    /// Resolve the display title of a document file.
    ///
    /// Total: unreadable documents and documents without a content title fall
    /// back to [`title_from_file_name`](Self::title_from_file_name).
    pub fn resolve_title(&self, path: &Path) -> String {
        let source = TitleSource::read(path);
        if let TitleSource::Unreadable(e) = &source {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read document, using file name");
        }
        source.into_title().unwrap_or_else(|| {
            let file_name = path
                .file_name()
                .map(|f| f.to_string_lossy())
                .unwrap_or_default();
            self.title_from_file_name(&file_name)
        })
    }
}
