//! Title inference for markdown documents.
//!
//! A document's display title is resolved with a priority chain:
//!
//! 1. `title` key of a `---` delimited front matter block
//! 2. First heading line (`# Title`, `## Title`, ...)
//! 3. Title derived from the file name
//!
//! Each stage is independently usable: [`front_matter`] extracts the metadata
//! block, [`heading`] scans for the first heading, and
//! [`TitleResolver::title_from_file_name`] normalizes file names.
//!
//! # Example
//!
//! ```
//! use navgen_title::TitleResolver;
//!
//! let resolver = TitleResolver::new("md", "README.md", "索引");
//! assert_eq!(resolver.title_from_file_name("01-getting_started.md"), "Getting Started");
//! assert_eq!(resolver.title_from_file_name("readme.MD"), "索引");
//! ```

mod file_name;
pub mod front_matter;
pub mod heading;
mod resolver;

pub use front_matter::FrontMatter;
pub use resolver::{TitleResolver, TitleSource};
