//! Sidebar navigation built from a documentation directory tree.
//!
//! The builder walks a content root laid out as guide modules plus a
//! reference area and produces a [`NavigationMap`]: an ordered mapping from
//! top-level site paths (`/guide/`, `/reference/`, `/guide/<module>/`) to
//! their sidebars.
//!
//! Titles come from [`navgen_title::TitleResolver`]. Siblings are ordered with
//! a locale-aware collator so mixed Latin/Chinese names sort the way readers
//! expect.
//!
//! # Example
//!
//! ```no_run
//! use navgen_sidebar::{SidebarBuilder, SidebarConfig};
//!
//! let config = SidebarConfig {
//!     content_root: "docs".into(),
//!     ..SidebarConfig::default()
//! };
//! let builder = SidebarBuilder::new(config)?;
//! let map = builder.build()?;
//! for (path, sidebar) in map.iter() {
//!     println!("{path}: {} entries", sidebar.len());
//! }
//! # Ok::<(), navgen_sidebar::SidebarError>(())
//! ```

mod builder;
mod collation;
mod config;
mod entry;
mod error;
mod listing;
mod modules;

pub use builder::SidebarBuilder;
pub use config::{HomeLink, ModuleRef, ModuleSection, SidebarConfig, SidebarLabels};
pub use entry::{NavEntry, NavigationMap};
pub use error::SidebarError;
