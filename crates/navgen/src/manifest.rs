//! Site manifest handed to the renderer.
//!
//! ```json
//! {
//!   "lang": "zh-CN",
//!   "title": "...",
//!   "description": "...",
//!   "base": "/",
//!   "head": [["meta", {"name": "theme-color", "content": "#3eaf7c"}]],
//!   "theme": {
//!     "navbar": [{"text": "指南", "link": "/guide/"}],
//!     "repo": "owner/name",
//!     "docsDir": "docs",
//!     "editLink": true,
//!     "editLinkText": "...",
//!     "lastUpdated": true,
//!     "contributors": false,
//!     "sidebar": {"/guide/": [...], "/reference/": [...]}
//!   }
//! }
//! ```

use navgen_config::{Config, HeadTag, LinkConfig};
use navgen_sidebar::NavigationMap;
use serde::Serialize;

/// Site-level settings plus the generated sidebar mapping.
#[derive(Serialize)]
pub(crate) struct SiteManifest<'a> {
    lang: &'a str,
    title: &'a str,
    description: &'a str,
    base: &'a str,
    head: &'a [HeadTag],
    theme: ThemeManifest<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeManifest<'a> {
    navbar: &'a [LinkConfig],
    #[serde(skip_serializing_if = "Option::is_none")]
    repo: Option<&'a str>,
    docs_dir: &'a str,
    edit_link: bool,
    edit_link_text: &'a str,
    last_updated: bool,
    contributors: bool,
    sidebar: &'a NavigationMap,
}

impl<'a> SiteManifest<'a> {
    pub(crate) fn new(config: &'a Config, sidebar: &'a NavigationMap) -> Self {
        let site = &config.site;
        let theme = &config.theme;
        Self {
            lang: &site.lang,
            title: &site.title,
            description: &site.description,
            base: &site.base,
            head: &site.head,
            theme: ThemeManifest {
                navbar: &theme.navbar,
                repo: theme.repo.as_deref(),
                docs_dir: &theme.docs_dir,
                edit_link: theme.edit_link,
                edit_link_text: &theme.edit_link_text,
                last_updated: theme.last_updated,
                contributors: theme.contributors,
                sidebar,
            },
        }
    }
}
