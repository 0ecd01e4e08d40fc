//! Directory-to-navigation folding.
//!
//! Every operation is a pure function of one directory level: it lists the
//! directory, builds its own `Vec<NavEntry>`, and hands it back for the caller
//! to concatenate. Missing directories yield no entries.
//!
//! # Layout
//!
//! ```text
//! docs/
//! ├── guide/
//! │   ├── README.md            -> /guide/ (guide home)
//! │   └── core/                -> module "Core", sidebar at /guide/core/
//! │       ├── README.md        -> index group "Core · 索引"
//! │       ├── explanations/    -> "原理解读" group
//! │       ├── how-to/          -> "操作指南" group
//! │       └── dicom/           -> sub-module "Core · Dicom"
//! └── reference/               -> /reference/
//! ```

use navgen_title::TitleResolver;

use crate::collation::NameCollator;
use crate::listing::{DirListing, dir_link, join_rel};
use crate::{ModuleRef, NavEntry, NavigationMap, SidebarConfig, SidebarError};

/// Builds sidebars from the directory layout under the content root.
pub struct SidebarBuilder {
    config: SidebarConfig,
    resolver: TitleResolver,
    collator: NameCollator,
}

impl SidebarBuilder {
    /// Create a builder.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured locale is invalid or has no
    /// collation data.
    pub fn new(config: SidebarConfig) -> Result<Self, SidebarError> {
        let collator = NameCollator::new(&config.locale)?;
        let resolver = TitleResolver::new(
            &config.document_extension,
            &config.index_file_name,
            &config.index_label,
        );
        Ok(Self {
            config,
            resolver,
            collator,
        })
    }

    /// Builder configuration.
    #[must_use]
    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    /// Title resolver derived from the configuration.
    #[must_use]
    pub fn resolver(&self) -> &TitleResolver {
        &self.resolver
    }

    /// Build the complete sidebar mapping.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::ContentRootMissing`] if the content root is not a
    /// directory. Nothing else under the root is fatal.
    pub fn build(&self) -> Result<NavigationMap, SidebarError> {
        let root = &self.config.content_root;
        if !root.is_dir() {
            return Err(SidebarError::ContentRootMissing(root.clone()));
        }

        let modules = self.scan_modules();
        let map = self.build_sidebar_mapping(&modules);
        tracing::info!(
            root = %root.display(),
            modules = modules.len(),
            sidebars = map.len(),
            "Built sidebar mapping"
        );
        Ok(map)
    }

    /// List the documents directly inside `rel_dir` as leaves.
    ///
    /// The index document is skipped unless `include_index` is set; when
    /// included, it links to the directory itself (`/rel_dir/`). Other pages
    /// link to `/rel_dir/<stem>.<page_extension>`.
    #[must_use]
    pub fn list_pages(&self, rel_dir: &str, include_index: bool) -> Vec<NavEntry> {
        let rel_dir = rel_dir.trim_matches('/');
        let abs_dir = self.config.content_root.join(rel_dir);
        let Some(listing) = DirListing::read(&abs_dir) else {
            return Vec::new();
        };

        let mut files: Vec<String> = listing
            .files
            .into_iter()
            .filter(|f| self.resolver.is_document(f))
            .collect();
        self.collator.sort(&mut files);

        files
            .into_iter()
            .filter_map(|file_name| {
                let is_index = self.resolver.is_index(&file_name);
                if is_index && !include_index {
                    return None;
                }
                let title = self.resolver.resolve_title(&abs_dir.join(&file_name));
                let link = if is_index {
                    dir_link(rel_dir)
                } else {
                    self.page_link(rel_dir, &file_name)
                };
                Some(NavEntry::leaf(title, link))
            })
            .collect()
    }

    /// Fold every subdirectory of `rel_dir` into a collapsed group.
    ///
    /// A group holds the subdirectory's pages (index included) followed by its
    /// own subdirectory groups. Subtrees without documents produce nothing.
    #[must_use]
    pub fn list_directory_groups(&self, rel_dir: &str) -> Vec<NavEntry> {
        self.directory_groups(rel_dir.trim_matches('/'), 1)
    }

    fn directory_groups(&self, rel_dir: &str, depth: usize) -> Vec<NavEntry> {
        if self.config.max_depth.is_some_and(|max| depth > max) {
            return Vec::new();
        }

        self.sorted_subdirs(rel_dir)
            .into_iter()
            .filter_map(|dir_name| {
                let child = join_rel(rel_dir, &dir_name);
                let mut children = self.list_pages(&child, true);
                children.extend(self.directory_groups(&child, depth + 1));
                NavEntry::group(self.resolver.title_from_file_name(&dir_name), true, children)
            })
            .collect()
    }

    /// Build the sidebar of one guide module.
    ///
    /// Produces the index group (`"<human_name> · 索引"`, expanded) followed by
    /// one collapsed group per configured section whose subdirectory exists
    /// and holds documents.
    #[must_use]
    pub fn build_module_sidebar(&self, module_path: &str, human_name: &str) -> Vec<NavEntry> {
        let base = join_rel(&self.config.guide_dir, module_path);
        let index_label = format!("{human_name} · {}", self.config.labels.index_group_suffix);

        let mut sidebar: Vec<NavEntry> =
            NavEntry::group(index_label, false, self.list_pages(&base, true))
                .into_iter()
                .collect();

        for section in &self.config.sections {
            let rel = join_rel(&base, &section.subdir);
            if !self.config.content_root.join(&rel).is_dir() {
                continue;
            }
            let mut children = self.list_pages(&rel, false);
            if section.recursive {
                children.extend(self.list_directory_groups(&rel));
            }
            sidebar.extend(NavEntry::group(section.text.clone(), true, children));
        }

        tracing::debug!(module = %module_path, groups = sidebar.len(), "Built module sidebar");
        sidebar
    }

    /// Build the reference sidebar.
    ///
    /// The root group holds the overview link and the reference root's pages.
    /// Every first-level subdirectory follows as its own group, titled with
    /// the directory name as-is.
    #[must_use]
    pub fn build_reference_sidebar(&self) -> Vec<NavEntry> {
        let root = self.config.reference_dir.trim_matches('/');
        let labels = &self.config.labels;

        let mut overview = vec![NavEntry::leaf(&labels.reference_overview, dir_link(root))];
        overview.extend(self.list_pages(root, false));

        let mut sidebar = vec![NavEntry::Group {
            title: labels.reference_group.clone(),
            collapsible: true,
            collapsed: false,
            children: overview,
        }];

        for dir_name in self.sorted_subdirs(root) {
            let rel = join_rel(root, &dir_name);
            let mut children = self.list_pages(&rel, true);
            children.extend(self.list_directory_groups(&rel));
            sidebar.extend(NavEntry::group(dir_name, true, children));
        }
        sidebar
    }

    /// Build the guide home sidebar: the fixed start links, then one link per
    /// top-level module pointing at the module index.
    #[must_use]
    pub fn build_guide_home_sidebar(&self, modules: &[ModuleRef]) -> Vec<NavEntry> {
        let labels = &self.config.labels;

        let start = self
            .config
            .guide_home_links
            .iter()
            .map(|l| NavEntry::leaf(&l.text, &l.link))
            .collect();
        let module_links = modules
            .iter()
            .filter(|m| m.top_level)
            .map(|m| NavEntry::leaf(&m.name, self.module_link(&m.path)))
            .collect();

        [
            NavEntry::group(&labels.start_group, false, start),
            NavEntry::group(&labels.modules_group, false, module_links),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Assemble the mapping: guide home, reference, then one sidebar per
    /// module. Modules whose sidebar is empty get no entry.
    #[must_use]
    pub fn build_sidebar_mapping(&self, modules: &[ModuleRef]) -> NavigationMap {
        let mut map = NavigationMap::default();
        map.insert(
            dir_link(&self.config.guide_dir),
            self.build_guide_home_sidebar(modules),
        );
        map.insert(
            dir_link(&self.config.reference_dir),
            self.build_reference_sidebar(),
        );

        for module in modules {
            let sidebar = self.build_module_sidebar(&module.path, &module.name);
            if sidebar.is_empty() {
                tracing::debug!(module = %module.path, "Module has no documents, skipping");
                continue;
            }
            map.insert(self.module_link(&module.path), sidebar);
        }
        map
    }

    /// Subdirectory names of `rel_dir` in collation order.
    pub(crate) fn sorted_subdirs(&self, rel_dir: &str) -> Vec<String> {
        let mut dirs = DirListing::read(&self.config.content_root.join(rel_dir))
            .map(|listing| listing.dirs)
            .unwrap_or_default();
        self.collator.sort(&mut dirs);
        dirs
    }

    fn module_link(&self, module_path: &str) -> String {
        dir_link(&join_rel(&self.config.guide_dir, module_path))
    }

    fn page_link(&self, rel_dir: &str, file_name: &str) -> String {
        let page = format!(
            "{}.{}",
            self.resolver.stem(file_name),
            self.config.page_extension.trim_start_matches('.')
        );
        format!("/{}", join_rel(rel_dir, &page))
    }
}
