//! Scan-time configuration for [`SidebarBuilder`](crate::SidebarBuilder).

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Fixed link shown on the guide home sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeLink {
    /// Display text.
    pub text: String,
    /// Absolute site path.
    pub link: String,
}

impl HomeLink {
    /// Create a home link.
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// A module subdirectory rendered as its own sidebar group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleSection {
    /// Group label.
    pub text: String,
    /// Subdirectory relative to the module (empty for the module root).
    pub subdir: String,
    /// Include nested directories as groups.
    pub recursive: bool,
}

impl ModuleSection {
    /// Create a recursive section.
    pub fn new(text: impl Into<String>, subdir: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subdir: subdir.into(),
            recursive: true,
        }
    }
}

/// A guide module: a directory with its own sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRef {
    /// Path relative to the guide root (e.g., "core", "core/dicom").
    pub path: String,
    /// Human-readable name (e.g., "Core", "Core · Dicom").
    pub name: String,
    /// Top-level modules are linked from the guide home sidebar.
    pub top_level: bool,
}

impl ModuleRef {
    /// Create a top-level module.
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            top_level: true,
        }
    }
}

/// Labels for the fixed groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarLabels {
    /// Suffix of a module's index group (`"<Module> · <suffix>"`).
    pub index_group_suffix: String,
    /// Guide home group holding [`SidebarConfig::guide_home_links`].
    pub start_group: String,
    /// Guide home group linking every top-level module.
    pub modules_group: String,
    /// Reference root group.
    pub reference_group: String,
    /// Overview link at the top of the reference root group.
    pub reference_overview: String,
}

impl Default for SidebarLabels {
    fn default() -> Self {
        Self {
            index_group_suffix: "索引".to_owned(),
            start_group: "开始".to_owned(),
            modules_group: "功能模块（教程）".to_owned(),
            reference_group: "参考与 API".to_owned(),
            reference_overview: "总览".to_owned(),
        }
    }
}

/// Everything the builder needs; there is no implicit global state.
#[derive(Clone, Debug)]
pub struct SidebarConfig {
    /// Directory all relative paths are resolved against.
    pub content_root: PathBuf,
    /// Document extension without the dot.
    pub document_extension: String,
    /// Extension of rendered pages used in links.
    pub page_extension: String,
    /// Index document name (e.g., "README.md").
    pub index_file_name: String,
    /// Title substituted for index documents without a content title.
    pub index_label: String,
    /// BCP 47 locale used to order file and directory names.
    pub locale: String,
    /// Guide root, relative to the content root.
    pub guide_dir: String,
    /// Reference root, relative to the content root.
    pub reference_dir: String,
    /// Module subdirectories never promoted to sub-modules (lowercase).
    pub reserved_subdir_names: BTreeSet<String>,
    /// Fixed "start here" links of the guide home sidebar.
    pub guide_home_links: Vec<HomeLink>,
    /// Groups built from module subdirectories, in display order.
    pub sections: Vec<ModuleSection>,
    /// Explicit top-level modules; scanned from the guide root when empty.
    pub modules: Vec<ModuleRef>,
    /// Maximum nesting of directory groups (`None` = unlimited, `Some(0)` = none).
    pub max_depth: Option<usize>,
    /// Labels for the fixed groups.
    pub labels: SidebarLabels,
}

impl SidebarConfig {
    /// Check if a module subdirectory name is reserved (case-insensitive).
    #[must_use]
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_subdir_names.contains(&name.to_lowercase())
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("docs"),
            document_extension: "md".to_owned(),
            page_extension: "html".to_owned(),
            index_file_name: "README.md".to_owned(),
            index_label: "索引".to_owned(),
            locale: "zh-Hans-CN".to_owned(),
            guide_dir: "guide".to_owned(),
            reference_dir: "reference".to_owned(),
            reserved_subdir_names: ["explanations", "how-to", "implementation", "troubleshooting"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            guide_home_links: vec![
                HomeLink::new("简介", "/guide/"),
                HomeLink::new("环境搭建", "/guide/setup/"),
            ],
            sections: vec![
                ModuleSection::new("原理解读", "explanations"),
                ModuleSection::new("操作指南", "how-to"),
            ],
            modules: Vec::new(),
            max_depth: None,
            labels: SidebarLabels::default(),
        }
    }
}
