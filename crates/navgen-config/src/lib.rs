//! Configuration management for navgen.
//!
//! Parses `navgen.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.base`
//! - `theme.repo`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the title of index documents without a content title.
    pub index_label: Option<String>,
    /// Override the collation locale.
    pub locale: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "navgen.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata passed through to the manifest.
    pub site: SiteConfig,
    /// Content layout (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Sidebar labels, sections and module list.
    pub sidebar: SidebarSettings,
    /// Theme options passed through to the manifest.
    pub theme: ThemeConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// `<head>` tag as `[tag, {attribute = value}]`.
pub type HeadTag = (String, BTreeMap<String, String>);

/// Site metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title. Required.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Content language tag.
    pub lang: String,
    /// Base URL path the site is served under.
    pub base: String,
    /// Extra `<head>` tags.
    pub head: Vec<HeadTag>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            lang: "zh-CN".to_owned(),
            base: "/".to_owned(),
            head: Vec::new(),
        }
    }
}

/// Raw docs configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    document_extension: Option<String>,
    page_extension: Option<String>,
    index_file: Option<String>,
    index_label: Option<String>,
    locale: Option<String>,
    guide_dir: Option<String>,
    reference_dir: Option<String>,
}

/// Resolved content layout with an absolute source directory.
#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Content root holding the guide and reference trees.
    pub source_dir: PathBuf,
    /// Document extension without the dot.
    pub document_extension: String,
    /// Extension of rendered pages used in links.
    pub page_extension: String,
    /// Index document name.
    pub index_file: String,
    /// Title for index documents without a content title.
    pub index_label: String,
    /// BCP 47 locale used to order names.
    pub locale: String,
    /// Guide root relative to the source directory.
    pub guide_dir: String,
    /// Reference root relative to the source directory.
    pub reference_dir: String,
}

impl DocsConfig {
    fn with_source_dir(source_dir: PathBuf) -> Self {
        Self {
            source_dir,
            document_extension: "md".to_owned(),
            page_extension: "html".to_owned(),
            index_file: "README.md".to_owned(),
            index_label: "索引".to_owned(),
            locale: "zh-Hans-CN".to_owned(),
            guide_dir: "guide".to_owned(),
            reference_dir: "reference".to_owned(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self::with_source_dir(PathBuf::from("docs"))
    }
}

/// Link with display text, used by the navbar and the guide home sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinkConfig {
    /// Display text.
    pub text: String,
    /// Site path or external URL.
    pub link: String,
}

impl LinkConfig {
    fn new(text: &str, link: &str) -> Self {
        Self {
            text: text.to_owned(),
            link: link.to_owned(),
        }
    }
}

/// Module subdirectory rendered as a sidebar group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionConfig {
    /// Group label.
    pub text: String,
    /// Subdirectory relative to the module.
    #[serde(default)]
    pub subdir: String,
    /// Include nested directories as groups.
    #[serde(default = "default_true")]
    pub recursive: bool,
}

/// Explicitly listed guide module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleConfig {
    /// Directory under the guide root.
    pub path: String,
    /// Display name.
    pub name: String,
}

fn default_true() -> bool {
    true
}

/// Sidebar settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SidebarSettings {
    /// Suffix of a module's index group.
    pub index_group_suffix: String,
    /// Guide home group holding `home_links`.
    pub start_group_label: String,
    /// Guide home group linking every top-level module.
    pub modules_group_label: String,
    /// Reference root group.
    pub reference_group_label: String,
    /// Overview link of the reference root group.
    pub reference_overview_label: String,
    /// Module subdirectories never promoted to sub-modules.
    pub reserved_subdirs: Vec<String>,
    /// Maximum nesting of directory groups.
    pub max_depth: Option<usize>,
    /// Fixed links of the guide home sidebar.
    pub home_links: Vec<LinkConfig>,
    /// Module sections in display order.
    pub sections: Vec<SectionConfig>,
    /// Explicit module list. Modules are scanned when empty.
    pub modules: Vec<ModuleConfig>,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            index_group_suffix: "索引".to_owned(),
            start_group_label: "开始".to_owned(),
            modules_group_label: "功能模块（教程）".to_owned(),
            reference_group_label: "参考与 API".to_owned(),
            reference_overview_label: "总览".to_owned(),
            reserved_subdirs: ["explanations", "how-to", "implementation", "troubleshooting"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            max_depth: None,
            home_links: vec![
                LinkConfig::new("简介", "/guide/"),
                LinkConfig::new("环境搭建", "/guide/setup/"),
            ],
            sections: vec![
                SectionConfig {
                    text: "原理解读".to_owned(),
                    subdir: "explanations".to_owned(),
                    recursive: true,
                },
                SectionConfig {
                    text: "操作指南".to_owned(),
                    subdir: "how-to".to_owned(),
                    recursive: true,
                },
            ],
            modules: Vec::new(),
        }
    }
}

/// Theme options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Top navigation bar.
    pub navbar: Vec<LinkConfig>,
    /// Source repository (e.g., "owner/name").
    pub repo: Option<String>,
    /// Docs directory inside the repository, for edit links.
    pub docs_dir: String,
    /// Show "edit this page" links.
    pub edit_link: bool,
    /// Text of the edit link.
    pub edit_link_text: String,
    /// Show last-updated timestamps.
    pub last_updated: bool,
    /// Show contributors.
    pub contributors: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            navbar: vec![
                LinkConfig::new("指南", "/guide/"),
                LinkConfig::new("参考", "/reference/"),
            ],
            repo: None,
            docs_dir: "docs".to_owned(),
            edit_link: true,
            edit_link_text: "在 GitHub 上编辑此页".to_owned(),
            last_updated: true,
            contributors: false,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`theme.repo`").
        field: String,
        /// Error message (e.g., "${`REPO`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `navgen.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated last.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(index_label) = &settings.index_label {
            self.docs_resolved.index_label.clone_from(index_label);
        }
        if let Some(locale) = &settings.locale {
            self.docs_resolved.locale.clone_from(locale);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            sidebar: SidebarSettings::default(),
            theme: ThemeConfig::default(),
            docs_resolved: DocsConfig::with_source_dir(base.join("docs")),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically at the end of [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_docs()?;
        self.validate_sidebar()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        let base = &self.site.base;
        if !base.starts_with('/') || !base.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base must start and end with '/', got '{base}'"
            )));
        }
        Ok(())
    }

    fn validate_docs(&self) -> Result<(), ConfigError> {
        let docs = &self.docs_resolved;
        require_non_empty(docs.document_extension.trim_start_matches('.'), "docs.document_extension")?;
        require_non_empty(&docs.page_extension, "docs.page_extension")?;
        require_non_empty(&docs.index_file, "docs.index_file")?;
        require_non_empty(&docs.index_label, "docs.index_label")?;
        require_non_empty(&docs.locale, "docs.locale")?;
        Ok(())
    }

    fn validate_sidebar(&self) -> Result<(), ConfigError> {
        for (i, section) in self.sidebar.sections.iter().enumerate() {
            require_non_empty(&section.text, &format!("sidebar.sections[{i}].text"))?;
        }
        for (i, module) in self.sidebar.modules.iter().enumerate() {
            require_non_empty(&module.path, &format!("sidebar.modules[{i}].path"))?;
            require_non_empty(&module.name, &format!("sidebar.modules[{i}].name"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        self.site.base = expand::expand_env(&self.site.base, "site.base")?;
        if let Some(ref repo) = self.theme.repo {
            self.theme.repo = Some(expand::expand_env(repo, "theme.repo")?);
        }
        Ok(())
    }

    /// Resolve the raw docs section against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let defaults = DocsConfig::with_source_dir(
            config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
        );
        let raw = &self.docs;

        self.docs_resolved = DocsConfig {
            document_extension: raw.document_extension.clone().unwrap_or(defaults.document_extension),
            page_extension: raw.page_extension.clone().unwrap_or(defaults.page_extension),
            index_file: raw.index_file.clone().unwrap_or(defaults.index_file),
            index_label: raw.index_label.clone().unwrap_or(defaults.index_label),
            locale: raw.locale.clone().unwrap_or(defaults.locale),
            guide_dir: raw.guide_dir.clone().unwrap_or(defaults.guide_dir),
            reference_dir: raw.reference_dir.clone().unwrap_or(defaults.reference_dir),
            source_dir: defaults.source_dir,
        };
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.site.title.is_empty());
        assert_eq!(config.site.lang, "zh-CN");
        assert_eq!(config.site.base, "/");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(config.docs_resolved.index_file, "README.md");
        assert_eq!(config.docs_resolved.locale, "zh-Hans-CN");
        assert_eq!(config.sidebar.sections.len(), 2);
        assert!(config.sidebar.modules.is_empty());
        assert!(config.theme.edit_link);
        assert!(config.theme.last_updated);
        assert!(!config.theme.contributors);
    }

    fn titled_config() -> Config {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.title = "Handbook".to_owned();
        config
    }

    #[test]
    fn test_default_config_requires_title() {
        let config = Config::default_with_base(Path::new("/test"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.title"));

        assert!(titled_config().validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.site.title.is_empty());
        assert_eq!(config.theme.navbar.len(), 2);
        assert_eq!(config.sidebar.reserved_subdirs.len(), 4);
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r##"
[site]
title = "Medical Imaging Docs"
description = "DICOM viewer handbook"
lang = "en-US"
base = "/handbook/"
head = [["meta", { name = "theme-color", content = "#3eaf7c" }]]
"##;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "Medical Imaging Docs");
        assert_eq!(config.site.description, "DICOM viewer handbook");
        assert_eq!(config.site.lang, "en-US");
        assert_eq!(config.site.base, "/handbook/");
        assert_eq!(config.site.head.len(), 1);
        let (tag, attrs) = &config.site.head[0];
        assert_eq!(tag, "meta");
        assert_eq!(attrs.get("content").map(String::as_str), Some("#3eaf7c"));
    }

    #[test]
    fn test_parse_sidebar_config() {
        let toml = r#"
[sidebar]
index_group_suffix = "Index"
reserved_subdirs = ["internals"]
max_depth = 2

[[sidebar.home_links]]
text = "Intro"
link = "/guide/"

[[sidebar.sections]]
text = "Troubleshooting"
subdir = "troubleshooting"
recursive = false

[[sidebar.sections]]
text = "Concepts"
subdir = "explanations"

[[sidebar.modules]]
path = "core"
name = "Core Engine"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let sidebar = &config.sidebar;
        assert_eq!(sidebar.index_group_suffix, "Index");
        assert_eq!(sidebar.start_group_label, "开始");
        assert_eq!(sidebar.reserved_subdirs, vec!["internals"]);
        assert_eq!(sidebar.max_depth, Some(2));
        assert_eq!(sidebar.home_links, vec![LinkConfig::new("Intro", "/guide/")]);
        assert_eq!(
            sidebar.sections,
            vec![
                SectionConfig {
                    text: "Troubleshooting".to_owned(),
                    subdir: "troubleshooting".to_owned(),
                    recursive: false,
                },
                SectionConfig {
                    text: "Concepts".to_owned(),
                    subdir: "explanations".to_owned(),
                    recursive: true,
                },
            ]
        );
        assert_eq!(
            sidebar.modules,
            vec![ModuleConfig {
                path: "core".to_owned(),
                name: "Core Engine".to_owned(),
            }]
        );
    }

    #[test]
    fn test_parse_theme_config() {
        let toml = r#"
[theme]
repo = "acme/handbook"
edit_link = false
contributors = true

[[theme.navbar]]
text = "GitHub"
link = "https://github.com/acme/handbook"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.theme.repo.as_deref(), Some("acme/handbook"));
        assert!(!config.theme.edit_link);
        assert!(config.theme.contributors);
        assert_eq!(config.theme.edit_link_text, "在 GitHub 上编辑此页");
        assert_eq!(
            config.theme.navbar,
            vec![LinkConfig::new("GitHub", "https://github.com/acme/handbook")]
        );
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[docs]
source_dir = "content"
document_extension = "markdown"
index_label = "Overview"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/content")
        );
        assert_eq!(config.docs_resolved.document_extension, "markdown");
        assert_eq!(config.docs_resolved.index_label, "Overview");
        assert_eq!(config.docs_resolved.page_extension, "html");
        assert_eq!(config.docs_resolved.guide_dir, "guide");
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            locale: Some("en".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/custom/docs"));
        assert_eq!(config.docs_resolved.locale, "en");
        assert_eq!(config.docs_resolved.index_label, "索引"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(config.docs_resolved.locale, "zh-Hans-CN");
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NAVGEN_CFG_TITLE", "Handbook");
            std::env::set_var("NAVGEN_CFG_REPO", "acme/handbook");
        }
        let toml = r#"
[site]
title = "${NAVGEN_CFG_TITLE}"
base = "${NAVGEN_CFG_BASE_UNSET:-/}"

[theme]
repo = "${NAVGEN_CFG_REPO}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.site.title, "Handbook");
        assert_eq!(config.site.base, "/");
        assert_eq!(config.theme.repo.as_deref(), Some("acme/handbook"));
        unsafe {
            std::env::remove_var("NAVGEN_CFG_TITLE");
            std::env::remove_var("NAVGEN_CFG_REPO");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NAVGEN_CFG_MISSING");
        }
        let toml = r#"
[theme]
repo = "${NAVGEN_CFG_MISSING}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "theme.repo"));
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.title = "  ".to_owned();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn test_validate_base_slashes() {
        let mut config = titled_config();
        config.site.base = "/handbook".to_owned();
        assert!(config.validate().is_err());

        config.site.base = "handbook/".to_owned();
        assert!(config.validate().is_err());

        config.site.base = "/handbook/".to_owned();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_document_extension() {
        let mut config = titled_config();
        config.docs_resolved.document_extension = ".".to_owned();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("docs.document_extension"));
    }

    #[test]
    fn test_validate_empty_locale() {
        let mut config = titled_config();
        config.docs_resolved.locale = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_module_without_path() {
        let mut config = titled_config();
        config.sidebar.modules.push(ModuleConfig {
            path: String::new(),
            name: "Core".to_owned(),
        });

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("sidebar.modules[0].path"));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("navgen.toml");
        fs::write(
            &path,
            r#"
[site]
title = "Handbook"

[docs]
source_dir = "content"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.title, "Handbook");
        assert_eq!(config.docs_resolved.source_dir, temp_dir.path().join("content"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("navgen.toml");
        fs::write(&path, "[site]\ntitle = \"Handbook\"\n\n[docs]\nindex_label = \"Index\"\n").unwrap();
        let settings = CliSettings {
            index_label: Some("总览".to_owned()),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.docs_resolved.index_label, "总览");
    }

    #[test]
    fn test_load_rejects_invalid_cli_settings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("navgen.toml");
        fs::write(&path, "[site]\ntitle = \"Handbook\"\n").unwrap();
        let settings = CliSettings {
            locale: Some(String::new()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/navgen.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_parse_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("navgen.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
