//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod tree;

use std::path::PathBuf;

use clap::Args;
use navgen_config::{CliSettings, Config};
use navgen_sidebar::{HomeLink, ModuleRef, ModuleSection, SidebarConfig, SidebarLabels};

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use tree::TreeArgs;

/// Arguments shared by every command that scans the content tree.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover navgen.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Content root directory (overrides config).
    #[arg(short, long)]
    pub(crate) source_dir: Option<PathBuf>,

    /// Title of index documents without a content title (overrides config).
    #[arg(long)]
    pub(crate) index_label: Option<String>,

    /// Locale used to order file names (overrides config).
    #[arg(long, env = "NAVGEN_LOCALE")]
    pub(crate) locale: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl SourceArgs {
    /// Load the configuration with command-line overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            index_label: self.index_label.clone(),
            locale: self.locale.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(
            config = ?config.config_path,
            source = %config.docs_resolved.source_dir.display(),
            "Loaded configuration"
        );
        Ok(config)
    }
}

/// Translate the loaded configuration into the builder's scan settings.
pub(crate) fn sidebar_config_from_config(config: &Config) -> SidebarConfig {
    let docs = &config.docs_resolved;
    let sidebar = &config.sidebar;

    SidebarConfig {
        content_root: docs.source_dir.clone(),
        document_extension: docs.document_extension.clone(),
        page_extension: docs.page_extension.clone(),
        index_file_name: docs.index_file.clone(),
        index_label: docs.index_label.clone(),
        locale: docs.locale.clone(),
        guide_dir: docs.guide_dir.clone(),
        reference_dir: docs.reference_dir.clone(),
        reserved_subdir_names: sidebar
            .reserved_subdirs
            .iter()
            .map(|name| name.to_lowercase())
            .collect(),
        guide_home_links: sidebar
            .home_links
            .iter()
            .map(|l| HomeLink::new(&l.text, &l.link))
            .collect(),
        sections: sidebar
            .sections
            .iter()
            .map(|s| ModuleSection {
                text: s.text.clone(),
                subdir: s.subdir.clone(),
                recursive: s.recursive,
            })
            .collect(),
        modules: sidebar
            .modules
            .iter()
            .map(|m| ModuleRef::new(&m.path, &m.name))
            .collect(),
        max_depth: sidebar.max_depth,
        labels: SidebarLabels {
            index_group_suffix: sidebar.index_group_suffix.clone(),
            start_group: sidebar.start_group_label.clone(),
            modules_group: sidebar.modules_group_label.clone(),
            reference_group: sidebar.reference_group_label.clone(),
            reference_overview: sidebar.reference_overview_label.clone(),
        },
    }
}
