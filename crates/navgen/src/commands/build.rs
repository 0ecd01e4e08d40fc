//! `navgen build` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::Term;
use navgen_sidebar::SidebarBuilder;

use super::{SourceArgs, sidebar_config_from_config};
use crate::error::CliError;
use crate::manifest::SiteManifest;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,

    /// Output file for the manifest (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.source.load_config()?;
        output.info(&format!(
            "Source: {}",
            config.docs_resolved.source_dir.display()
        ));

        let builder = SidebarBuilder::new(sidebar_config_from_config(&config))?;
        let sidebar = builder.build()?;
        let manifest = SiteManifest::new(&config, &sidebar);

        let json = if self.compact {
            serde_json::to_string(&manifest)?
        } else {
            serde_json::to_string_pretty(&manifest)?
        };

        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, format!("{json}\n"))?;
                output.success(&format!(
                    "Wrote {} sidebars to {}",
                    sidebar.len(),
                    path.display()
                ));
            }
            None => Term::stdout().write_line(&json)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write(root: &std::path::Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn args(config: PathBuf, output: PathBuf, compact: bool) -> BuildArgs {
        BuildArgs {
            source: SourceArgs {
                config: Some(config),
                source_dir: None,
                index_label: None,
                locale: None,
                verbose: false,
            },
            output: Some(output),
            compact,
        }
    }

    #[test]
    fn test_build_writes_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(
            root,
            "navgen.toml",
            "[site]\ntitle = \"Handbook\"\n\n[theme]\nrepo = \"acme/handbook\"\n",
        );
        write(root, "docs/guide/core/README.md", "# Core Overview\n");
        write(root, "docs/guide/core/how-to/01-setup.md", "Steps.\n");
        let out = root.join("dist/site.json");

        args(root.join("navgen.toml"), out.clone(), false)
            .execute()
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["title"], "Handbook");
        assert_eq!(value["theme"]["repo"], "acme/handbook");
        let core = &value["theme"]["sidebar"]["/guide/core/"];
        assert_eq!(core[0]["text"], "Core · 索引");
        assert_eq!(core[0]["children"][0]["link"], "/guide/core/");
        assert_eq!(core[1]["text"], "操作指南");
        assert_eq!(
            core[1]["children"][0],
            serde_json::json!({"text": "Setup", "link": "/guide/core/how-to/01-setup.html"})
        );
    }

    #[test]
    fn test_build_compact_is_single_line() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "navgen.toml", "[site]\ntitle = \"Handbook\"\n");
        fs::create_dir_all(root.join("docs")).unwrap();
        let out = root.join("site.json");

        args(root.join("navgen.toml"), out.clone(), true)
            .execute()
            .unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_build_missing_content_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(
            root,
            "navgen.toml",
            "[site]\ntitle = \"Handbook\"\n\n[docs]\nsource_dir = \"missing\"\n",
        );

        let err = args(root.join("navgen.toml"), root.join("site.json"), false)
            .execute()
            .unwrap_err();

        assert!(matches!(err, CliError::Sidebar(_)));
        assert!(!root.join("site.json").exists());
    }
}
