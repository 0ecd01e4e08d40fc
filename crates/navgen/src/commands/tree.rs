//! `navgen tree` command implementation.

use clap::Args;
use console::Term;
use navgen_sidebar::{NavEntry, NavigationMap, SidebarBuilder};

use super::{SourceArgs, sidebar_config_from_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,

    /// Only print the sidebar for this site path (e.g., "/guide/core/").
    #[arg(short, long)]
    path: Option<String>,
}

impl TreeArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.source.load_config()?;
        let builder = SidebarBuilder::new(sidebar_config_from_config(&config))?;
        let map = builder.build()?;

        let stdout = Term::stdout();
        for line in outline(&map, self.path.as_deref()) {
            stdout.write_line(&line)?;
        }

        if let Some(path) = &self.path
            && map.get(path).is_none()
        {
            output.error(&format!("No sidebar for {path}"));
            output.info(&format!(
                "Available: {}",
                map.keys().collect::<Vec<_>>().join(", ")
            ));
        } else {
            output.highlight(&format!("{} sidebars", map.len()));
        }
        Ok(())
    }
}

/// Render the mapping (or one of its sidebars) as indented lines.
///
/// Groups are prefixed with `+`, or `>` when collapsed; leaves show their link.
fn outline(map: &NavigationMap, only: Option<&str>) -> Vec<String> {
    let mut lines = Vec::new();
    for (path, sidebar) in map.iter() {
        if only.is_some_and(|p| p != path) {
            continue;
        }
        lines.push(path.to_owned());
        for entry in sidebar {
            push_entry(entry, 1, &mut lines);
        }
    }
    lines
}

fn push_entry(entry: &NavEntry, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match entry {
        NavEntry::Leaf { title, link } => lines.push(format!("{indent}- {title} ({link})")),
        NavEntry::Group {
            title,
            collapsed,
            children,
            ..
        } => {
            let marker = if *collapsed { '>' } else { '+' };
            lines.push(format!("{indent}{marker} {title}"));
            for child in children {
                push_entry(child, depth + 1, lines);
            }
        }
    }
}
