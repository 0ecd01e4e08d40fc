//! Guide module discovery.

use crate::listing::join_rel;
use crate::{ModuleRef, SidebarBuilder};

impl SidebarBuilder {
    /// Discover guide modules.
    ///
    /// Top-level modules come from the configured list, or from the guide
    /// root's subdirectories when the list is empty. Every non-reserved
    /// subdirectory of a top-level module becomes a sub-module named
    /// `"<Module> · <Sub>"`, listed right after its parent.
    #[must_use]
    pub fn scan_modules(&self) -> Vec<ModuleRef> {
        let config = self.config();
        let top_level: Vec<ModuleRef> = if config.modules.is_empty() {
            self.sorted_subdirs(&config.guide_dir)
                .into_iter()
                .map(|dir_name| {
                    let name = self.resolver().title_from_file_name(&dir_name);
                    ModuleRef::new(dir_name, name)
                })
                .collect()
        } else {
            config.modules.clone()
        };

        let mut modules = Vec::with_capacity(top_level.len());
        for module in top_level {
            let module_dir = join_rel(&config.guide_dir, &module.path);
            let subs: Vec<ModuleRef> = self
                .sorted_subdirs(&module_dir)
                .into_iter()
                .filter(|sub| !config.is_reserved(sub))
                .map(|sub| ModuleRef {
                    path: join_rel(&module.path, &sub),
                    name: format!(
                        "{} · {}",
                        module.name,
                        self.resolver().title_from_file_name(&sub)
                    ),
                    top_level: false,
                })
                .collect();
            modules.push(module);
            modules.extend(subs);
        }

        tracing::debug!(count = modules.len(), "Discovered guide modules");
        modules
    }
}
