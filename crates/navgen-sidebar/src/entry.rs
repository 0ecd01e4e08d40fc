//! Navigation entries and the sidebar mapping.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Navigation node handed to the renderer.
///
/// Serialized untagged, so a leaf is `{"text", "link"}` and a group is
/// `{"text", "collapsible", "collapsed", "children"}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Link to a single page.
    Leaf {
        /// Display title.
        #[serde(rename = "text")]
        title: String,
        /// Absolute site path (always starts with `/`).
        link: String,
    },
    /// Titled group of entries.
    Group {
        /// Display title.
        #[serde(rename = "text")]
        title: String,
        /// Whether the renderer lets the reader fold the group.
        collapsible: bool,
        /// Whether the group starts folded.
        collapsed: bool,
        /// Child entries (never empty).
        children: Vec<NavEntry>,
    },
}

impl NavEntry {
    /// Create a leaf entry.
    pub fn leaf(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Leaf {
            title: title.into(),
            link: link.into(),
        }
    }

    /// Create a collapsible group, or `None` if `children` is empty.
    pub fn group(title: impl Into<String>, collapsed: bool, children: Vec<NavEntry>) -> Option<Self> {
        (!children.is_empty()).then(|| Self::Group {
            title: title.into(),
            collapsible: true,
            collapsed,
            children,
        })
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Leaf { title, .. } | Self::Group { title, .. } => title,
        }
    }

    /// Link target for leaves.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Leaf { link, .. } => Some(link),
            Self::Group { .. } => None,
        }
    }

    /// Children for groups; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[NavEntry] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Group { children, .. } => children,
        }
    }
}

/// Ordered mapping from top-level site paths to their sidebars.
///
/// Keys keep insertion order, which is also the serialized key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationMap {
    entries: Vec<(String, Vec<NavEntry>)>,
}

impl NavigationMap {
    /// Insert a sidebar, replacing an existing one for the same key in place.
    pub(crate) fn insert(&mut self, key: String, sidebar: Vec<NavEntry>) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = sidebar;
        } else {
            self.entries.push((key, sidebar));
        }
    }

    /// Sidebar for a site path (e.g., "/guide/core/").
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[NavEntry]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, sidebar)| sidebar.as_slice())
    }

    /// Site paths in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(site path, sidebar)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NavEntry])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of site paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the mapping has no site paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for NavigationMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, sidebar) in &self.entries {
            map.serialize_entry(key, sidebar)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_without_children_is_none() {
        assert!(NavEntry::group("Empty", true, Vec::new()).is_none());
    }

    #[test]
    fn test_group_is_collapsible() {
        let group = NavEntry::group("G", false, vec![NavEntry::leaf("A", "/a.html")]).unwrap();
        assert!(matches!(
            group,
            NavEntry::Group {
                collapsible: true,
                collapsed: false,
                ..
            }
        ));
        assert_eq!(group.title(), "G");
        assert_eq!(group.children().len(), 1);
        assert!(group.link().is_none());
    }

    #[test]
    fn test_leaf_serialization() {
        let leaf = NavEntry::leaf("Setup", "/guide/core/how-to/01-setup.html");

        let json = serde_json::to_value(&leaf).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"text": "Setup", "link": "/guide/core/how-to/01-setup.html"})
        );
    }

    #[test]
    fn test_group_serialization() {
        let group = NavEntry::group("操作指南", true, vec![NavEntry::leaf("A", "/a.html")]).unwrap();

        let json = serde_json::to_value(&group).unwrap();

        assert_eq!(json["text"], "操作指南");
        assert_eq!(json["collapsible"], true);
        assert_eq!(json["collapsed"], true);
        assert_eq!(json["children"][0]["link"], "/a.html");
    }

    #[test]
    fn test_map_insert_keeps_order_and_replaces() {
        let mut map = NavigationMap::default();
        map.insert("/guide/".to_owned(), Vec::new());
        map.insert("/reference/".to_owned(), Vec::new());
        map.insert("/guide/".to_owned(), vec![NavEntry::leaf("A", "/a.html")]);

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["/guide/", "/reference/"]);
        assert_eq!(map.get("/guide/").unwrap().len(), 1);
        assert!(map.get("/missing/").is_none());
    }

    #[test]
    fn test_map_serializes_as_ordered_object() {
        let mut map = NavigationMap::default();
        map.insert("/reference/".to_owned(), Vec::new());
        map.insert("/guide/".to_owned(), vec![NavEntry::leaf("A", "/a.html")]);

        let json = serde_json::to_string(&map).unwrap();

        assert_eq!(json, r#"{"/reference/":[],"/guide/":[{"text":"A","link":"/a.html"}]}"#);
    }
}
