//! Lazy loading of a node's children.
//!
//! The tree core is synchronous. Loading is the one async boundary: a
//! [`LoadData`] implementation fetches the children of a node, and
//! [`Tree::load_children`](crate::tree::Tree::load_children) registers them
//! through the regular mount path before resolving state again.

use std::collections::HashMap;
use std::convert::Infallible;
use std::future::Future;

use crate::registry::TreeItem;

/// Source of children for nodes that load them on demand.
pub trait LoadData {
    /// Error reported when loading fails.
    type Error;

    /// Fetch the children of the node registered under `key`.
    fn load(&self, key: &str) -> impl Future<Output = Result<Vec<TreeItem>, Self::Error>>;
}

/// In-memory loader serving pre-built children by parent key.
///
/// Keys without an entry load an empty child list.
#[derive(Debug, Clone, Default)]
pub struct StaticLoader {
    children: HashMap<String, Vec<TreeItem>>,
}

impl StaticLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `children` for `key` (builder).
    pub fn with_children(mut self, key: impl Into<String>, children: Vec<TreeItem>) -> Self {
        self.children.insert(key.into(), children);
        self
    }
}

impl LoadData for StaticLoader {
    type Error = Infallible;

    async fn load(&self, key: &str) -> Result<Vec<TreeItem>, Infallible> {
        Ok(self.children.get(key).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_loader_serves_children() {
        let loader = StaticLoader::new().with_children("a", vec![TreeItem::new("a-0")]);
        let loaded = tokio_test::block_on(loader.load("a")).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].data.key, "a-0");
    }

    #[test]
    fn static_loader_unknown_key_is_empty() {
        let loader = StaticLoader::new();
        let loaded = tokio_test::block_on(loader.load("zzz")).unwrap();
        assert!(loaded.is_empty());
    }
}
