//! Registry operations: register, unregister, parent/child access, traversal.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};
use crate::error::TreeError;
use crate::keys::{self, NodeKey, Walk};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// In-memory mirror of the rendered tree, backed by a slotmap arena.
///
/// Nodes register themselves with their parent when mounted. Top-level nodes
/// have no parent node: they hang off the root container and are kept in the
/// ordered `roots` list. Parent/child links live in secondary maps, so there
/// are no ownership cycles and removal is O(subtree size).
#[derive(Debug)]
pub struct NodeRegistry {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    roots: Vec<NodeId>,
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            roots: Vec::new(),
        }
    }

    /// Register a node under `parent`, or at top level when `parent` is `None`.
    ///
    /// The node is appended to the end of its parent's ordered child list.
    pub fn register(&mut self, parent: Option<NodeId>, data: NodeData) -> Result<NodeId, TreeError> {
        if let Some(parent_id) = parent {
            if !self.nodes.contains_key(parent_id) {
                return Err(TreeError::UnknownParent(format!("{parent_id:?}")));
            }
        }
        if self.find_node_by_key(data.key.as_str()).is_some() {
            return Err(TreeError::DuplicateKey(data.key));
        }

        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        match parent {
            Some(parent_id) => {
                self.parent.insert(id, parent_id);
                if let Some(siblings) = self.children.get_mut(parent_id) {
                    siblings.push(id);
                }
            }
            None => self.roots.push(id),
        }
        Ok(id)
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the `NodeData` for the removed node, or `None` if it didn't exist.
    pub fn unregister(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        // Detach from parent's children list, or from the top level.
        match self.parent.remove(id) {
            Some(parent_id) => {
                if let Some(siblings) = self.children.get_mut(parent_id) {
                    siblings.retain(|&child| child != id);
                }
            }
            None => self.roots.retain(|&root| root != id),
        }

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed = data;
            }
        }

        removed
    }

    /// The parent node, or `None` for top-level (and unknown) nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Ordered children. Empty if the node has none or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Ordered top-level nodes.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Ancestors from the immediate parent up to the top-level node.
    ///
    /// Does not include `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Key of a node, if it exists.
    pub fn key(&self, id: NodeId) -> Option<&NodeKey> {
        self.nodes.get(id).map(|data| &data.key)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` names a registered node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Effective disabled state: root flag OR node flag. Unknown nodes count as disabled.
    pub fn is_disabled(&self, id: NodeId, root_disabled: bool) -> bool {
        self.nodes
            .get(id)
            .map_or(true, |data| data.is_disabled(root_disabled))
    }

    /// Pre-order traversal over the subtrees rooted at `start`.
    ///
    /// The visitor receives each node's key and handle; returning
    /// [`Walk::Prune`] skips that node's descendants.
    pub fn traverse<V>(&self, start: &[NodeId], mut visitor: V)
    where
        V: FnMut(&NodeKey, NodeId) -> Walk,
    {
        keys::traverse(
            start,
            move |id| self.children(id).iter().copied(),
            |id| match self.nodes.get(id) {
                Some(data) => visitor(&data.key, id),
                None => Walk::Prune,
            },
        );
    }

    /// Pre-order traversal over the whole tree.
    pub fn traverse_all<V>(&self, visitor: V)
    where
        V: FnMut(&NodeKey, NodeId) -> Walk,
    {
        self.traverse(&self.roots, visitor);
    }

    /// All descendants of `id` in pre-order, not including `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        self.traverse(self.children(id), |_, node| {
            result.push(node);
            Walk::Continue
        });
        result
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a small test tree:
    /// ```text
    ///       root        other
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (NodeRegistry, NodeId, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut reg = NodeRegistry::new();
        let root = reg.register(None, NodeData::new("root")).unwrap();
        let other = reg.register(None, NodeData::new("other")).unwrap();
        let a = reg.register(Some(root), NodeData::new("a")).unwrap();
        let b = reg.register(Some(root), NodeData::new("b")).unwrap();
        let c = reg.register(Some(a), NodeData::new("c")).unwrap();
        let d = reg.register(Some(a), NodeData::new("d")).unwrap();
        (reg, root, other, a, b, c, d)
    }

    #[test]
    fn register_top_level_keeps_order() {
        let (reg, root, other, ..) = build_tree();
        assert_eq!(reg.roots(), &[root, other]);
        assert_eq!(reg.parent(root), None);
    }

    #[test]
    fn register_child_relationships() {
        let (reg, root, _other, a, b, c, d) = build_tree();
        assert_eq!(reg.parent(a), Some(root));
        assert_eq!(reg.parent(c), Some(a));
        assert_eq!(reg.children(root), &[a, b]);
        assert_eq!(reg.children(a), &[c, d]);
        assert!(reg.children(c).is_empty());
    }

    #[test]
    fn register_duplicate_key_fails() {
        let (mut reg, root, ..) = build_tree();
        let err = reg.register(Some(root), NodeData::new("c")).unwrap_err();
        assert_eq!(err, TreeError::DuplicateKey(NodeKey::from("c")));
        assert_eq!(reg.len(), 6);
    }

    #[test]
    fn register_stale_parent_fails() {
        let (mut reg, _root, _other, a, ..) = build_tree();
        reg.unregister(a);
        let err = reg.register(Some(a), NodeData::new("x")).unwrap_err();
        assert!(matches!(err, TreeError::UnknownParent(_)));
    }

    #[test]
    fn ancestors_stop_at_top_level() {
        let (reg, root, _other, a, _b, c, _d) = build_tree();
        assert_eq!(reg.ancestors(c), vec![a, root]);
        assert!(reg.ancestors(root).is_empty());
    }

    #[test]
    fn unregister_subtree() {
        let (mut reg, root, _other, a, b, c, d) = build_tree();
        let removed = reg.unregister(a).unwrap();
        assert_eq!(removed.key, "a");
        assert!(!reg.contains(a));
        assert!(!reg.contains(c));
        assert!(!reg.contains(d));
        assert_eq!(reg.children(root), &[b]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn unregister_top_level() {
        let (mut reg, root, other, ..) = build_tree();
        reg.unregister(root);
        assert_eq!(reg.roots(), &[other]);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn unregister_nonexistent() {
        let (mut reg, _root, _other, a, ..) = build_tree();
        reg.unregister(a);
        assert!(reg.unregister(a).is_none());
    }

    #[test]
    fn traverse_all_preorder() {
        let (reg, ..) = build_tree();
        let mut keys = Vec::new();
        reg.traverse_all(|key, _| {
            keys.push(key.to_string());
            Walk::Continue
        });
        assert_eq!(keys, vec!["root", "a", "c", "d", "b", "other"]);
    }

    #[test]
    fn traverse_prunes() {
        let (reg, ..) = build_tree();
        let mut keys = Vec::new();
        reg.traverse_all(|key, _| {
            keys.push(key.to_string());
            (key != "a").into()
        });
        assert_eq!(keys, vec!["root", "a", "b", "other"]);
    }

    #[test]
    fn descendants_excludes_self() {
        let (reg, root, _other, a, b, c, d) = build_tree();
        assert_eq!(reg.descendants(root), vec![a, c, d, b]);
        assert!(reg.descendants(c).is_empty());
    }

    #[test]
    fn effective_disabled() {
        let mut reg = NodeRegistry::new();
        let on = reg.register(None, NodeData::new("on")).unwrap();
        let off = reg.register(None, NodeData::new("off").disabled(true)).unwrap();
        assert!(!reg.is_disabled(on, false));
        assert!(reg.is_disabled(on, true));
        assert!(reg.is_disabled(off, false));
    }

    #[test]
    fn default_is_empty() {
        let reg = NodeRegistry::default();
        assert!(reg.is_empty());
        assert!(reg.roots().is_empty());
    }
}
