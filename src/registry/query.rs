//! Registry queries: by key, by key set, by predicate.
//!
//! Every query is a traversal from the top-level nodes. There is deliberately no
//! key index: trees are UI-sized and the registry must reflect mounts and
//! unmounts without extra bookkeeping.

use std::collections::HashSet;

use super::node::{NodeData, NodeId};
use super::tree::NodeRegistry;
use crate::keys::{KeyList, Walk};

impl NodeRegistry {
    /// Find the node registered under `key`. Stops at the first match.
    pub fn find_node_by_key(&self, key: &str) -> Option<NodeId> {
        let mut found = None;
        self.traverse_all(|node_key, id| {
            if found.is_some() {
                return Walk::Prune;
            }
            if node_key.as_str() == key {
                found = Some(id);
                return Walk::Prune;
            }
            Walk::Continue
        });
        found
    }

    /// Find every node whose key is in `keys`, in tree order.
    ///
    /// One traversal regardless of how many keys are requested: each visited
    /// node is tested against a hash set of the targets.
    pub fn find_nodes_by_keys(&self, keys: &KeyList) -> Vec<NodeId> {
        if keys.is_empty() {
            return Vec::new();
        }
        let targets: HashSet<&str> = keys.iter().map(|k| k.as_str()).collect();
        let mut nodes = Vec::new();
        self.traverse_all(|node_key, id| {
            if targets.contains(node_key.as_str()) {
                nodes.push(id);
            }
            Walk::Continue
        });
        nodes
    }

    /// Find all nodes matching an arbitrary predicate, in tree order.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        let mut nodes = Vec::new();
        self.traverse_all(|_, id| {
            if self.nodes.get(id).is_some_and(&predicate) {
                nodes.push(id);
            }
            Walk::Continue
        });
        nodes
    }

    /// Keys of every node that has at least one registered child, in tree order.
    pub fn parent_keys(&self) -> KeyList {
        let mut keys = KeyList::new();
        self.traverse_all(|key, id| {
            if !self.children(id).is_empty() {
                keys.insert(key);
            }
            Walk::Continue
        });
        keys
    }
}

#[cfg(test)]
mod tests {
    use crate::keys::KeyList;
    use crate::registry::node::NodeData;
    use crate::registry::tree::NodeRegistry;

    /// ```text
    /// 0-0 ─┬─ 0-0-0 ─┬─ 0-0-0-0
    ///      │         └─ 0-0-0-1 (disabled)
    ///      └─ 0-0-1
    /// 0-1
    /// ```
    fn build_query_tree() -> NodeRegistry {
        let mut reg = NodeRegistry::new();
        let top = reg.register(None, NodeData::new("0-0")).unwrap();
        let mid = reg.register(Some(top), NodeData::new("0-0-0")).unwrap();
        reg.register(Some(mid), NodeData::new("0-0-0-0")).unwrap();
        reg.register(Some(mid), NodeData::new("0-0-0-1").disabled(true))
            .unwrap();
        reg.register(Some(top), NodeData::new("0-0-1")).unwrap();
        reg.register(None, NodeData::new("0-1")).unwrap();
        reg
    }

    fn keys_of(reg: &NodeRegistry, ids: &[crate::registry::NodeId]) -> Vec<String> {
        ids.iter()
            .map(|&id| reg.key(id).unwrap().to_string())
            .collect()
    }

    #[test]
    fn find_by_key_found() {
        let reg = build_query_tree();
        let id = reg.find_node_by_key("0-0-0-1").unwrap();
        assert!(reg.get(id).unwrap().disabled);
    }

    #[test]
    fn find_by_key_missing() {
        let reg = build_query_tree();
        assert!(reg.find_node_by_key("9-9").is_none());
    }

    #[test]
    fn find_by_keys_single_pass_tree_order() {
        let reg = build_query_tree();
        let wanted: KeyList = ["0-1", "0-0-0-0", "missing", "0-0"].into();
        let ids = reg.find_nodes_by_keys(&wanted);
        assert_eq!(keys_of(&reg, &ids), vec!["0-0", "0-0-0-0", "0-1"]);
    }

    #[test]
    fn find_by_keys_empty() {
        let reg = build_query_tree();
        assert!(reg.find_nodes_by_keys(&KeyList::new()).is_empty());
    }

    #[test]
    fn query_all_disabled() {
        let reg = build_query_tree();
        let ids = reg.query_all(|data| data.disabled);
        assert_eq!(keys_of(&reg, &ids), vec!["0-0-0-1"]);
    }

    #[test]
    fn parent_keys_only_nodes_with_children() {
        let reg = build_query_tree();
        assert_eq!(reg.parent_keys().as_strs(), vec!["0-0", "0-0-0"]);
    }

    #[test]
    fn queries_on_empty_registry() {
        let reg = NodeRegistry::new();
        assert!(reg.find_node_by_key("x").is_none());
        assert!(reg.find_nodes_by_keys(&["x"].into()).is_empty());
        assert!(reg.query_all(|_| true).is_empty());
        assert!(reg.parent_keys().is_empty());
    }
}
