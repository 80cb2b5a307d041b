//! Expansion resolver: ancestor closure and expand-all.

use crate::keys::KeyList;
use crate::registry::NodeRegistry;

/// Add every ancestor of every expanded node to the expanded set.
///
/// Keys already present keep their position; new ancestor keys are appended,
/// nearest ancestor first. Applying it twice changes nothing.
pub fn auto_expand(registry: &NodeRegistry, expanded: KeyList) -> KeyList {
    let nodes = registry.find_nodes_by_keys(&expanded);
    let mut next = expanded;
    for id in nodes {
        for ancestor in registry.ancestors(id) {
            if let Some(key) = registry.key(ancestor) {
                next.insert(key);
            }
        }
    }
    next
}

/// Append the key of every node that has registered children.
pub fn expand_all(registry: &NodeRegistry, expanded: KeyList) -> KeyList {
    let mut next = expanded;
    next.extend(registry.parent_keys());
    next
}
