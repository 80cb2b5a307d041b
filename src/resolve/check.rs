//! Checked-state resolver: full/half check propagation.
//!
//! A check action on one node runs two passes over the registry:
//!
//! 1. **Ancestor pass**: from the parent up to the top level, each ancestor is
//!    re-derived from its enabled children: fully checked when all of them are
//!    checked (only ever promoted by a check action), half checked when some but
//!    not all of them are checked or half checked. The pass halts at the first
//!    disabled ancestor.
//! 2. **Descendant pass**: every enabled descendant mirrors the new state of
//!    the acted-on node. Disabled descendants and their subtrees are skipped.
//!
//! Resolvers take their key sets by value. Callers that need to keep a snapshot
//! clone before calling; the resolver never touches anything it does not own.

use log::{debug, trace};

use crate::keys::{KeyList, NodeKey, Walk};
use crate::registry::{NodeId, NodeRegistry};

/// The pair of checked key sets a tree maintains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedKeys {
    /// Fully checked keys.
    pub checked: KeyList,
    /// Half-checked keys: not fully checked, but with checked enabled children.
    pub half_checked: KeyList,
}

impl CheckedKeys {
    /// Create a pair from the two key sets.
    pub fn new(checked: impl Into<KeyList>, half_checked: impl Into<KeyList>) -> Self {
        Self {
            checked: checked.into(),
            half_checked: half_checked.into(),
        }
    }

    /// Drop half-checked keys that are also fully checked.
    pub fn normalized(mut self) -> Self {
        let checked = &self.checked;
        self.half_checked = self
            .half_checked
            .iter()
            .filter(|key| !checked.contains(key.as_str()))
            .collect();
        self
    }

    /// Whether any key sits in both sets.
    pub fn has_overlap(&self) -> bool {
        self.checked
            .iter()
            .any(|key| self.half_checked.contains(key.as_str()))
    }
}

/// Check or uncheck `key` and propagate the change through the tree.
///
/// Unknown keys, disabled nodes and disabled trees leave `keys` unchanged.
pub fn apply_check(
    registry: &NodeRegistry,
    root_disabled: bool,
    key: &str,
    is_checked: bool,
    keys: CheckedKeys,
) -> CheckedKeys {
    let Some(node) = registry.find_node_by_key(key) else {
        debug!("check on unknown key `{key}` ignored");
        return keys;
    };
    if registry.is_disabled(node, root_disabled) {
        debug!("check on disabled node `{key}` ignored");
        return keys;
    }

    let CheckedKeys {
        mut checked,
        mut half_checked,
    } = keys;

    let node_key = NodeKey::from(key);
    checked.toggle(is_checked, &node_key);
    half_checked.remove(key);

    // Ancestor pass.
    let mut current = registry.parent(node);
    while let Some(ancestor) = current {
        if registry.is_disabled(ancestor, root_disabled) {
            trace!("ancestor pass halted at disabled node {ancestor:?}");
            break;
        }
        let Some(ancestor_key) = registry.key(ancestor) else {
            break;
        };

        let enabled = enabled_child_keys(registry, root_disabled, ancestor);
        let all_checked = enabled.iter().all(|k| checked.contains(k.as_str()));
        checked.toggle(all_checked && is_checked, ancestor_key);

        let half = !all_checked
            && enabled
                .iter()
                .any(|k| checked.contains(k.as_str()) || half_checked.contains(k.as_str()));
        half_checked.toggle(half, ancestor_key);
        trace!("ancestor `{ancestor_key}`: all_checked={all_checked} half={half}");

        current = registry.parent(ancestor);
    }

    // Descendant pass.
    registry.traverse(registry.children(node), |descendant_key, id| {
        if registry.is_disabled(id, root_disabled) {
            return Walk::Prune;
        }
        checked.toggle(is_checked, descendant_key);
        half_checked.remove(descendant_key.as_str());
        Walk::Continue
    });

    CheckedKeys {
        checked,
        half_checked,
    }
}

/// Normalize an externally supplied checked list into a consistent pair.
///
/// Starts from empty sets and checks each key in turn, skipping keys already
/// reached by an earlier cascade. Unknown keys are dropped. Keys of disabled
/// nodes are kept as checked but never propagate, since nothing the user does
/// can change them.
pub fn apply_check_many(registry: &NodeRegistry, root_disabled: bool, keys: &KeyList) -> CheckedKeys {
    let mut resolved = CheckedKeys::default();
    for key in keys {
        if resolved.checked.contains(key.as_str()) {
            continue;
        }
        match registry.find_node_by_key(key.as_str()) {
            None => debug!("checked key `{key}` matches no node, dropped"),
            Some(id) if registry.is_disabled(id, root_disabled) => {
                resolved.checked.insert(key);
            }
            Some(_) => {
                resolved = apply_check(registry, root_disabled, key.as_str(), true, resolved);
            }
        }
    }
    resolved
}

fn enabled_child_keys<'a>(
    registry: &'a NodeRegistry,
    root_disabled: bool,
    parent: NodeId,
) -> Vec<&'a NodeKey> {
    registry
        .children(parent)
        .iter()
        .filter(|&&child| !registry.is_disabled(child, root_disabled))
        .filter_map(|&child| registry.key(child))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::NodeData;
    use pretty_assertions::assert_eq;

    fn register(reg: &mut NodeRegistry, parent: Option<&str>, data: NodeData) {
        let parent = parent.map(|p| reg.find_node_by_key(p).unwrap());
        reg.register(parent, data).unwrap();
    }

    /// `A: [B, C]`
    fn abc() -> NodeRegistry {
        let mut reg = NodeRegistry::new();
        register(&mut reg, None, NodeData::new("A"));
        register(&mut reg, Some("A"), NodeData::new("B"));
        register(&mut reg, Some("A"), NodeData::new("C"));
        reg
    }

    /// ```text
    /// R ─┬─ M ─┬─ L1
    ///    │     └─ L2
    ///    └─ S
    /// ```
    fn deep() -> NodeRegistry {
        let mut reg = NodeRegistry::new();
        register(&mut reg, None, NodeData::new("R"));
        register(&mut reg, Some("R"), NodeData::new("M"));
        register(&mut reg, Some("M"), NodeData::new("L1"));
        register(&mut reg, Some("M"), NodeData::new("L2"));
        register(&mut reg, Some("R"), NodeData::new("S"));
        reg
    }

    fn check(reg: &NodeRegistry, key: &str, on: bool, keys: CheckedKeys) -> CheckedKeys {
        apply_check(reg, false, key, on, keys)
    }

    #[test]
    fn check_one_child_half_checks_parent() {
        let reg = abc();
        let keys = check(&reg, "B", true, CheckedKeys::default());
        assert_eq!(keys.checked.as_strs(), vec!["B"]);
        assert_eq!(keys.half_checked.as_strs(), vec!["A"]);
    }

    #[test]
    fn check_all_children_promotes_parent() {
        let reg = abc();
        let keys = check(&reg, "B", true, CheckedKeys::default());
        let keys = check(&reg, "C", true, keys);
        assert_eq!(keys.checked.as_strs(), vec!["B", "C", "A"]);
        assert!(keys.half_checked.is_empty());
    }

    #[test]
    fn uncheck_parent_clears_subtree() {
        let reg = abc();
        let keys = check(&reg, "A", false, CheckedKeys::new(["A", "B", "C"], KeyList::new()));
        assert!(keys.checked.is_empty());
        assert!(keys.half_checked.is_empty());
    }

    #[test]
    fn check_parent_cascades_down() {
        let reg = deep();
        let keys = check(&reg, "R", true, CheckedKeys::default());
        assert_eq!(keys.checked.sorted_strs(), vec!["L1", "L2", "M", "R", "S"]);
        assert!(keys.half_checked.is_empty());
    }

    #[test]
    fn deep_leaf_half_checks_every_ancestor() {
        let reg = deep();
        let keys = check(&reg, "L1", true, CheckedKeys::default());
        assert_eq!(keys.checked.as_strs(), vec!["L1"]);
        assert_eq!(keys.half_checked.as_strs(), vec!["M", "R"]);
    }

    #[test]
    fn uncheck_leaf_demotes_checked_ancestors() {
        let reg = deep();
        let keys = check(&reg, "R", true, CheckedKeys::default());
        let keys = check(&reg, "L2", false, keys);
        assert_eq!(keys.checked.sorted_strs(), vec!["L1", "S"]);
        assert_eq!(keys.half_checked.sorted_strs(), vec!["M", "R"]);
    }

    #[test]
    fn uncheck_last_leaf_clears_half_states() {
        let reg = deep();
        let keys = check(&reg, "L1", true, CheckedKeys::default());
        let keys = check(&reg, "L1", false, keys);
        assert!(keys.checked.is_empty());
        assert!(keys.half_checked.is_empty());
    }

    #[test]
    fn uncheck_half_checked_parent_clears_stale_half_states() {
        let reg = deep();
        let keys = check(&reg, "L1", true, CheckedKeys::default());
        let keys = check(&reg, "M", false, keys);
        assert!(keys.checked.is_empty());
        assert!(keys.half_checked.is_empty());
    }

    #[test]
    fn check_half_checked_parent_never_overlaps() {
        let reg = deep();
        let keys = check(&reg, "L1", true, CheckedKeys::default());
        let keys = check(&reg, "R", true, keys);
        assert!(!keys.has_overlap());
        assert!(keys.half_checked.is_empty());
        assert_eq!(keys.checked.len(), 5);
    }

    #[test]
    fn disabled_child_excluded_from_cascade_and_parent_state() {
        let mut reg = NodeRegistry::new();
        register(&mut reg, None, NodeData::new("A"));
        register(&mut reg, Some("A"), NodeData::new("B").disabled(true));
        register(&mut reg, Some("A"), NodeData::new("C"));

        let keys = check(&reg, "A", true, CheckedKeys::default());
        assert_eq!(keys.checked.sorted_strs(), vec!["A", "C"]);
        assert!(!keys.checked.contains("B"));

        // Checking the only enabled child is enough to promote the parent.
        let keys = check(&reg, "C", true, CheckedKeys::default());
        assert_eq!(keys.checked.sorted_strs(), vec!["A", "C"]);
        assert!(keys.half_checked.is_empty());
    }

    #[test]
    fn disabled_subtree_is_pruned() {
        let mut reg = NodeRegistry::new();
        register(&mut reg, None, NodeData::new("R"));
        register(&mut reg, Some("R"), NodeData::new("D").disabled(true));
        register(&mut reg, Some("D"), NodeData::new("D1"));
        register(&mut reg, Some("R"), NodeData::new("E"));

        let keys = check(&reg, "R", true, CheckedKeys::default());
        assert_eq!(keys.checked.sorted_strs(), vec!["E", "R"]);
    }

    #[test]
    fn disabled_ancestor_halts_ancestor_pass() {
        let mut reg = NodeRegistry::new();
        register(&mut reg, None, NodeData::new("TOP"));
        register(&mut reg, Some("TOP"), NodeData::new("D").disabled(true));
        register(&mut reg, Some("D"), NodeData::new("M"));
        register(&mut reg, Some("M"), NodeData::new("L"));
        register(&mut reg, Some("TOP"), NodeData::new("SIB"));

        let keys = check(&reg, "L", true, CheckedKeys::default());
        // M is below the disabled node and still gets promoted; D and TOP stay untouched.
        assert_eq!(keys.checked.sorted_strs(), vec!["L", "M"]);
        assert!(keys.half_checked.is_empty());
    }

    #[test]
    fn uncheck_below_disabled_ancestor_keeps_it() {
        let mut reg = NodeRegistry::new();
        register(&mut reg, None, NodeData::new("TOP"));
        register(&mut reg, Some("TOP"), NodeData::new("D").disabled(true));
        register(&mut reg, Some("D"), NodeData::new("L"));
        register(&mut reg, Some("TOP"), NodeData::new("SIB"));

        let before = CheckedKeys::new(["TOP", "SIB", "D", "L"], KeyList::new());
        let keys = check(&reg, "L", false, before);
        // D was checked before and stays so; TOP and SIB are out of reach.
        assert_eq!(keys.checked.sorted_strs(), vec!["D", "SIB", "TOP"]);
        assert!(keys.half_checked.is_empty());
    }

    #[test]
    fn disabled_node_is_noop() {
        let mut reg = abc();
        register(&mut reg, Some("A"), NodeData::new("X").disabled(true));
        let before = CheckedKeys::new(["B"], ["A"]);
        let after = check(&reg, "X", true, before.clone());
        assert_eq!(after, before);
    }

    #[test]
    fn disabled_tree_is_noop() {
        let reg = abc();
        let keys = apply_check(&reg, true, "B", true, CheckedKeys::default());
        assert_eq!(keys, CheckedKeys::default());
    }

    #[test]
    fn unknown_key_is_noop() {
        let reg = abc();
        let before = CheckedKeys::new(["B"], ["A"]);
        assert_eq!(check(&reg, "nope", true, before.clone()), before);
    }

    // ── apply_check_many ─────────────────────────────────────────────

    #[test]
    fn many_promotes_parent_once_all_children_listed() {
        let reg = abc();
        let keys = apply_check_many(&reg, false, &["B", "C"].into());
        assert_eq!(keys.checked.sorted_strs(), vec!["A", "B", "C"]);
        assert!(keys.half_checked.is_empty());
    }

    #[test]
    fn many_expands_parent_to_descendants() {
        let reg = deep();
        let keys = apply_check_many(&reg, false, &["M"].into());
        assert_eq!(keys.checked.sorted_strs(), vec!["L1", "L2", "M"]);
        assert_eq!(keys.half_checked.as_strs(), vec!["R"]);
    }

    #[test]
    fn many_drops_unknown_keeps_disabled() {
        let mut reg = abc();
        register(&mut reg, Some("A"), NodeData::new("X").disabled(true));
        let keys = apply_check_many(&reg, false, &["ghost", "X", "B"].into());
        assert_eq!(keys.checked.sorted_strs(), vec!["B", "X"]);
        assert_eq!(keys.half_checked.as_strs(), vec!["A"]);
    }

    #[test]
    fn many_is_stable_on_consistent_input() {
        let reg = deep();
        let once = apply_check_many(&reg, false, &["L1", "S"].into());
        let twice = apply_check_many(&reg, false, &once.checked);
        assert!(once.checked.same_keys(&twice.checked));
        assert!(once.half_checked.same_keys(&twice.half_checked));
    }

    #[test]
    fn normalized_prefers_checked() {
        let keys = CheckedKeys::new(["A"], ["A", "B"]).normalized();
        assert_eq!(keys.half_checked.as_strs(), vec!["B"]);
        assert!(!keys.has_overlap());
    }
}
