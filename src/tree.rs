//! Root container: registry, root flags and the tree's key sets.
//!
//! [`Tree`] owns the [`NodeRegistry`] and a [`TreeState`] snapshot. All state
//! transitions go through [`Tree::handle`] (user events) or the `set_*`
//! methods (externally supplied values). Both run synchronously to
//! completion: the full recompute is committed before any notification is
//! returned.
//!
//! The snapshot sits behind an `Rc`. Callers holding a [`Tree::snapshot`] keep
//! seeing the state as it was; the tree copies the snapshot on its next write
//! instead of mutating what they hold.

use std::collections::HashSet;
use std::rc::Rc;

use log::debug;

use crate::config::{CheckedKeysInput, RootFlags, TreeConfig};
use crate::error::{LoadError, TreeError};
use crate::event::{Command, NodeInfo, Notification};
use crate::keys::{KeyList, NodeKey};
use crate::loader::LoadData;
use crate::registry::{NodeData, NodeId, NodeRegistry, TreeItem};
use crate::resolve::{self, CheckedKeys};

// ---------------------------------------------------------------------------
// TreeState
// ---------------------------------------------------------------------------

/// The key sets a tree maintains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeState {
    /// Expanded nodes, in expansion order.
    pub expanded_keys: KeyList,
    /// Selected nodes, in selection order.
    pub selected_keys: KeyList,
    /// Fully checked nodes.
    pub checked_keys: KeyList,
    /// Half-checked nodes.
    pub half_checked_keys: KeyList,
    /// Nodes whose children finished loading.
    pub loaded_keys: KeyList,
}

impl TreeState {
    /// Copy of the checked pair, ready to hand to a resolver.
    pub fn checked(&self) -> CheckedKeys {
        CheckedKeys {
            checked: self.checked_keys.clone(),
            half_checked: self.half_checked_keys.clone(),
        }
    }

    fn set_checked(&mut self, keys: CheckedKeys) {
        self.checked_keys = keys.checked;
        self.half_checked_keys = keys.half_checked;
    }
}

// ---------------------------------------------------------------------------
// Tree
// ---------------------------------------------------------------------------

/// A tree selector's state core.
#[derive(Debug)]
pub struct Tree {
    registry: NodeRegistry,
    flags: RootFlags,
    multiple: bool,
    auto_expand_parent: bool,
    default_expand_all: bool,
    state: Rc<TreeState>,
}

impl Tree {
    /// Create an empty tree from `config`.
    ///
    /// Supplied key sets are stored as given (selection is dropped for
    /// checkable trees). They are normalized by [`attach`](Self::attach) once
    /// the nodes are registered.
    pub fn new(config: TreeConfig) -> Self {
        let TreeConfig {
            flags,
            multiple,
            auto_expand_parent,
            default_expand_all,
            checked_keys,
            expanded_keys,
            selected_keys,
            loaded_keys,
        } = config;

        let checked = match checked_keys {
            CheckedKeysInput::List(keys) => CheckedKeys::new(keys, KeyList::new()),
            CheckedKeysInput::Pair(pair) => pair.normalized(),
        };
        let state = TreeState {
            expanded_keys,
            selected_keys: resolve::initial_selection(selected_keys, flags.checkable),
            checked_keys: checked.checked,
            half_checked_keys: checked.half_checked,
            loaded_keys,
        };

        Self {
            registry: NodeRegistry::new(),
            flags,
            multiple,
            auto_expand_parent,
            default_expand_all,
            state: Rc::new(state),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The node registry.
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Root flags.
    pub fn flags(&self) -> RootFlags {
        self.flags
    }

    /// Whether clicks toggle membership instead of replacing the selection.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Current state.
    pub fn state(&self) -> &TreeState {
        &self.state
    }

    /// Shared handle to the current state. Later transitions never modify it.
    pub fn snapshot(&self) -> Rc<TreeState> {
        Rc::clone(&self.state)
    }

    /// Data of the node registered under `key`.
    pub fn node(&self, key: &str) -> Option<&NodeData> {
        self.registry
            .find_node_by_key(key)
            .and_then(|id| self.registry.get(id))
    }

    /// Whether `key` is fully checked.
    pub fn is_checked(&self, key: &str) -> bool {
        self.state.checked_keys.contains(key)
    }

    /// Whether `key` is half checked.
    pub fn is_half_checked(&self, key: &str) -> bool {
        self.state.half_checked_keys.contains(key)
    }

    /// Whether `key` is expanded.
    pub fn is_expanded(&self, key: &str) -> bool {
        self.state.expanded_keys.contains(key)
    }

    /// Whether `key` is selected.
    pub fn is_selected(&self, key: &str) -> bool {
        self.state.selected_keys.contains(key)
    }

    /// Registered nodes that are fully checked, in tree order.
    pub fn checked_nodes(&self) -> Vec<NodeId> {
        self.registry.find_nodes_by_keys(&self.state.checked_keys)
    }

    /// Registered nodes that are expanded, in tree order.
    pub fn expanded_nodes(&self) -> Vec<NodeId> {
        self.registry.find_nodes_by_keys(&self.state.expanded_keys)
    }

    /// Registered nodes that are selected, in tree order.
    pub fn selected_nodes(&self) -> Vec<NodeId> {
        self.registry.find_nodes_by_keys(&self.state.selected_keys)
    }

    // ── Registration ─────────────────────────────────────────────────

    /// Register one node under the node keyed `parent`, or at top level.
    ///
    /// A node registered under a checked parent inherits the checked state.
    pub fn register(&mut self, parent: Option<&str>, data: NodeData) -> Result<NodeId, TreeError> {
        let parent = match parent {
            Some(key) => Some(
                self.registry
                    .find_node_by_key(key)
                    .ok_or_else(|| TreeError::UnknownParent(key.to_owned()))?,
            ),
            None => None,
        };
        let id = self.registry.register(parent, data)?;
        if let Some(parent) = parent {
            self.inherit_check(parent);
        }
        Ok(id)
    }

    /// Register a forest of items at top level, parents before children.
    ///
    /// The forest is registered whole or not at all: a key that is already
    /// registered or repeated within `items` fails before anything is added.
    pub fn mount(&mut self, items: impl IntoIterator<Item = TreeItem>) -> Result<(), TreeError> {
        self.mount_batch(None, items.into_iter().collect())
    }

    /// Register a forest of items under the node keyed `parent`.
    ///
    /// Same all-or-nothing rule as [`mount`](Self::mount). Items mounted under
    /// a checked parent inherit the checked state.
    pub fn mount_under(
        &mut self,
        parent: &str,
        items: impl IntoIterator<Item = TreeItem>,
    ) -> Result<(), TreeError> {
        let parent_id = self
            .registry
            .find_node_by_key(parent)
            .ok_or_else(|| TreeError::UnknownParent(parent.to_owned()))?;
        self.mount_batch(Some(parent_id), items.into_iter().collect())?;
        self.inherit_check(parent_id);
        Ok(())
    }

    fn mount_batch(&mut self, parent: Option<NodeId>, items: Vec<TreeItem>) -> Result<(), TreeError> {
        self.check_batch(&items)?;
        for item in items {
            self.mount_item(parent, item)?;
        }
        Ok(())
    }

    /// First key of `items` (pre-order) that is already registered or repeats
    /// an earlier key of the batch.
    fn check_batch(&self, items: &[TreeItem]) -> Result<(), TreeError> {
        let mut seen: HashSet<&str> = self
            .registry
            .nodes
            .values()
            .map(|data| data.key.as_str())
            .collect();
        let mut stack: Vec<&TreeItem> = items.iter().rev().collect();
        while let Some(item) = stack.pop() {
            if !seen.insert(item.data.key.as_str()) {
                return Err(TreeError::DuplicateKey(item.data.key.clone()));
            }
            stack.extend(item.children.iter().rev());
        }
        Ok(())
    }

    fn mount_item(&mut self, parent: Option<NodeId>, item: TreeItem) -> Result<NodeId, TreeError> {
        let TreeItem { data, children } = item;
        let id = self.registry.register(parent, data)?;
        for child in children {
            self.mount_item(Some(id), child)?;
        }
        Ok(id)
    }

    /// Unmount the node keyed `key` and its subtree.
    ///
    /// Key sets are left alone: keys are stable across renders and the node
    /// may mount again.
    pub fn unmount(&mut self, key: &str) -> Option<NodeData> {
        let id = self.registry.find_node_by_key(key)?;
        self.registry.unregister(id)
    }

    /// Normalize the supplied key sets against the registered nodes.
    ///
    /// Runs once the initial nodes are mounted: expands ancestors of expanded
    /// nodes (with `auto_expand_parent`), expands every parent (with
    /// `default_expand_all`) and recomputes the checked pair from the checked
    /// list alone.
    pub fn attach(&mut self) {
        let registry = &self.registry;
        let root_disabled = self.flags.disabled;
        let auto_expand_parent = self.auto_expand_parent;
        let default_expand_all = self.default_expand_all;

        let state = Rc::make_mut(&mut self.state);
        let mut expanded = std::mem::take(&mut state.expanded_keys);
        if auto_expand_parent {
            expanded = resolve::auto_expand(registry, expanded);
        }
        if default_expand_all {
            expanded = resolve::expand_all(registry, expanded);
        }
        state.expanded_keys = expanded;

        let checked = resolve::apply_check_many(registry, root_disabled, &state.checked_keys);
        state.set_checked(checked);
        debug!(
            "attached {} nodes: {} expanded, {} checked, {} half checked",
            registry.len(),
            state.expanded_keys.len(),
            state.checked_keys.len(),
            state.half_checked_keys.len()
        );
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Process one command and return the resulting notifications.
    ///
    /// Commands naming unknown or disabled nodes change nothing and produce no
    /// notification.
    pub fn handle(&mut self, command: Command) -> Vec<Notification> {
        debug!("handling {} command", command.name());
        let notification = match command {
            Command::Select(key) => self.on_select(key),
            Command::Check { key, checked } => self.on_check(key, checked),
            Command::Expand {
                key,
                expanded,
                expanded_keys,
            } => self.on_expand(key, expanded, expanded_keys),
            Command::ExpandAll => Some(self.on_expand_all()),
            Command::Load(key) => self.on_load(key),
        };
        notification.into_iter().collect()
    }

    fn on_select(&mut self, key: NodeKey) -> Option<Notification> {
        let data = self.interactive_node(&key)?;
        if !data.is_selectable(self.flags.selectable) {
            debug!("select on non-selectable node `{key}` ignored");
            return None;
        }

        let selected = resolve::select(self.state.selected_keys.clone(), &key, self.multiple);
        let now_selected = selected.contains(key.as_str());
        Rc::make_mut(&mut self.state).selected_keys = selected;

        Some(Notification::Select {
            selected_keys: self.state.selected_keys.clone(),
            info: NodeInfo {
                node: key,
                state: now_selected,
            },
        })
    }

    fn on_check(&mut self, key: NodeKey, checked: bool) -> Option<Notification> {
        let data = self.interactive_node(&key)?;
        if !data.is_checkable(self.flags.checkable) {
            debug!("check on non-checkable node `{key}` ignored");
            return None;
        }

        let next = resolve::apply_check(
            &self.registry,
            self.flags.disabled,
            key.as_str(),
            checked,
            self.state.checked(),
        );
        Rc::make_mut(&mut self.state).set_checked(next);

        Some(Notification::Check {
            checked_keys: self.state.checked_keys.clone(),
            half_checked_keys: self.state.half_checked_keys.clone(),
            info: NodeInfo {
                node: key,
                state: checked,
            },
        })
    }

    fn on_expand(&mut self, key: NodeKey, expanded: bool, expanded_keys: KeyList) -> Option<Notification> {
        if self.registry.find_node_by_key(key.as_str()).is_none() {
            debug!("expand on unknown key `{key}` ignored");
            return None;
        }
        // Taken as-is: collapsing a parent must not be undone by auto-expansion.
        Rc::make_mut(&mut self.state).expanded_keys = expanded_keys;

        Some(Notification::Expand {
            expanded_keys: self.state.expanded_keys.clone(),
            info: NodeInfo {
                node: key,
                state: expanded,
            },
        })
    }

    fn on_expand_all(&mut self) -> Notification {
        let expanded = resolve::expand_all(&self.registry, self.state.expanded_keys.clone());
        Rc::make_mut(&mut self.state).expanded_keys = expanded;
        Notification::ExpandAll {
            expanded_keys: self.state.expanded_keys.clone(),
        }
    }

    fn on_load(&mut self, key: NodeKey) -> Option<Notification> {
        let Some(node) = self.registry.find_node_by_key(key.as_str()) else {
            debug!("load on unknown key `{key}` ignored");
            return None;
        };
        self.inherit_check(node);
        Rc::make_mut(&mut self.state).loaded_keys.insert(&key);

        Some(Notification::Load {
            loaded_keys: self.state.loaded_keys.clone(),
            node: key,
        })
    }

    /// Cascade a checked `parent` onto children registered after it was checked.
    fn inherit_check(&mut self, parent: NodeId) {
        let Some(key) = self.registry.key(parent) else {
            return;
        };
        if !self.state.checked_keys.contains(key.as_str()) {
            return;
        }
        let next = resolve::apply_check(
            &self.registry,
            self.flags.disabled,
            key.as_str(),
            true,
            self.state.checked(),
        );
        Rc::make_mut(&mut self.state).set_checked(next);
    }

    /// Node data for `key` if it exists and is not disabled.
    fn interactive_node(&self, key: &NodeKey) -> Option<&NodeData> {
        let Some(data) = self.node(key.as_str()) else {
            debug!("command on unknown key `{key}` ignored");
            return None;
        };
        if data.is_disabled(self.flags.disabled) {
            debug!("command on disabled node `{key}` ignored");
            return None;
        }
        Some(data)
    }

    // ── Externally supplied values ───────────────────────────────────

    /// Replace the expanded set, closing it over ancestors when
    /// `auto_expand_parent` is on.
    pub fn set_expanded_keys(&mut self, keys: impl Into<KeyList>) {
        let mut expanded = keys.into();
        if self.auto_expand_parent {
            expanded = resolve::auto_expand(&self.registry, expanded);
        }
        Rc::make_mut(&mut self.state).expanded_keys = expanded;
    }

    /// Replace the selected set.
    pub fn set_selected_keys(&mut self, keys: impl Into<KeyList>) {
        Rc::make_mut(&mut self.state).selected_keys = keys.into();
    }

    /// Replace the checked state.
    ///
    /// A plain list is fully recomputed. A pair is taken as supplied, with
    /// checked keys winning over half-checked ones.
    pub fn set_checked_keys(&mut self, input: impl Into<CheckedKeysInput>) {
        let next = match input.into() {
            CheckedKeysInput::List(keys) => {
                resolve::apply_check_many(&self.registry, self.flags.disabled, &keys)
            }
            CheckedKeysInput::Pair(pair) => pair.normalized(),
        };
        Rc::make_mut(&mut self.state).set_checked(next);
    }

    // ── Lazy loading ─────────────────────────────────────────────────

    /// Load the children of `key` through `loader`, register them and run a
    /// [`Command::Load`].
    ///
    /// Unknown keys, leaves and already loaded nodes are skipped. A batch that
    /// fails to register leaves the tree untouched, so the load can be retried.
    pub async fn load_children<L: LoadData>(
        &mut self,
        key: &str,
        loader: &L,
    ) -> Result<Vec<Notification>, LoadError<L::Error>> {
        let Some(node) = self.registry.find_node_by_key(key) else {
            return Ok(Vec::new());
        };
        let is_leaf = self.registry.get(node).is_some_and(|data| data.is_leaf);
        if is_leaf || self.state.loaded_keys.contains(key) {
            debug!("load of `{key}` skipped");
            return Ok(Vec::new());
        }

        let items = loader.load(key).await.map_err(LoadError::Loader)?;
        self.mount_batch(Some(node), items)?;
        Ok(self.handle(Command::load(key)))
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(TreeConfig::default())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
