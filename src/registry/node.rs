//! Node types: NodeId, NodeData, TreeItem.

use slotmap::new_key_type;

use crate::keys::NodeKey;

new_key_type! {
    /// Arena handle for a registered tree node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// Unique, render-stable key.
    pub key: NodeKey,
    /// Display title.
    pub title: Option<String>,
    /// Opaque value carried for the caller.
    pub value: Option<String>,
    /// Whether the node is declared a leaf (never has or loads children).
    pub is_leaf: bool,
    /// Node-level disabled flag. Effective disabled also includes the root flag.
    pub disabled: bool,
    /// Overrides the root `checkable` flag when set.
    pub checkable: Option<bool>,
    /// Overrides the root `selectable` flag when set.
    pub selectable: Option<bool>,
}

impl NodeData {
    /// Create a new `NodeData` with the given key and defaults for the rest.
    pub fn new(key: impl Into<NodeKey>) -> Self {
        Self {
            key: key.into(),
            title: None,
            value: None,
            is_leaf: false,
            disabled: false,
            checkable: None,
            selectable: None,
        }
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the value (builder).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Mark the node as a leaf (builder).
    pub fn leaf(mut self, is_leaf: bool) -> Self {
        self.is_leaf = is_leaf;
        self
    }

    /// Set the node-level disabled flag (builder).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Override the root `checkable` flag for this node (builder).
    pub fn checkable(mut self, checkable: bool) -> Self {
        self.checkable = Some(checkable);
        self
    }

    /// Override the root `selectable` flag for this node (builder).
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = Some(selectable);
        self
    }

    /// Root disabled OR node disabled.
    pub fn is_disabled(&self, root_disabled: bool) -> bool {
        root_disabled || self.disabled
    }

    /// Node override, falling back to the root flag.
    pub fn is_checkable(&self, root_checkable: bool) -> bool {
        self.checkable.unwrap_or(root_checkable)
    }

    /// Node override, falling back to the root flag.
    pub fn is_selectable(&self, root_selectable: bool) -> bool {
        self.selectable.unwrap_or(root_selectable)
    }

    /// Display label: the title if set, otherwise the key.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(self.key.as_str())
    }
}

/// Declarative description of a node and its subtree, the equivalent of one
/// entry of a widget's `treeData`.
///
/// A forest of items is mounted with [`Tree::mount`](crate::tree::Tree::mount),
/// which registers each node with its parent in pre-order.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeItem {
    /// The node itself.
    pub data: NodeData,
    /// Ordered children.
    pub children: Vec<TreeItem>,
}

impl TreeItem {
    /// Create an item with the given key and no children.
    pub fn new(key: impl Into<NodeKey>) -> Self {
        Self {
            data: NodeData::new(key),
            children: Vec::new(),
        }
    }

    /// Wrap existing node data.
    pub fn from_data(data: NodeData) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.data.title = Some(title.into());
        self
    }

    /// Set the value (builder).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.data.value = Some(value.into());
        self
    }

    /// Mark as leaf (builder).
    pub fn leaf(mut self, is_leaf: bool) -> Self {
        self.data.is_leaf = is_leaf;
        self
    }

    /// Set the disabled flag (builder).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.data.disabled = disabled;
        self
    }

    /// Override `checkable` (builder).
    pub fn checkable(mut self, checkable: bool) -> Self {
        self.data.checkable = Some(checkable);
        self
    }

    /// Override `selectable` (builder).
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.data.selectable = Some(selectable);
        self
    }

    /// Append a child (builder).
    pub fn with_child(mut self, child: TreeItem) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children (builder).
    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeItem>) -> Self {
        self.children.extend(children);
        self
    }
}
