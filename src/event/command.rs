//! Inbound commands consumed by the root container.

use crate::keys::{KeyList, NodeKey};

/// An event reported by the rendering layer, processed by
/// [`Tree::handle`](crate::tree::Tree::handle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A node row was clicked.
    Select(NodeKey),
    /// A node's checkbox was toggled.
    Check { key: NodeKey, checked: bool },
    /// A node's switcher was toggled. `expanded_keys` is the full expanded set
    /// the node computed for itself.
    Expand {
        key: NodeKey,
        expanded: bool,
        expanded_keys: KeyList,
    },
    /// Expand every node that has children.
    ExpandAll,
    /// A node finished loading its children.
    Load(NodeKey),
}

impl Command {
    /// Select `key`.
    pub fn select(key: impl Into<NodeKey>) -> Self {
        Command::Select(key.into())
    }

    /// Check (`true`) or uncheck (`false`) `key`.
    pub fn check(key: impl Into<NodeKey>, checked: bool) -> Self {
        Command::Check {
            key: key.into(),
            checked,
        }
    }

    /// Expand or collapse `key`, deriving the expanded set from `current`.
    pub fn toggle_expand(key: impl Into<NodeKey>, expanded: bool, current: &KeyList) -> Self {
        let key = key.into();
        Command::Expand {
            expanded_keys: current.toggled(expanded, &key),
            key,
            expanded,
        }
    }

    /// Loading of `key`'s children completed.
    pub fn load(key: impl Into<NodeKey>) -> Self {
        Command::Load(key.into())
    }

    /// Human-readable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Select(_) => "Select",
            Command::Check { .. } => "Check",
            Command::Expand { .. } => "Expand",
            Command::ExpandAll => "ExpandAll",
            Command::Load(_) => "Load",
        }
    }
}
