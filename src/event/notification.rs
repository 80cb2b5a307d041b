//! Outbound notifications produced by the root container after a recompute.
//!
//! Each notification is one-shot: it carries the full new key set plus an info
//! payload describing the node that triggered it.

use crate::keys::{KeyList, NodeKey};

/// Node-level detail attached to select/check/expand notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    /// Key of the node the command targeted.
    pub node: NodeKey,
    /// New per-node state: selected, checked or expanded respectively.
    pub state: bool,
}

/// Outbound notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Selection changed (`onSelect`).
    Select {
        selected_keys: KeyList,
        info: NodeInfo,
    },
    /// Check state changed (`onCheck`).
    Check {
        checked_keys: KeyList,
        half_checked_keys: KeyList,
        info: NodeInfo,
    },
    /// A node was expanded or collapsed (`onExpand`).
    Expand {
        expanded_keys: KeyList,
        info: NodeInfo,
    },
    /// Every parent node was expanded.
    ExpandAll { expanded_keys: KeyList },
    /// A node finished loading (`onLoad`).
    Load { loaded_keys: KeyList, node: NodeKey },
}

impl Notification {
    /// Human-readable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Notification::Select { .. } => "select",
            Notification::Check { .. } => "check",
            Notification::Expand { .. } => "expand",
            Notification::ExpandAll { .. } => "expandAll",
            Notification::Load { .. } => "load",
        }
    }

    /// Key of the node that triggered this notification, if any.
    pub fn node(&self) -> Option<&NodeKey> {
        match self {
            Notification::Select { info, .. }
            | Notification::Check { info, .. }
            | Notification::Expand { info, .. } => Some(&info.node),
            Notification::Load { node, .. } => Some(node),
            Notification::ExpandAll { .. } => None,
        }
    }
}
