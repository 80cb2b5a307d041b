//! Tree configuration: root flags and externally supplied key sets.

use crate::keys::KeyList;
use crate::resolve::CheckedKeys;

// ---------------------------------------------------------------------------
// CheckedKeysInput
// ---------------------------------------------------------------------------

/// Externally supplied checked state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckedKeysInput {
    /// Plain list of checked keys. Half-checked keys are derived.
    List(KeyList),
    /// Explicit `{checked, halfChecked}` pair.
    Pair(CheckedKeys),
}

impl CheckedKeysInput {
    /// The checked half of the input.
    pub fn checked(&self) -> &KeyList {
        match self {
            CheckedKeysInput::List(keys) => keys,
            CheckedKeysInput::Pair(pair) => &pair.checked,
        }
    }
}

impl Default for CheckedKeysInput {
    fn default() -> Self {
        CheckedKeysInput::List(KeyList::new())
    }
}

impl From<KeyList> for CheckedKeysInput {
    fn from(keys: KeyList) -> Self {
        CheckedKeysInput::List(keys)
    }
}

impl From<CheckedKeys> for CheckedKeysInput {
    fn from(pair: CheckedKeys) -> Self {
        CheckedKeysInput::Pair(pair)
    }
}

// ---------------------------------------------------------------------------
// RootFlags
// ---------------------------------------------------------------------------

/// Flags declared once at the root. Nodes may override `checkable` and
/// `selectable`; `disabled` combines with the node flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootFlags {
    pub checkable: bool,
    pub selectable: bool,
    pub disabled: bool,
}

impl Default for RootFlags {
    fn default() -> Self {
        Self {
            checkable: false,
            selectable: true,
            disabled: false,
        }
    }
}

// ---------------------------------------------------------------------------
// TreeConfig
// ---------------------------------------------------------------------------

/// Configuration accepted when a tree is created.
///
/// Supplied key sets are not trusted: [`Tree::attach`](crate::tree::Tree::attach)
/// normalizes them against the registered nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    /// Root flags.
    pub flags: RootFlags,
    /// Multiple selection instead of single selection.
    pub multiple: bool,
    /// Expand ancestors of every expanded node.
    pub auto_expand_parent: bool,
    /// Expand every parent node on attach.
    pub default_expand_all: bool,
    /// Initially checked keys.
    pub checked_keys: CheckedKeysInput,
    /// Initially expanded keys.
    pub expanded_keys: KeyList,
    /// Initially selected keys. Ignored when the tree is checkable.
    pub selected_keys: KeyList,
    /// Keys whose children were already loaded.
    pub loaded_keys: KeyList,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            flags: RootFlags::default(),
            multiple: false,
            auto_expand_parent: true,
            default_expand_all: false,
            checked_keys: CheckedKeysInput::default(),
            expanded_keys: KeyList::new(),
            selected_keys: KeyList::new(),
            loaded_keys: KeyList::new(),
        }
    }
}

impl TreeConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root `checkable` flag (builder).
    pub fn with_checkable(mut self, checkable: bool) -> Self {
        self.flags.checkable = checkable;
        self
    }

    /// Set the root `selectable` flag (builder).
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.flags.selectable = selectable;
        self
    }

    /// Set the root `disabled` flag (builder).
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.flags.disabled = disabled;
        self
    }

    /// Enable multiple selection (builder).
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Set `auto_expand_parent` (builder).
    pub fn with_auto_expand_parent(mut self, auto: bool) -> Self {
        self.auto_expand_parent = auto;
        self
    }

    /// Set `default_expand_all` (builder).
    pub fn with_default_expand_all(mut self, expand_all: bool) -> Self {
        self.default_expand_all = expand_all;
        self
    }

    /// Set the initially checked keys, as a list or a pair (builder).
    pub fn with_checked_keys(mut self, checked: impl Into<CheckedKeysInput>) -> Self {
        self.checked_keys = checked.into();
        self
    }

    /// Set the initially expanded keys (builder).
    pub fn with_expanded_keys(mut self, keys: impl Into<KeyList>) -> Self {
        self.expanded_keys = keys.into();
        self
    }

    /// Set the initially selected keys (builder).
    pub fn with_selected_keys(mut self, keys: impl Into<KeyList>) -> Self {
        self.selected_keys = keys.into();
        self
    }

    /// Set the already loaded keys (builder).
    pub fn with_loaded_keys(mut self, keys: impl Into<KeyList>) -> Self {
        self.loaded_keys = keys.into();
        self
    }
}
