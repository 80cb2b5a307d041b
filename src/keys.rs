//! Node keys, ordered key collections and depth-first traversal.
//!
//! [`KeyList`] is the ordered, deduplicated collection backing every key set
//! the tree tracks (expanded, selected, checked, half-checked, loaded).
//! [`toggle`] is the copy-on-write membership toggle; [`traverse`] is the
//! pre-order walk with subtree pruning used by every resolver.

use std::borrow::Borrow;
use std::fmt;

// ---------------------------------------------------------------------------
// NodeKey
// ---------------------------------------------------------------------------

/// Opaque node identifier, unique within a tree and stable across renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(String);

impl NodeKey {
    /// Create a key from anything string-like.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for NodeKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&NodeKey> for NodeKey {
    fn from(key: &NodeKey) -> Self {
        key.clone()
    }
}

impl Borrow<str> for NodeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ---------------------------------------------------------------------------
// KeyList
// ---------------------------------------------------------------------------

/// Ordered collection of unique node keys.
///
/// Order is insertion order. It matters for display (expanded, selected) and is
/// irrelevant for the checked sets, which only rely on deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyList(Vec<NodeKey>);

impl KeyList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Whether `key` is in the list.
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k.as_str() == key)
    }

    /// Append `key` if absent. Returns `true` if it was added.
    pub fn insert(&mut self, key: impl Into<NodeKey>) -> bool {
        let key = key.into();
        if self.contains(key.as_str()) {
            return false;
        }
        self.0.push(key);
        true
    }

    /// Remove `key` if present. Returns `true` if it was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.0.iter().position(|k| k.as_str() == key) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    /// In-place membership toggle: present → ensure in list, absent → ensure out.
    ///
    /// Only call this on a list you own exclusively. Shared snapshots go through
    /// [`toggle`] / [`KeyList::toggled`] instead.
    pub fn toggle(&mut self, present: bool, key: &NodeKey) {
        if present {
            self.insert(key);
        } else {
            self.remove(key.as_str());
        }
    }

    /// Copy-on-write toggle: returns a new list, leaving `self` untouched.
    pub fn toggled(&self, present: bool, key: &NodeKey) -> Self {
        toggle(present, self, key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate keys in order.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeKey> {
        self.0.iter()
    }

    /// Borrow the keys as a slice.
    pub fn as_slice(&self) -> &[NodeKey] {
        &self.0
    }

    /// Keys as string slices, in order.
    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(NodeKey::as_str).collect()
    }

    /// Keys as string slices, sorted. Handy when only set semantics matter.
    pub fn sorted_strs(&self) -> Vec<&str> {
        let mut keys = self.as_strs();
        keys.sort_unstable();
        keys
    }

    /// Whether both lists hold the same keys, ignoring order.
    pub fn same_keys(&self, other: &KeyList) -> bool {
        self.len() == other.len() && self.iter().all(|k| other.contains(k.as_str()))
    }

    /// Consume the list and return the underlying vector.
    pub fn into_vec(self) -> Vec<NodeKey> {
        self.0
    }
}

impl<K: Into<NodeKey>> FromIterator<K> for KeyList {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut list = KeyList::new();
        for key in iter {
            list.insert(key);
        }
        list
    }
}

impl<K: Into<NodeKey>> Extend<K> for KeyList {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Into<NodeKey>> From<Vec<K>> for KeyList {
    fn from(keys: Vec<K>) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<NodeKey>, const N: usize> From<[K; N]> for KeyList {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a KeyList {
    type Item = &'a NodeKey;
    type IntoIter = std::slice::Iter<'a, NodeKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for KeyList {
    type Item = NodeKey;
    type IntoIter = std::vec::IntoIter<NodeKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Copy-on-write membership toggle.
///
/// If `present` and `key` is absent, the returned list has it appended. If not
/// `present` and `key` is there, the returned list omits it. `collection` itself
/// is never modified, so anyone holding it keeps seeing the old state.
pub fn toggle(present: bool, collection: &KeyList, key: &NodeKey) -> KeyList {
    let mut next = collection.clone();
    next.toggle(present, key);
    next
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// Visitor verdict for [`traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Descend into this node's children.
    Continue,
    /// Skip this node's subtree.
    Prune,
}

impl From<bool> for Walk {
    fn from(descend: bool) -> Self {
        if descend {
            Walk::Continue
        } else {
            Walk::Prune
        }
    }
}

/// Depth-first pre-order walk over `roots` and their descendants.
///
/// `children` yields the ordered children of a node, typically as an iterator
/// over a borrowed slice. `visitor` is called once per visited node; returning
/// [`Walk::Prune`] skips that node's subtree. Siblings are visited in order.
pub fn traverse<N, C, I, V>(roots: &[N], children: C, mut visitor: V)
where
    N: Copy,
    C: Fn(N) -> I,
    I: IntoIterator<Item = N>,
    I::IntoIter: DoubleEndedIterator,
    V: FnMut(N) -> Walk,
{
    let mut stack: Vec<N> = roots.iter().rev().copied().collect();
    while let Some(current) = stack.pop() {
        if visitor(current) == Walk::Prune {
            continue;
        }
        // Reverse so the first child is visited first.
        stack.extend(children(current).into_iter().rev());
    }
}

// ===========================================================================
// Tests
// ===========================================================================
