//! Registration errors.

use crate::keys::NodeKey;

/// Errors from registering nodes into a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The parent handle or key does not name a registered node.
    #[error("unknown parent node `{0}`")]
    UnknownParent(String),
    /// A node with this key is already registered.
    #[error("duplicate node key `{0}`")]
    DuplicateKey(NodeKey),
}

/// Errors from lazily loading a node's children.
#[derive(Debug, thiserror::Error)]
pub enum LoadError<E> {
    /// The loader itself failed.
    #[error("loading children failed: {0}")]
    Loader(E),
    /// The loaded children could not be registered.
    #[error(transparent)]
    Register(#[from] TreeError),
}
