//! # canopy
//!
//! The state core of a hierarchical tree selector: which nodes are expanded,
//! selected, fully checked or half checked, kept consistent across an
//! arbitrarily deep tree that registers its nodes at runtime.
//!
//! Rendering is left to the caller. A view layer mounts nodes into a
//! [`Tree`], turns user gestures into [`Command`]s and renders from the
//! returned [`Notification`]s and the [`TreeState`] snapshot.
//!
//! ## Core Systems
//!
//! - **[`keys`]**: node keys, ordered key lists, depth-first traversal
//! - **[`registry`]**: slotmap-backed node arena with parent and child links
//! - **[`resolve`]**: check, expand and select propagation over the registry
//! - **[`tree`]**: the root container owning registry, flags and key sets
//! - **[`event`]**: inbound commands, outbound notifications
//! - **[`config`]**: tree configuration builder
//! - **[`loader`]**: async lazy loading of children
//! - **[`upload`]**: file-list state of an upload widget
//! - **[`testing`]**: headless pilot and outline snapshots
//!
//! ## Example
//!
//! ```
//! use canopy::{Command, Tree, TreeConfig, TreeItem};
//!
//! let mut tree = Tree::new(TreeConfig::new().with_checkable(true));
//! tree.mount([TreeItem::new("A").with_children([TreeItem::new("B"), TreeItem::new("C")])])
//!     .unwrap();
//! tree.attach();
//!
//! tree.handle(Command::check("B", true));
//! assert!(tree.is_half_checked("A"));
//! tree.handle(Command::check("C", true));
//! assert!(tree.is_checked("A"));
//! ```

// Foundation
pub mod error;
pub mod keys;

// Core systems
pub mod registry;
pub mod resolve;

// Root container
pub mod config;
pub mod event;
pub mod loader;
pub mod tree;

// Other widgets
pub mod upload;

// Testing
pub mod testing;

pub use config::{CheckedKeysInput, RootFlags, TreeConfig};
pub use error::{LoadError, TreeError};
pub use event::{Command, NodeInfo, Notification};
pub use keys::{KeyList, NodeKey};
pub use registry::{NodeData, NodeId, TreeItem};
pub use resolve::CheckedKeys;
pub use tree::{Tree, TreeState};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use canopy_macros::tree;
