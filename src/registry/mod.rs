//! Node registry: slotmap-backed mirror of the rendered tree.

pub mod node;
pub mod query;
pub mod tree;

pub use node::{NodeData, NodeId, TreeItem};
pub use tree::NodeRegistry;
