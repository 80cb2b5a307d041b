//! Pure state resolvers over the node registry.
//!
//! - [`apply_check`] / [`apply_check_many`]: full/half check propagation.
//! - [`auto_expand`] / [`expand_all`]: expanded-key closure.
//! - [`select`]: single/multi selection toggling.

pub mod check;
pub mod expand;
pub mod select;

pub use check::{apply_check, apply_check_many, CheckedKeys};
pub use expand::{auto_expand, expand_all};
pub use select::{initial_selection, select};
