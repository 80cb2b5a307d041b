//! Headless testing helpers: Pilot, outline snapshots.
//!
//! Use the [`Pilot`] to drive a [`Tree`](crate::tree::Tree) through the same
//! commands a rendered tree would send. Use [`render_outline`] to capture the
//! visible tree as plain text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::render_outline;
